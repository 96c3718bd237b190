use larry_core::types::{Field, Schema};
use tracing::debug;

use crate::classifier::last_line_number;
use crate::declarations::Declarations;
use crate::error::{DslError, Span};

/// Where the input ended; unresolved references are reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput {
    /// Number of the last physical line.
    pub line: usize,
    /// Byte length of the source.
    pub offset: usize,
}

impl EndOfInput {
    pub fn of(source: &str) -> Self {
        Self {
            line: last_line_number(source),
            offset: source.len(),
        }
    }
}

/// Materializes every pending foreign-key column onto its target entity.
///
/// Columns are appended after the target's existing fields, targets in
/// obligation-registration order. A column the target already declares is
/// left as declared.
///
/// # Errors
///
/// Returns `DslError::UnresolvedEntityReference` for the first target that
/// was never declared.
pub fn resolve(declarations: Declarations, end: EndOfInput) -> Result<Schema, DslError> {
    let Declarations {
        mut entities,
        obligations,
        links,
    } = declarations;

    let mut materialized = 0usize;
    for (target, columns) in obligations.iter() {
        let Some(entity) = entities.get_mut(target.as_str()) else {
            return Err(DslError::UnresolvedEntityReference {
                entity: target.to_string(),
                column: columns.first().map(ToString::to_string).unwrap_or_default(),
                line: end.line,
                span: Span::empty(end.offset),
            });
        };

        for column in columns {
            if entity.has_field(column) {
                debug!(entity = %target, column = %column, "foreign key already declared");
                continue;
            }
            entity.add_field(Field::foreign_key(column.clone()));
            materialized += 1;
        }
    }

    debug!(
        entities = entities.len(),
        links = links.len(),
        foreign_keys = materialized,
        "resolved schema"
    );

    Ok(Schema::new(entities.into_vec(), links))
}

#[cfg(test)]
mod tests {
    use larry_core::types::{Entity, EntityName, FieldName, FieldOrigin, LinkEntity};

    use super::*;

    fn entity_name(s: &str) -> EntityName {
        EntityName::new(s).unwrap()
    }

    fn field_name(s: &str) -> FieldName {
        FieldName::new(s).unwrap()
    }

    fn end() -> EndOfInput {
        EndOfInput { line: 9, offset: 80 }
    }

    #[test]
    fn empty_declarations_resolve_to_empty_schema() {
        let schema = resolve(Declarations::default(), end()).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn columns_are_appended_after_declared_fields() {
        let mut declarations = Declarations::default();
        let mut comment = Entity::new(entity_name("Comment"));
        comment.add_field(Field::new(field_name("body"), "text").unwrap());
        declarations.entities.insert(comment);
        declarations
            .obligations
            .register(entity_name("Comment"), field_name("post_id"));
        declarations
            .obligations
            .register(entity_name("Comment"), field_name("user_id"));

        let schema = resolve(declarations, end()).unwrap();
        let comment = schema.entity("Comment").unwrap();
        let names: Vec<&str> = comment.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["body", "post_id", "user_id"]);
        assert_eq!(comment.fields[1].field_type, "integer");
        assert_eq!(comment.fields[1].origin, FieldOrigin::ForeignKey);
    }

    #[test]
    fn declared_column_satisfies_obligation() {
        let mut declarations = Declarations::default();
        let mut post = Entity::new(entity_name("Post"));
        post.add_field(
            Field::new(field_name("user_id"), "integer")
                .unwrap()
                .with_property(larry_core::types::FieldProperty::Unsigned),
        );
        declarations.entities.insert(post);
        declarations
            .obligations
            .register(entity_name("Post"), field_name("user_id"));

        let schema = resolve(declarations, end()).unwrap();
        let post = schema.entity("Post").unwrap();
        assert_eq!(post.fields.len(), 1);
        assert!(post.fields[0].unsigned);
        assert!(post.fields[0].is_declared());
    }

    #[test]
    fn unresolved_target_reports_end_of_input() {
        let mut declarations = Declarations::default();
        declarations.entities.insert(Entity::new(entity_name("A")));
        declarations
            .obligations
            .register(entity_name("B"), field_name("a_id"));

        let err = resolve(declarations, end()).unwrap_err();
        assert_eq!(
            err,
            DslError::UnresolvedEntityReference {
                entity: "B".into(),
                column: "a_id".into(),
                line: 9,
                span: Span::empty(80),
            }
        );
    }

    #[test]
    fn links_pass_through() {
        let mut declarations = Declarations::default();
        declarations.entities.insert(Entity::new(entity_name("Post")));
        declarations
            .links
            .push(LinkEntity::new(entity_name("Post"), entity_name("Tag")));

        let schema = resolve(declarations, end()).unwrap();
        assert_eq!(schema.links.len(), 1);
        assert_eq!(schema.links[0].table_name, "tag_post");
    }

    #[test]
    fn end_of_input_counts_physical_lines() {
        assert_eq!(EndOfInput::of("A B:ho"), EndOfInput { line: 1, offset: 6 });
        assert_eq!(EndOfInput::of("A\n\nB\n"), EndOfInput { line: 4, offset: 5 });
    }
}
