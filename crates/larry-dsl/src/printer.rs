use larry_core::types::{Entity, Field, Schema};

use crate::field_grammar::{RULES_DELIMITER, RULE_SEPARATOR, TIMESTAMPS};

const INDENT: &str = "    ";

/// Print a resolved schema back to DSL text.
///
/// Only declared fields are written; foreign-key columns and link entities
/// are regenerated when the output is parsed again. Entities are separated
/// by blank lines and relations are grouped by kind.
pub fn print(schema: &Schema) -> String {
    let mut output = String::new();
    for (i, entity) in schema.entities.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        print_entity(entity, &mut output);
    }
    output
}

fn print_entity(entity: &Entity, output: &mut String) {
    output.push_str(entity.name.as_str());
    for (kind, target) in entity.all_relations() {
        output.push(' ');
        output.push_str(target.as_str());
        output.push(':');
        output.push_str(kind.code());
    }
    output.push('\n');

    for field in entity.fields.iter().filter(|f| f.is_declared()) {
        output.push_str(INDENT);
        print_field(field, output);
        output.push('\n');
    }

    if entity.timestamps {
        output.push_str(INDENT);
        output.push_str(TIMESTAMPS);
        output.push('\n');
    }
}

fn print_field(field: &Field, output: &mut String) {
    output.push_str(field.name.as_str());
    output.push(':');
    output.push_str(&field.field_type);

    for param in &field.params {
        output.push(',');
        output.push_str(param);
    }

    for property in field.properties() {
        output.push(':');
        output.push_str(property.as_str());
    }

    if !field.validation_rules.is_empty() {
        output.push(' ');
        output.push_str(RULES_DELIMITER);
        output.push(' ');
        let separator = RULE_SEPARATOR.to_string();
        output.push_str(&field.validation_rules.join(&separator));
    }
}

#[cfg(test)]
mod tests {
    use larry_core::types::{EntityName, FieldName, FieldProperty, LinkEntity, RelationKind};

    use super::*;

    fn entity(name: &str) -> Entity {
        Entity::new(EntityName::new(name).unwrap())
    }

    fn field(name: &str, ty: &str) -> Field {
        Field::new(FieldName::new(name).unwrap(), ty).unwrap()
    }

    #[test]
    fn print_bare_entity() {
        let schema = Schema::new(vec![entity("User")], Vec::new());
        assert_eq!(print(&schema), "User\n");
    }

    #[test]
    fn print_empty_schema() {
        assert_eq!(print(&Schema::default()), "");
    }

    #[test]
    fn print_field_with_everything() {
        let mut user = entity("User");
        user.add_field(
            field("price", "decimal")
                .with_params(vec!["8".into(), "2".into()])
                .with_property(FieldProperty::Unsigned)
                .with_property(FieldProperty::Index)
                .with_validation_rules(vec!["required".into(), "numeric".into()]),
        );
        let schema = Schema::new(vec![user], Vec::new());
        assert_eq!(
            print(&schema),
            "User\n    price:decimal,8,2:unsigned:index -> required|numeric\n"
        );
    }

    #[test]
    fn print_relations_grouped_by_kind() {
        let mut user = entity("User");
        user.add_relation(RelationKind::HasMany, EntityName::new("Post").unwrap());
        user.add_relation(RelationKind::HasOne, EntityName::new("Profile").unwrap());
        user.add_relation(
            RelationKind::HasManyAndBelongsTo,
            EntityName::new("Role").unwrap(),
        );
        let schema = Schema::new(vec![user], Vec::new());
        assert_eq!(print(&schema), "User Profile:ho Post:hm Role:hmb\n");
    }

    #[test]
    fn print_skips_inferred_columns_and_links() {
        let mut post = entity("Post");
        post.add_field(field("title", "string"));
        post.add_field(Field::foreign_key(FieldName::new("user_id").unwrap()));
        post.set_timestamps();
        let schema = Schema::new(
            vec![post],
            vec![LinkEntity::new(
                EntityName::new("Post").unwrap(),
                EntityName::new("Tag").unwrap(),
            )],
        );
        assert_eq!(print(&schema), "Post\n    title:string\n    timestamps\n");
    }

    #[test]
    fn print_separates_entities() {
        let schema = Schema::new(vec![entity("User"), entity("Post")], Vec::new());
        assert_eq!(print(&schema), "User\n\nPost\n");
    }
}
