use std::fmt;
use std::str::FromStr;

use larry_core::types::{Entity, FieldName, LinkEntity, RelationKind, Schema};
use tracing::{debug, trace};

use crate::classifier::{classify, lines, LineKind, SourceLine};
use crate::declarations::Declarations;
use crate::error::DslError;
use crate::field_grammar::{parse_field_line, FieldLine};
use crate::header_grammar::parse_header;
use crate::resolve::{resolve, EndOfInput};

/// What happens when a header names an entity that is already declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The new declaration takes over the name and the earlier one's slot.
    #[default]
    Replace,
    /// The second declaration fails with `DslError::DuplicateEntity`.
    Reject,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(Self::Replace),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown duplicate entity policy '{other}': expected replace or reject"
            )),
        }
    }
}

/// Options controlling a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicate_entities: DuplicatePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    NoEntity,
    EntityOpen { current: usize },
}

/// Phase one of the compiler: consumes lines one at a time, building the
/// entity table, the foreign-key obligations and the link entities.
///
/// `finish` hands the collected declarations to [`resolve`].
#[derive(Debug)]
pub struct ResolutionEngine {
    options: ParseOptions,
    state: EngineState,
    declarations: Declarations,
}

impl ResolutionEngine {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            state: EngineState::NoEntity,
            declarations: Declarations::default(),
        }
    }

    /// Returns true once a header line has been seen.
    pub fn has_open_entity(&self) -> bool {
        matches!(self.state, EngineState::EntityOpen { .. })
    }

    /// Feeds one physical line. Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first grammar error on the line, or
    /// `DslError::OrphanField` for a field line before any header.
    pub fn feed(&mut self, line: &SourceLine<'_>) -> Result<(), DslError> {
        if line.is_blank() {
            trace!(line = line.number, "blank");
            return Ok(());
        }

        match classify(line.text) {
            LineKind::Field => self.feed_field(line),
            LineKind::Header => self.feed_header(line),
        }
    }

    /// Ends input and runs obligation resolution.
    ///
    /// # Errors
    ///
    /// Returns `DslError::UnresolvedEntityReference` when an obligation
    /// targets an entity that was never declared.
    pub fn finish(self, end: EndOfInput) -> Result<Schema, DslError> {
        resolve(self.declarations, end)
    }

    /// Ends input without resolving obligations.
    pub fn into_declarations(self) -> Declarations {
        self.declarations
    }

    fn feed_field(&mut self, line: &SourceLine<'_>) -> Result<(), DslError> {
        let EngineState::EntityOpen { current } = self.state else {
            return Err(DslError::OrphanField {
                line: line.number,
                span: line.content_span(),
            });
        };

        let parsed = parse_field_line(line)?;
        let Some(entity) = self.declarations.entities.slot_mut(current) else {
            return Err(DslError::OrphanField {
                line: line.number,
                span: line.content_span(),
            });
        };

        match parsed {
            FieldLine::Timestamps => {
                trace!(line = line.number, entity = %entity.name, "timestamps");
                entity.set_timestamps();
            }
            FieldLine::Column { field, span } => {
                if entity.has_field(&field.name) {
                    return Err(DslError::DuplicateField {
                        entity: entity.name.to_string(),
                        field: field.name.to_string(),
                        line: line.number,
                        span,
                    });
                }
                entity.add_field(field);
            }
        }
        Ok(())
    }

    fn feed_header(&mut self, line: &SourceLine<'_>) -> Result<(), DslError> {
        let header = parse_header(line)?;
        debug!(
            line = line.number,
            entity = %header.name,
            relations = header.relations.len(),
            "entity header"
        );

        if self.declarations.entities.contains(header.name.as_str()) {
            match self.options.duplicate_entities {
                DuplicatePolicy::Reject => {
                    return Err(DslError::DuplicateEntity {
                        entity: header.name.to_string(),
                        line: line.number,
                        span: header.name_span,
                    });
                }
                DuplicatePolicy::Replace => {
                    debug!(line = line.number, entity = %header.name, "replacing earlier declaration");
                }
            }
        }

        let column = FieldName::foreign_key_for(&header.name);
        let mut entity = Entity::new(header.name.clone());

        for relation in header.relations {
            if relation.kind.creates_foreign_key()
                && self
                    .declarations
                    .obligations
                    .register(relation.target.clone(), column.clone())
            {
                debug!(target = %relation.target, column = %column, "foreign key obligation");
            }
            if relation.kind == RelationKind::HasManyAndBelongsTo {
                let link = LinkEntity::new(header.name.clone(), relation.target.clone());
                debug!(table = %link.table_name, "link entity");
                self.declarations.links.push(link);
            }
            entity.add_relation(relation.kind, relation.target);
        }

        let current = self.declarations.entities.insert(entity);
        self.state = EngineState::EntityOpen { current };
        Ok(())
    }
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Parses DSL source into a resolved schema with default options.
///
/// # Errors
///
/// Returns the first error encountered; no partial schema is produced.
pub fn parse(source: &str) -> Result<Schema, DslError> {
    parse_with(source, &ParseOptions::default())
}

/// Parses DSL source into a resolved schema.
///
/// # Errors
///
/// Returns the first error encountered; no partial schema is produced.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Schema, DslError> {
    let mut engine = ResolutionEngine::new(options.clone());
    for line in lines(source) {
        engine.feed(&line)?;
    }
    engine.finish(EndOfInput::of(source))
}
