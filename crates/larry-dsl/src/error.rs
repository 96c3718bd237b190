use std::fmt;

use larry_core::error::ModelError;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that abort a parse.
///
/// Every variant carries the 1-based line at which it was detected and a
/// span into the full source. Unresolved references are only detected at
/// end of input, so they point at the last line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// The lexer encountered text that does not match any rule.
    InvalidToken { line: usize, span: Span },

    /// A field line appeared before any entity header.
    OrphanField { line: usize, span: Span },

    /// A field line has no `:type` segment, or the type is empty.
    MissingType {
        field: String,
        line: usize,
        span: Span,
    },

    /// A field property is not in the property vocabulary.
    UnknownProperty {
        property: String,
        line: usize,
        span: Span,
    },

    /// A relation code is not one of `ho`, `hm`, `bt`, `hmb`.
    UnknownRelation {
        target: String,
        code: String,
        line: usize,
        span: Span,
    },

    /// A has-one / has-many relation targets an entity never declared.
    UnresolvedEntityReference {
        entity: String,
        column: String,
        line: usize,
        span: Span,
    },

    /// A field name was declared twice in one entity.
    DuplicateField {
        entity: String,
        field: String,
        line: usize,
        span: Span,
    },

    /// An entity name was declared twice while duplicates are rejected.
    DuplicateEntity {
        entity: String,
        line: usize,
        span: Span,
    },

    /// A name failed model validation.
    Model {
        source: ModelError,
        line: usize,
        span: Span,
    },
}

impl DslError {
    /// The 1-based line at which the error was detected.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::OrphanField { line, .. }
            | Self::MissingType { line, .. }
            | Self::UnknownProperty { line, .. }
            | Self::UnknownRelation { line, .. }
            | Self::UnresolvedEntityReference { line, .. }
            | Self::DuplicateField { line, .. }
            | Self::DuplicateEntity { line, .. }
            | Self::Model { line, .. } => *line,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidToken { span, .. }
            | Self::OrphanField { span, .. }
            | Self::MissingType { span, .. }
            | Self::UnknownProperty { span, .. }
            | Self::UnknownRelation { span, .. }
            | Self::UnresolvedEntityReference { span, .. }
            | Self::DuplicateField { span, .. }
            | Self::DuplicateEntity { span, .. }
            | Self::Model { span, .. } => span,
        }
    }

    /// The message without its line prefix.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidToken { .. } => "invalid token".to_string(),
            Self::OrphanField { .. } => {
                "field specified, but no entity declared yet".to_string()
            }
            Self::MissingType { field, .. } => {
                format!("field type not specified for '{field}'")
            }
            Self::UnknownProperty { property, .. } => {
                format!("unknown field property '{property}'")
            }
            Self::UnknownRelation { target, code, .. } => {
                format!("undefined relation '{code}' for '{target}': expected ho, hm, bt or hmb")
            }
            Self::UnresolvedEntityReference { entity, column, .. } => {
                format!(
                    "entity '{entity}' referenced in a relation (needs '{column}'), but not defined"
                )
            }
            Self::DuplicateField { entity, field, .. } => {
                format!("duplicate field '{field}' in entity '{entity}'")
            }
            Self::DuplicateEntity { entity, .. } => {
                format!("entity '{entity}' is already declared")
            }
            Self::Model { source, .. } => source.to_string(),
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Line No. {}] {}", self.line(), self.message())
    }
}

impl std::error::Error for DslError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Model { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn span_display() {
        let span = Span::new(10, 20);
        assert_eq!(span.to_string(), "10..20");
        assert_eq!(span.len(), 10);
        assert!(Span::empty(4).is_empty());
    }

    #[test]
    fn display_has_line_prefix() {
        let err = DslError::OrphanField {
            line: 1,
            span: Span::new(0, 13),
        };
        assert_eq!(
            err.to_string(),
            "[Line No. 1] field specified, but no entity declared yet"
        );
    }

    #[test]
    fn error_display_unknown_relation() {
        let err = DslError::UnknownRelation {
            target: "B".into(),
            code: "xx".into(),
            line: 3,
            span: Span::new(20, 24),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("[Line No. 3]"));
        assert!(msg.contains("'xx'"));
        assert!(msg.contains("'B'"));
    }

    #[test]
    fn error_display_unresolved_reference() {
        let err = DslError::UnresolvedEntityReference {
            entity: "Comment".into(),
            column: "post_id".into(),
            line: 9,
            span: Span::empty(120),
        };
        let msg = err.message();
        assert!(msg.contains("Comment"));
        assert!(msg.contains("not defined"));
        assert_eq!(err.line(), 9);
    }

    #[test]
    fn error_display_unknown_property() {
        let err = DslError::UnknownProperty {
            property: "indexed".into(),
            line: 2,
            span: Span::new(5, 12),
        };
        assert!(err.message().contains("unknown field property 'indexed'"));
    }

    #[test]
    fn accessors_cover_every_variant() {
        let err = DslError::DuplicateEntity {
            entity: "User".into(),
            line: 7,
            span: Span::new(40, 44),
        };
        assert_eq!(err.line(), 7);
        assert_eq!(err.span(), &Span::new(40, 44));
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DslError::InvalidToken {
            line: 1,
            span: Span::new(0, 1),
        });
        assert!(err.to_string().contains("invalid token"));
    }

    #[test]
    fn model_error_has_source() {
        let err = DslError::Model {
            source: ModelError::InvalidFieldName("first name".into()),
            line: 2,
            span: Span::new(3, 13),
        };
        assert!(err.source().is_some());
        assert!(err.message().contains("first name"));
    }

    #[test]
    fn non_model_errors_have_no_source() {
        let err = DslError::MissingType {
            field: "name".into(),
            line: 2,
            span: Span::new(0, 4),
        };
        assert!(err.source().is_none());
    }
}
