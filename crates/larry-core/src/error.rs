use std::fmt;

/// Errors that occur when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Entity name is not an identifier `[A-Za-z0-9_]+`.
    InvalidEntityName(String),
    /// Field name is not an identifier `[A-Za-z0-9_]+`.
    InvalidFieldName(String),
    /// Field type is empty.
    EmptyFieldType { field: String },
    /// Property token outside the field property vocabulary.
    UnknownFieldProperty(String),
    /// Relation code outside `ho`, `hm`, `bt`, `hmb`.
    UnknownRelationCode(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntityName(s) => {
                write!(
                    f,
                    "invalid entity name '{s}': must be an identifier [A-Za-z0-9_]+"
                )
            }
            Self::InvalidFieldName(s) => {
                write!(
                    f,
                    "invalid field name '{s}': must be an identifier [A-Za-z0-9_]+"
                )
            }
            Self::EmptyFieldType { field } => {
                write!(f, "field '{field}' has an empty type")
            }
            Self::UnknownFieldProperty(p) => write!(f, "unknown field property '{p}'"),
            Self::UnknownRelationCode(c) => write!(f, "unknown relation code '{c}'"),
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let cases = vec![
            (
                ModelError::InvalidEntityName("".into()),
                "invalid entity name ''",
            ),
            (
                ModelError::InvalidFieldName("first name".into()),
                "invalid field name 'first name'",
            ),
            (
                ModelError::EmptyFieldType {
                    field: "email".into(),
                },
                "field 'email' has an empty type",
            ),
            (
                ModelError::UnknownFieldProperty("nullabel".into()),
                "unknown field property 'nullabel'",
            ),
            (
                ModelError::UnknownRelationCode("xx".into()),
                "unknown relation code 'xx'",
            ),
        ];

        for (error, expected_prefix) in cases {
            let msg = error.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error display for {error:?} = '{msg}', expected to start with '{expected_prefix}'"
            );
        }
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ModelError::InvalidEntityName("x y".into()));
        assert!(err.to_string().contains("invalid entity name"));
    }
}
