use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity_name::EntityName;
use super::identifier::is_identifier;
use crate::error::ModelError;

/// A validated column name matching `[A-Za-z0-9_]+`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new `FieldName`, validating identifier format.
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if !is_identifier(&s) {
            return Err(ModelError::InvalidFieldName(s));
        }
        Ok(Self(s))
    }

    /// The foreign-key column referencing `entity`, e.g. `user_id` for `User`.
    pub fn foreign_key_for(entity: &EntityName) -> Self {
        Self(entity.foreign_key_column())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldName> for String {
    fn from(n: FieldName) -> String {
        n.0
    }
}

impl TryFrom<String> for FieldName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
