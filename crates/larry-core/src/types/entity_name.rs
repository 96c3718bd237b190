use std::fmt;

use serde::{Deserialize, Serialize};

use super::identifier::is_identifier;
use crate::error::ModelError;
use crate::inflect::pluralize;

/// A validated entity name matching `[A-Za-z0-9_]+`, case preserved.
///
/// The name is used verbatim in generated identifiers; only the derived
/// forms (table name, foreign-key column) are lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    /// Creates a new `EntityName`, validating identifier format.
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if !is_identifier(&s) {
            return Err(ModelError::InvalidEntityName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercased name, used in every derived identifier.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// The plural table name: `pluralize(lowercase(name))`.
    pub fn table_name(&self) -> String {
        pluralize(&self.lowercase())
    }

    /// The column other tables use to reference this entity: `{lower}_id`.
    pub fn foreign_key_column(&self) -> String {
        format!("{}_id", self.lowercase())
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityName> for String {
    fn from(n: EntityName) -> String {
        n.0
    }
}

impl TryFrom<String> for EntityName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["User", "user", "BlogPost", "Post2", "blog_post"] {
            assert!(EntityName::new(name).is_ok(), "expected valid: {name}");
        }
    }

    #[test]
    fn invalid_names() {
        for name in ["", "Blog Post", "User:hm", "my-entity"] {
            assert!(EntityName::new(name).is_err(), "expected invalid: {name}");
        }
    }

    #[test]
    fn derived_forms_are_lowercase() {
        let name = EntityName::new("BlogPost").unwrap();
        assert_eq!(name.as_str(), "BlogPost");
        assert_eq!(name.lowercase(), "blogpost");
        assert_eq!(name.table_name(), "blogposts");
        assert_eq!(name.foreign_key_column(), "blogpost_id");
    }

    #[test]
    fn table_name_pluralizes() {
        assert_eq!(EntityName::new("Category").unwrap().table_name(), "categories");
        assert_eq!(EntityName::new("Person").unwrap().table_name(), "people");
    }

    #[test]
    fn serde_roundtrip() {
        let name = EntityName::new("User").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"User\"");
        let back: EntityName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result = serde_json::from_str::<EntityName>("\"Blog Post\"");
        assert!(result.is_err());
    }
}
