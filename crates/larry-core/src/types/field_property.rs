use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Column properties that can follow a field's type, e.g. `email:string:unique`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldProperty {
    Nullable,
    Fulltext,
    Index,
    Primary,
    Unique,
    Unsigned,
}

impl FieldProperty {
    /// Every property, in canonical print order.
    pub const ALL: [FieldProperty; 6] = [
        Self::Primary,
        Self::Unique,
        Self::Nullable,
        Self::Unsigned,
        Self::Index,
        Self::Fulltext,
    ];

    /// The DSL keyword for this property.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nullable => "nullable",
            Self::Fulltext => "fulltext",
            Self::Index => "index",
            Self::Primary => "primary",
            Self::Unique => "unique",
            Self::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for FieldProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldProperty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ModelError::UnknownFieldProperty(s.to_string()))
    }
}
