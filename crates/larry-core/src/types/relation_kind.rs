use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The kind of a relation declared on an entity header, e.g. `Post:hm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    HasOne,
    HasMany,
    BelongsTo,
    HasManyAndBelongsTo,
}

impl RelationKind {
    /// Every kind, in canonical print order.
    pub const ALL: [RelationKind; 4] = [
        Self::HasOne,
        Self::HasMany,
        Self::BelongsTo,
        Self::HasManyAndBelongsTo,
    ];

    /// The short code used in the DSL.
    pub fn code(&self) -> &'static str {
        match self {
            Self::HasOne => "ho",
            Self::HasMany => "hm",
            Self::BelongsTo => "bt",
            Self::HasManyAndBelongsTo => "hmb",
        }
    }

    /// Maps an exact, case-sensitive DSL code to its kind.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Whether declaring this relation obliges the related entity to carry
    /// a `{declaring}_id` column.
    pub fn creates_foreign_key(&self) -> bool {
        matches!(self, Self::HasOne | Self::HasMany)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HasOne => write!(f, "has_one"),
            Self::HasMany => write!(f, "has_many"),
            Self::BelongsTo => write!(f, "belongs_to"),
            Self::HasManyAndBelongsTo => write!(f, "has_many_and_belongs_to"),
        }
    }
}

impl FromStr for RelationKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ModelError::UnknownRelationCode(s.to_string()))
    }
}
