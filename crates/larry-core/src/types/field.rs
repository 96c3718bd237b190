use serde::{Deserialize, Serialize};

use super::field_name::FieldName;
use super::field_property::FieldProperty;
use crate::error::ModelError;

/// Column type given to foreign-key and link-table columns.
pub const INTEGER_TYPE: &str = "integer";

/// Where a field came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// Written on a field line.
    #[default]
    Declared,
    /// Materialized from a has-one / has-many obligation.
    ForeignKey,
    /// One of the two columns of a many-to-many link table.
    Link,
}

impl FieldOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declared => "declared",
            Self::ForeignKey => "foreign_key",
            Self::Link => "link",
        }
    }
}

/// A single column definition.
///
/// `field_type` is an opaque type tag (e.g. `string`, `decimal`) and `params`
/// are the comma-separated tokens that followed it, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: FieldName,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub fulltext: bool,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_rules: Vec<String>,
    #[serde(default)]
    pub origin: FieldOrigin,
}

impl Field {
    /// Creates a declared field with no params, properties or rules.
    pub fn new(name: FieldName, field_type: impl Into<String>) -> Result<Self, ModelError> {
        let field_type = field_type.into();
        if field_type.is_empty() {
            return Err(ModelError::EmptyFieldType {
                field: name.to_string(),
            });
        }
        Ok(Self::unchecked(name, field_type, FieldOrigin::Declared))
    }

    /// An integer column materialized for a foreign-key obligation.
    pub fn foreign_key(name: FieldName) -> Self {
        Self::unchecked(name, INTEGER_TYPE.to_string(), FieldOrigin::ForeignKey)
    }

    /// An integer column of a link table.
    pub fn link_column(name: FieldName) -> Self {
        Self::unchecked(name, INTEGER_TYPE.to_string(), FieldOrigin::Link)
    }

    fn unchecked(name: FieldName, field_type: String, origin: FieldOrigin) -> Self {
        Self {
            name,
            field_type,
            params: Vec::new(),
            nullable: false,
            primary: false,
            unique: false,
            indexed: false,
            fulltext: false,
            unsigned: false,
            default: None,
            validation_rules: Vec::new(),
            origin,
        }
    }

    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_property(mut self, property: FieldProperty) -> Self {
        self.set_property(property);
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_validation_rules(mut self, rules: Vec<String>) -> Self {
        self.validation_rules = rules;
        self
    }

    /// Sets a property flag. Setting one twice has no further effect.
    pub fn set_property(&mut self, property: FieldProperty) -> &mut Self {
        *self.flag_mut(property) = true;
        self
    }

    pub fn has_property(&self, property: FieldProperty) -> bool {
        match property {
            FieldProperty::Nullable => self.nullable,
            FieldProperty::Fulltext => self.fulltext,
            FieldProperty::Index => self.indexed,
            FieldProperty::Primary => self.primary,
            FieldProperty::Unique => self.unique,
            FieldProperty::Unsigned => self.unsigned,
        }
    }

    /// The properties that are set, in canonical order.
    pub fn properties(&self) -> impl Iterator<Item = FieldProperty> + '_ {
        FieldProperty::ALL
            .into_iter()
            .filter(move |p| self.has_property(*p))
    }

    /// Returns true if the field was written in the source rather than inferred.
    pub fn is_declared(&self) -> bool {
        self.origin == FieldOrigin::Declared
    }

    fn flag_mut(&mut self, property: FieldProperty) -> &mut bool {
        match property {
            FieldProperty::Nullable => &mut self.nullable,
            FieldProperty::Fulltext => &mut self.fulltext,
            FieldProperty::Index => &mut self.indexed,
            FieldProperty::Primary => &mut self.primary,
            FieldProperty::Unique => &mut self.unique,
            FieldProperty::Unsigned => &mut self.unsigned,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.field_type)?;
        if !self.params.is_empty() {
            write!(f, "({})", self.params.join(", "))?;
        }
        for p in self.properties() {
            write!(f, " {p}")?;
        }
        if let Some(default) = &self.default {
            write!(f, " default({default})")?;
        }
        if !self.validation_rules.is_empty() {
            write!(f, " [{}]", self.validation_rules.join("|"))?;
        }
        Ok(())
    }
}
