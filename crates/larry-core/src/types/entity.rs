use serde::{Deserialize, Serialize};

use super::entity_name::EntityName;
use super::field::Field;
use super::field_name::FieldName;
use super::relation_kind::RelationKind;

/// A named table definition with its fields and declared relations.
///
/// Fields keep declaration order. No implicit primary key is added; renderers
/// append their own auto-increment key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: EntityName,
    pub table_name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub timestamps: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub belongs_to: Vec<EntityName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_one: Vec<EntityName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_many: Vec<EntityName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_many_and_belongs_to: Vec<EntityName>,
}

impl Entity {
    /// Creates an empty entity, deriving its plural table name.
    pub fn new(name: EntityName) -> Self {
        Self {
            table_name: name.table_name(),
            name,
            fields: Vec::new(),
            timestamps: false,
            belongs_to: Vec::new(),
            has_one: Vec::new(),
            has_many: Vec::new(),
            has_many_and_belongs_to: Vec::new(),
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }

    pub fn has_field(&self, name: &FieldName) -> bool {
        self.fields.iter().any(|f| f.name == *name)
    }

    /// Appends a field after all existing ones.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Appends `related` to the relation list for `kind`. Duplicates are kept.
    pub fn add_relation(&mut self, kind: RelationKind, related: EntityName) {
        self.relations_mut(kind).push(related);
    }

    /// The entities related through `kind`, in declaration order.
    pub fn relations(&self, kind: RelationKind) -> &[EntityName] {
        match kind {
            RelationKind::HasOne => &self.has_one,
            RelationKind::HasMany => &self.has_many,
            RelationKind::BelongsTo => &self.belongs_to,
            RelationKind::HasManyAndBelongsTo => &self.has_many_and_belongs_to,
        }
    }

    /// Every `(kind, related)` pair, grouped by kind in canonical order.
    pub fn all_relations(&self) -> impl Iterator<Item = (RelationKind, &EntityName)> + '_ {
        RelationKind::ALL
            .into_iter()
            .flat_map(move |kind| self.relations(kind).iter().map(move |name| (kind, name)))
    }

    pub fn set_timestamps(&mut self) {
        self.timestamps = true;
    }

    fn relations_mut(&mut self, kind: RelationKind) -> &mut Vec<EntityName> {
        match kind {
            RelationKind::HasOne => &mut self.has_one,
            RelationKind::HasMany => &mut self.has_many,
            RelationKind::BelongsTo => &mut self.belongs_to,
            RelationKind::HasManyAndBelongsTo => &mut self.has_many_and_belongs_to,
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.table_name)?;
        for (kind, related) in self.all_relations() {
            write!(f, " {kind} {related}")?;
        }
        writeln!(f)?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        if self.timestamps {
            writeln!(f, "  timestamps")?;
        }
        Ok(())
    }
}
