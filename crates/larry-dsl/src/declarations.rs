use std::collections::HashMap;

use larry_core::types::{Entity, EntityName, FieldName, LinkEntity};

/// Pending foreign-key columns, keyed by the entity that must receive them.
///
/// Targets keep first-registration order and each target's columns are
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObligationTable {
    entries: Vec<(EntityName, Vec<FieldName>)>,
}

impl ObligationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `column` to the set pending for `target`. Returns false when the
    /// column was already pending.
    pub fn register(&mut self, target: EntityName, column: FieldName) -> bool {
        match self.entries.iter_mut().find(|(name, _)| *name == target) {
            Some((_, columns)) if columns.contains(&column) => false,
            Some((_, columns)) => {
                columns.push(column);
                true
            }
            None => {
                self.entries.push((target, vec![column]));
                true
            }
        }
    }

    /// The columns pending for `target`.
    pub fn columns_for(&self, target: &str) -> Option<&[FieldName]> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == target)
            .map(|(_, columns)| columns.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityName, &[FieldName])> + '_ {
        self.entries
            .iter()
            .map(|(name, columns)| (name, columns.as_slice()))
    }

    /// Number of pending columns across all targets.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, columns)| columns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entities keyed by name, in first-declaration order.
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entity` and returns its slot. An entity of the same name is
    /// replaced in its original slot.
    pub fn insert(&mut self, entity: Entity) -> usize {
        match self.index.get(entity.name.as_str()) {
            Some(&slot) => {
                self.entities[slot] = entity;
                slot
            }
            None => {
                let slot = self.entities.len();
                self.index.insert(entity.name.to_string(), slot);
                self.entities.push(entity);
                slot
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&slot| &self.entities[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.index.get(name).map(|&slot| &mut self.entities[slot])
    }

    pub(crate) fn slot_mut(&mut self, slot: usize) -> Option<&mut Entity> {
        self.entities.get_mut(slot)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn into_vec(self) -> Vec<Entity> {
        self.entities
    }
}

/// Everything collected from the source before obligations are resolved.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    pub entities: EntityTable,
    pub obligations: ObligationTable,
    pub links: Vec<LinkEntity>,
}
