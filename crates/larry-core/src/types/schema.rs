use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::link_entity::LinkEntity;

/// The fully resolved entity graph handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Entities in first-declaration order.
    pub entities: Vec<Entity>,
    /// Link tables in declaration order.
    #[serde(default)]
    pub links: Vec<LinkEntity>,
}

impl Schema {
    pub fn new(entities: Vec<Entity>, links: Vec<LinkEntity>) -> Self {
        Self { entities, links }
    }

    /// Looks up an entity by its declared name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name.as_str() == name)
    }

    /// Looks up a link table by table name.
    pub fn link(&self, table_name: &str) -> Option<&LinkEntity> {
        self.links.iter().find(|l| l.table_name == table_name)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.iter().map(|e| e.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.links.is_empty()
    }
}
