use serde::{Deserialize, Serialize};

use super::entity_name::EntityName;
use super::field::Field;
use super::field_name::FieldName;

/// A join table synthesized for a has-many-and-belongs-to relation.
///
/// Declared as `A B:hmb`, it is named `{lower(B)}_{lower(A)}` and holds the
/// integer columns `{lower(A)}_id` and `{lower(B)}_id`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntity {
    pub table_name: String,
    /// The entity whose header declared the relation.
    pub from: EntityName,
    /// The related entity named in the relation.
    pub to: EntityName,
    pub fields: [Field; 2],
}

impl LinkEntity {
    pub fn new(from: EntityName, to: EntityName) -> Self {
        let fields = [
            Field::link_column(FieldName::foreign_key_for(&from)),
            Field::link_column(FieldName::foreign_key_for(&to)),
        ];
        Self {
            table_name: format!("{}_{}", to.lowercase(), from.lowercase()),
            from,
            to,
            fields,
        }
    }

    /// Link tables never carry timestamps.
    pub fn timestamps(&self) -> bool {
        false
    }
}

impl std::fmt::Display for LinkEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} <-> {}): {}, {}",
            self.table_name, self.from, self.to, self.fields[0], self.fields[1]
        )
    }
}
