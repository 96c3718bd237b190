mod entity;
mod entity_name;
mod field;
mod field_name;
mod field_property;
mod identifier;
mod link_entity;
mod relation_kind;
mod schema;

pub use entity::Entity;
pub use entity_name::EntityName;
pub use field::{Field, FieldOrigin, INTEGER_TYPE};
pub use field_name::FieldName;
pub use field_property::FieldProperty;
pub use identifier::is_identifier;
pub use link_entity::LinkEntity;
pub use relation_kind::RelationKind;
pub use schema::Schema;
