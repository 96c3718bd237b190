//! # larry-core
//!
//! The resolved entity/relationship model produced by the larry DSL
//! compiler and consumed by code renderers.
//!
//! - [`types::Entity`]: a table with ordered fields and four relation lists
//! - [`types::Field`]: a column with its type, params, properties and rules
//! - [`types::LinkEntity`]: a join table synthesized for many-to-many relations
//! - [`types::Schema`]: the complete graph of entities and link tables

pub mod error;
pub mod inflect;
pub mod types;

pub use error::ModelError;
pub use inflect::pluralize;
