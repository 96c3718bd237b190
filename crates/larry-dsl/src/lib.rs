//! # larry-dsl
//!
//! Compiler front-end for the larry entity DSL.
//!
//! The DSL is line oriented. A flush-left line declares an entity and its
//! relations; indented lines below it declare that entity's fields:
//!
//! ```text
//! User Post:hm Profile:ho Role:hmb
//!     name:string,100:unique
//!     email:string -> required|email
//!     timestamps
//! ```
//!
//! This crate provides:
//! - A `logos` lexer for field definitions and header lines
//! - The line classifier and the field / header grammars
//! - A two-phase resolver: `ResolutionEngine` collects declarations and
//!   foreign-key obligations, `resolve` materializes them
//! - A printer that writes a `Schema` back to canonical DSL text
//!
//! # Example
//!
//! ```
//! use larry_dsl::{parse, print};
//!
//! let source = "\
//! User Post:hm
//!     name:string
//!
//! Post
//!     title:string
//! ";
//!
//! let schema = parse(source).expect("parse failed");
//! let post = schema.entity("Post").unwrap();
//! assert_eq!(post.table_name, "posts");
//! assert_eq!(post.fields[1].name.as_str(), "user_id");
//!
//! let dsl_text = print(&schema);
//! assert!(dsl_text.starts_with("User Post:hm\n"));
//! ```

pub mod classifier;
pub mod declarations;
pub mod engine;
pub mod error;
pub mod field_grammar;
pub mod header_grammar;
mod lexer;
pub mod printer;
pub mod resolve;
pub mod token;

pub use declarations::{Declarations, EntityTable, ObligationTable};
pub use engine::{parse, parse_with, DuplicatePolicy, ParseOptions, ResolutionEngine};
pub use error::{DslError, Span};
pub use printer::print;
pub use resolve::{resolve, EndOfInput};
