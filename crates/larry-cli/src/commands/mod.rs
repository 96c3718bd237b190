pub mod completions;
pub mod parse;
pub mod version;
