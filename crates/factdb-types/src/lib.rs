//! Factdb Types
//!
//! This crate defines the data structures shared by the factdb converter crates
//! (currently `factdb-core` and `factdb-cli`): parsed facts, the category and
//! relation table specs that drive classification, and the parse error raised
//! for malformed fact lines.

#![deny(missing_docs)]

mod error;
mod types;

pub use error::ParseError;
pub use types::{ArgRange, CategorySpec, Fact, RelationSpec};
