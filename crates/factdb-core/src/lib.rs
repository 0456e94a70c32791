#![allow(missing_docs)]
//! Core functionality for the factdb converter.
//!
//! Turns a Prolog-style fact file (`city('texas','tx','austin',345496).`, one
//! fact per line) into a database of s-expression definitions. Conversion is a
//! single pass: the [`parser`] splits each line, the [`classifier`] files the
//! arguments into the category and relation tables of a [`SchemaConfig`], and
//! the [`emitter`] renders the accumulated tables.
//!
//! ```
//! use factdb_core::Converter;
//!
//! let lisp = Converter::geobase()
//!     .convert_str("city('texas','tx','austin',345496).")
//!     .unwrap();
//! assert!(lisp.contains("(define austin:c \"austin\")"));
//! ```

/// Table-driven classification of facts
pub mod classifier;
/// Table configuration and the built-in geobase tables
pub mod config;
/// Fact syntax and built-in table constants
pub mod constants;
/// End-to-end conversion runs
pub mod converter;
/// Accumulated tables ready for emission
pub mod database;
/// S-expression rendering
pub mod emitter;
/// Structured error types
pub mod error;
/// Fact line parsing
pub mod parser;
/// Run statistics
pub mod stats;

pub use classifier::{Classifier, cross_pairs};
pub use config::SchemaConfig;
pub use converter::{Converter, open_fact_file};
pub use database::{CategoryTable, Database, RelationTable};
pub use emitter::{entity_id, render_atom, render_database, write_database};
pub use error::{ConvertError, ConvertResult};
pub use factdb_types::{ArgRange, CategorySpec, Fact, ParseError, RelationSpec};
pub use parser::{FactLines, parse_fact};
pub use stats::ConversionStats;
