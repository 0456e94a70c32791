//! Command-line front ends for the factdb converter.
//!
//! Two binaries share this library: `geobase-to-lisp <INPUT> <OUTPUT>` and the
//! multi-command `factdb` tool.

/// Clap definitions and dispatch
pub mod cli;
/// Command implementations
pub mod commands;
/// Environment-backed run configuration
pub mod config;
/// Stdin/stdout aware input and output
pub mod io;
/// Tracing subscriber setup
pub mod logging;

pub use cli::{FactdbCli, GeobaseToLispCli};
