//! Command-line definitions for the factdb tools
//!
//! `geobase-to-lisp` is the single-purpose converter; `factdb` groups the
//! converter with table inspection and dry-run checking.

use crate::commands;
use crate::logging::init_logging;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// Convert a geobase fact file into a Lisp fact database
#[derive(Parser, Debug)]
#[command(name = "geobase-to-lisp")]
#[command(about = "Convert a Prolog-style geobase fact file into a Lisp fact database")]
#[command(version)]
pub struct GeobaseToLispCli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

impl GeobaseToLispCli {
    /// Execute the conversion
    pub fn execute(&self) -> anyhow::Result<()> {
        init_logging(&self.log)?;
        commands::run_convert(&self.convert)?;
        Ok(())
    }
}

/// Fact database tool
#[derive(Parser, Debug)]
#[command(name = "factdb")]
#[command(about = "Convert, check and inspect fact-to-database table conversions")]
#[command(version)]
pub struct FactdbCli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub log: LogArgs,
}

/// factdb commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a fact file into an s-expression database
    Convert(ConvertArgs),
    /// Parse and classify a fact file without writing anything
    Check(CheckArgs),
    /// Print the active category and relation tables
    Tables(TablesArgs),
}

impl FactdbCli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        init_logging(&self.log)?;
        debug!(command = ?self.command, "Running factdb command");

        match &self.command {
            Command::Convert(args) => commands::run_convert(args).map(|_| ()),
            Command::Check(args) => commands::run_check(args).map(|_| ()),
            Command::Tables(args) => commands::run_tables(args),
        }
    }
}

/// Arguments for a conversion run
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Fact file to read (`-` for stdin)
    pub input: PathBuf,

    /// Database file to write (`-` for stdout)
    pub output: PathBuf,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Print a run report to stderr
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,
}

/// Arguments for check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Fact file to read (`-` for stdin)
    pub input: PathBuf,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,
}

/// Arguments for tables command
#[derive(Args, Debug, Clone)]
pub struct TablesArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = TablesFormat::Yaml)]
    pub format: TablesFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Table selection shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Table file (YAML, or JSON with a `.json` extension). Falls back to
    /// `FACTDB_TABLES`, then to the built-in geobase tables
    #[arg(long, value_name = "FILE")]
    pub tables: Option<PathBuf>,
}

/// Logging flags
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablesFormat {
    Yaml,
    Json,
}
