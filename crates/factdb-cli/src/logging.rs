//! Logging setup for the factdb binaries
//!
//! Logs go to stderr so that `-` can stream the database to stdout.

use crate::cli::{LogArgs, LogFormat};
use crate::config::RunConfig;
use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `FACTDB_LOG` nor `--verbose` is given
pub const DEFAULT_FILTER: &str = "warn,factdb_core=info,factdb_cli=info";

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "info,factdb_core=debug,factdb_cli=debug";

/// Pick the log filter: `FACTDB_LOG` wins over `--verbose`
pub fn filter_directive(env_filter: Option<String>, verbose: bool) -> String {
    match env_filter {
        Some(directive) => directive,
        None if verbose => VERBOSE_FILTER.to_string(),
        None => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global tracing subscriber
pub fn init_logging(args: &LogArgs) -> anyhow::Result<()> {
    let directive = filter_directive(RunConfig::from_env().log_filter, args.verbose);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter `{directive}`"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = match args.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
