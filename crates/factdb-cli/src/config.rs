//! Run configuration
//!
//! Settings come from command-line flags first, then from the environment:
//!
//! - `FACTDB_TABLES`: table file used when `--tables` is absent
//! - `FACTDB_LOG`: tracing filter directive, overrides `--verbose`

use anyhow::Context;
use factdb_core::SchemaConfig;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming a table file
pub const TABLES_ENV: &str = "FACTDB_TABLES";

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "FACTDB_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Table file; `None` selects the built-in geobase tables
    pub tables: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl RunConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(tables) = std::env::var(TABLES_ENV) {
            if !tables.is_empty() {
                config.tables = Some(PathBuf::from(tables));
            }
        }
        if let Ok(filter) = std::env::var(LOG_ENV) {
            config.log_filter = Some(filter);
        }

        config
    }

    /// Apply a `--tables` flag on top of the environment
    pub fn with_tables(mut self, tables: Option<&Path>) -> Self {
        if let Some(path) = tables {
            self.tables = Some(path.to_path_buf());
        }
        self
    }

    /// Load the tables this run should use
    pub fn load_schema(&self) -> anyhow::Result<SchemaConfig> {
        match &self.tables {
            Some(path) => SchemaConfig::from_file(path)
                .with_context(|| format!("failed to load tables from {}", path.display())),
            None => {
                info!("Using built-in geobase tables");
                Ok(SchemaConfig::geobase())
            }
        }
    }
}

/// Resolve the tables for a command's `--tables` flag
pub fn load_schema(tables: Option<&Path>) -> anyhow::Result<SchemaConfig> {
    RunConfig::from_env().with_tables(tables).load_schema()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_environment_value() {
        let config = RunConfig { tables: Some(PathBuf::from("env.yaml")), log_filter: None }
            .with_tables(Some(Path::new("flag.yaml")));
        assert_eq!(config.tables, Some(PathBuf::from("flag.yaml")));
    }

    #[test]
    fn test_absent_flag_keeps_environment_value() {
        let config = RunConfig { tables: Some(PathBuf::from("env.yaml")), log_filter: None }
            .with_tables(None);
        assert_eq!(config.tables, Some(PathBuf::from("env.yaml")));
    }

    #[test]
    fn test_default_is_geobase() {
        let schema = RunConfig::default().load_schema().unwrap();
        assert_eq!(schema, SchemaConfig::geobase());
    }

    #[test]
    fn test_missing_table_file_mentions_path() {
        let err = RunConfig::default()
            .with_tables(Some(Path::new("/nonexistent/tables.yaml")))
            .load_schema()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tables.yaml"));
    }
}
