use anyhow::{anyhow, Result};
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Database file inspected when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "./letters.db";

/// Table described by `columns` when no table is named
pub const DEFAULT_TABLE: &str = "letters";

/// Prefix for environment overrides, e.g. `VIEWDB_DATABASE_PATH`
pub const ENV_PREFIX: &str = "VIEWDB";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewdbConfig {
    /// Path to the SQLite file to inspect
    pub database_path: String,

    /// Table described when none is given on the command line
    pub default_table: String,
}

impl Default for ViewdbConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            default_table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl ViewdbConfig {
    /// Load configuration from defaults, a TOML file and `VIEWDB_*` variables
    ///
    /// An explicit `path` must exist. Without one, `$HOME/.viewdb/viewdb.toml`
    /// is read if present. No file is ever created.
    pub fn new(path: &Option<String>) -> Result<ViewdbConfig> {
        let file = match path {
            Some(p) => {
                if !Path::new(p.as_str()).is_file() {
                    return Err(anyhow!("Config file '{}' does not exist", p));
                }
                Some(p.clone())
            }
            None => {
                let default_path = Self::config_file_path();
                Path::new(default_path.as_str())
                    .is_file()
                    .then_some(default_path)
            }
        };

        Self::build(file.as_deref(), Environment::with_prefix(ENV_PREFIX))
    }

    fn build(file: Option<&str>, env: Environment) -> Result<ViewdbConfig> {
        let mut builder = Config::builder()
            .set_default("database_path", DEFAULT_DATABASE_PATH)
            .map_err(|e| anyhow!("Failed to set default database path: {}", e))?
            .set_default("default_table", DEFAULT_TABLE)
            .map_err(|e| anyhow!("Failed to set default table: {}", e))?;

        if let Some(p) = file {
            tracing::debug!("loading configuration from {}", p);
            builder = builder.add_source(config::File::with_name(p));
        }

        builder = builder.add_source(env);

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        settings
            .try_deserialize::<ViewdbConfig>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))
    }

    /// Replace the database path, e.g. from a command-line flag
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(p) = path {
            self.database_path = p;
        }
        self
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        [
            format!("Config File:        {}", Self::config_file_path()),
            format!("Database Path:      {}", self.database_path),
            format!("Default Table:      {}", self.default_table),
        ]
        .join("\n")
    }

    /// Get the config file path
    pub fn config_file_path() -> String {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| "~".to_string());
        format!("{}/.viewdb/viewdb.toml", home_dir)
    }
}

/// Human-readable byte size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
