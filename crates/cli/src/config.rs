//! Environment-driven configuration.

use std::path::PathBuf;

use gildedrose_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const OUTPUT_DIR_VAR: &str = "GILDED_ROSE_OUTPUT_DIR";
pub const INVENTORY_VAR: &str = "GILDED_ROSE_INVENTORY";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got `{value}`")]
    InvalidDays { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: ParseLogFormatError,
    },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of days to advance the inventory.
    pub days: u32,
    /// Directory receiving the export file.
    pub output_dir: PathBuf,
    /// JSON inventory to load instead of the seed inventory.
    pub inventory_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: 1,
            output_dir: PathBuf::from("."),
            inventory_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables fall
    /// back to defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(DAYS_VAR) {
            config.days = value.trim().parse().map_err(|_| ConfigError::InvalidDays {
                var: DAYS_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(OUTPUT_DIR_VAR) {
            config.output_dir = non_empty_path(OUTPUT_DIR_VAR, value)?;
        }

        if let Some(value) = lookup(INVENTORY_VAR) {
            config.inventory_path = Some(non_empty_path(INVENTORY_VAR, value)?);
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = value
                .parse()
                .map_err(|source| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    source,
                })?;
        }

        Ok(config)
    }
}

fn non_empty_path(var: &'static str, value: String) -> Result<PathBuf, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(PathBuf::from(value))
}
