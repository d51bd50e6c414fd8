//! Configuration management for tasklist.
//!
//! This module handles the optional `.tasklist.yaml` file, which can point the
//! tool at a different backing file and set the default log level.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file path relative to the working directory.
pub const CONFIG_FILE_PATH: &str = ".tasklist.yaml";

/// Backing file used when neither the command line nor the config names one.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings read from `.tasklist.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Backing JSON file. Relative paths resolve against the config's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Default `tracing` filter directive (e.g. `info`, `tasklist=debug`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from the working directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(Path::new("."))
    }

    /// Load config from a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(base_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Get the config file path for a base directory.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_PATH)
    }

    /// Resolve the backing file: `explicit` wins, then `tasks_file`, then
    /// [`DEFAULT_TASKS_FILE`] in `base_dir`.
    #[must_use]
    pub fn tasks_path(&self, base_dir: &Path, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        self.tasks_file
            .as_deref()
            .map_or_else(|| base_dir.join(DEFAULT_TASKS_FILE), |file| base_dir.join(file))
    }

    /// The default log filter.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
