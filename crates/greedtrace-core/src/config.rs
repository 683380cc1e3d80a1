//! Run configuration for greedtrace
//!
//! Configuration is read from `<config dir>/greedtrace/config.toml`, from
//! the directory named by `GREEDTRACE_CONFIG_DIR`, or from an explicit
//! `--config` path. A missing default file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_usage;
use crate::error::{GreedError, Result};

pub use types::{DijkstraConfig, PrimConfig, TraceConfig};

const CONFIG_DIR: &str = "greedtrace";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GREEDTRACE_CONFIG_DIR";

impl TraceConfig {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail_usage!(format!("config file not found: {}", path.display()));
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GreedError::invalid_config(path.display(), e))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| GreedError::invalid_config(path.display(), e))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
