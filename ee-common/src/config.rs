//! Configuration loading and path resolution
//!
//! Every setting follows the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the SQLite database path
pub const ENV_DATABASE: &str = "EE_DATABASE";
/// Environment variable overriding the classifier file path
pub const ENV_MODEL: &str = "EE_MODEL";
/// Environment variable overriding the listen address
pub const ENV_BIND: &str = "EE_BIND";

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5001";

const DATABASE_FILE: &str = "employee_events.db";
const MODEL_FILE: &str = "model.json";

/// Contents of the optional TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub database: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub bind: Option<String>,
}

impl TomlConfig {
    /// Parse a config file, failing if it is missing or malformed
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the config file if one exists.
    ///
    /// A missing file yields the empty config; a malformed one is logged and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }
}

/// Overrides given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub bind: Option<String>,
}

/// Fully resolved dashboard settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub database_path: PathBuf,
    pub model_path: PathBuf,
    pub bind_addr: String,
}

impl DashboardConfig {
    /// Resolve each setting through CLI → ENV → TOML → default
    pub fn resolve(cli: CliOverrides, toml: TomlConfig) -> Self {
        let data_dir = default_data_dir();

        let database_path = cli
            .database
            .or_else(|| env_path(ENV_DATABASE))
            .or(toml.database)
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE));

        let model_path = cli
            .model
            .or_else(|| env_path(ENV_MODEL))
            .or(toml.model)
            .unwrap_or_else(|| data_dir.join(MODEL_FILE));

        let bind_addr = cli
            .bind
            .or_else(|| std::env::var(ENV_BIND).ok().filter(|v| !v.trim().is_empty()))
            .or(toml.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        Self {
            database_path,
            model_path,
            bind_addr,
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Default config file location: `<config_dir>/ee-dashboard/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ee-dashboard").join("config.toml"))
}

/// OS-dependent default data directory holding the database and model
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("employee-events"))
        .unwrap_or_else(|| PathBuf::from("./employee_events_data"))
}
