//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The configuration only chooses policies: how the registry reacts to
//! version skew, missing symbols and unrecognized bits. It never changes a
//! flag value.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITFLAGS_CONFIG` if set
//! 2. `<config dir>/gitflags/config.toml`, where the config dir is the
//!    platform one (`$XDG_CONFIG_HOME` or `~/.config` on Linux)
//!
//! A missing file is not an error; the defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use gitflags::core::config::{Config, SkewPolicy};
//!
//! let config = Config::load().unwrap();
//! if config.registry.skew == SkewPolicy::Error {
//!     println!("strict mode, from {:?}", config.loaded_from());
//! }
//! ```

pub mod schema;

pub use schema::{BitsPolicy, MissingPolicy, RegistryConfig, SkewPolicy};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITFLAGS_CONFIG";

/// Errors from configuration loading.
///
/// Messages are stored as strings so the error can be cloned into every
/// caller of the cached global registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Registry policies
    pub registry: RegistryConfig,
    /// Path to the file the policies came from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed. Missing config files are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match Self::locate(env, dirs::config_dir()) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from one file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid config.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let registry = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        log::debug!("loaded config from {}", path.display());

        Ok(Self {
            registry,
            path: Some(path.to_path_buf()),
        })
    }

    /// The default config file path, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gitflags/config.toml"))
    }

    /// Pick the first existing candidate.
    fn locate(env: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
        // 1. Check $GITFLAGS_CONFIG
        if let Some(path) = env {
            if path.exists() {
                return Some(path);
            }
            log::debug!("{CONFIG_ENV} points at missing file {}", path.display());
        }

        // 2. Check <config dir>/gitflags/config.toml
        config_dir
            .map(|dir| dir.join("gitflags/config.toml"))
            .filter(|path| path.exists())
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl From<RegistryConfig> for Config {
    fn from(registry: RegistryConfig) -> Self {
        Self {
            registry,
            path: None,
        }
    }
}
