//! JSON configuration file.
//!
//! Stores `Config` in `<data dir>/config.json`:
//!
//! ```json
//! {
//!     "enable_floating": true,
//!     "hotkey_mode": 0
//! }
//! ```
//!
//! Loading never fails: a missing file is created with defaults, a corrupt
//! one is overwritten with defaults and reported back to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use super::repository::to_json_pretty;
use crate::model::Config;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be parsed.
    #[error("config file {path} is corrupt, defaults restored: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file could not be read.
    #[error("config file {path} is unreadable, defaults used: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file could not be written.
    #[error("failed to save config to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of `ConfigStore::load`.
#[derive(Debug)]
pub struct ConfigLoad {
    /// The config to use for this session.
    pub config: Config,
    /// Set when the file was corrupt or could not be rewritten; shown to the user.
    pub warning: Option<ConfigError>,
}

/// Loads and saves the config file at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load config, falling back to (and persisting) defaults.
    pub fn load(&self) -> ConfigLoad {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no config file, writing defaults");
                return self.restore_defaults(None);
            }
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "config unreadable");
                // Leave an unreadable file alone; overwriting it would likely fail too.
                return ConfigLoad {
                    config: Config::default(),
                    warning: Some(ConfigError::Unreadable {
                        path: self.path.clone(),
                        source,
                    }),
                };
            }
        };

        match serde_json::from_str::<Config>(&contents) {
            Ok(config) => ConfigLoad {
                config,
                warning: None,
            },
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "config corrupt, restoring defaults");
                self.restore_defaults(Some(ConfigError::Corrupt {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }

    fn restore_defaults(&self, warning: Option<ConfigError>) -> ConfigLoad {
        let config = Config::default();
        let write_error = self.save(&config).err();
        ConfigLoad {
            config,
            // The corruption notice is the more useful one to show.
            warning: warning.or(write_error),
        }
    }

    /// Serialize and overwrite the config file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = to_json_pretty(config)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.write_failed(source))?;
        }
        fs::write(&self.path, json).map_err(|source| self.write_failed(source))?;

        info!(path = %self.path.display(), ?config, "config saved");
        Ok(())
    }

    fn write_failed(&self, source: io::Error) -> ConfigError {
        error!(path = %self.path.display(), error = %source, "failed to write config");
        ConfigError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}
