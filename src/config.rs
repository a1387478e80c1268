use crate::catalog::DEFAULT_PLACEHOLDER_POSTER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LOG_FILTER_ENV: &str = "FLIX_LOG";
const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration, read from `config.json` in the platform config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON seed catalog to use instead of the built-in movies.
    pub catalog: Option<PathBuf>,
    pub placeholder_poster: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            placeholder_poster: DEFAULT_PLACEHOLDER_POSTER.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the default location.
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = project_dirs()?.config_dir().join(CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Log filter directive: `FLIX_LOG` wins over the config file.
    pub fn log_filter(&self) -> String {
        std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| self.log_filter.clone())
    }
}

pub fn project_dirs() -> Result<directories::ProjectDirs, ConfigError> {
    directories::ProjectDirs::from("com", "flix", "flix-collection").ok_or(ConfigError::NoHomeDirectory)
}
