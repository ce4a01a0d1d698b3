//! Configuration for Newsfeed.
//!
//! Read from `~/.newsfeed/config.toml`. Every section is optional and a
//! missing file means defaults:
//!
//! ```toml
//! [news]
//! base_url = "http://localhost:8080"   # GET <base_url>/news
//!
//! [app]
//! output = "text"                      # or "json"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Debug, Default, Deserialize)]
pub struct NewsfeedConfig {
    pub news: Option<NewsConfig>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsConfig {
    /// Base URL of the news server; `/news` is appended.
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputFormat,
}

/// How the binary renders the final state.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: TomlError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl NewsfeedConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Configured base URL, ignoring blank values.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.news
            .as_ref()
            .and_then(|news| news.base_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn output(&self) -> OutputFormat {
        self.app
            .as_ref()
            .map_or(OutputFormat::default(), |app| app.output)
    }
}

/// `~/.newsfeed/config.toml`, if a home directory is known.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.newsfeed`, home of the config file and logs.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".newsfeed"))
}
