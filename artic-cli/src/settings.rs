//! User settings loaded from a JSON file and overridden by flags.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use artic_lib::DEFAULT_BASE_URL;
use artic_lib::error::ValidationError;
use artic_lib::session::DEFAULT_ROWS_PER_PAGE;
use artic_lib::session::validate_rows_per_page;
use serde::Deserialize;
use serde::Serialize;
use simplelog::LevelFilter;
use thiserror::Error;

use crate::Args;
use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid rows per page: {0}")]
    InvalidRows(#[from] ValidationError),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

/// Settings for one run of the table browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API root of the artworks endpoint.
    pub base_url: String,
    /// Initial page size.
    pub rows_per_page: u32,
    /// Per-request timeout in seconds; no timeout when unset.
    pub timeout_secs: Option<u64>,
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            timeout_secs: Some(30),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the settings for this run: file first, then flags on top.
    ///
    /// The file is `--config` if given, else `config.json` in the platform
    /// config directory.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let path = args.config.clone().or_else(paths::config_file);
        let settings = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        let settings = settings.with_overrides(args);
        settings.validate()?;
        Ok(settings)
    }

    /// Applies command-line flags over these settings.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(url) = &args.base_url {
            self.base_url = url.clone();
        }
        if let Some(rows) = args.rows {
            self.rows_per_page = rows;
        }
        if let Some(secs) = args.timeout_secs {
            self.timeout_secs = Some(secs);
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        self
    }

    /// Checks the values that cannot be checked by deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_rows_per_page(self.rows_per_page)?;
        self.level_filter()?;
        Ok(())
    }

    /// Returns the configured log level.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns the request timeout, treating zero as no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}
