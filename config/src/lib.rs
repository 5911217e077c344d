//! Configuration for nthprime.
//!
//! Settings live in `~/.nthprime/config.toml`:
//!
//! ```toml
//! [search]
//! witnesses = "auto"          # standard | extended | auto
//! progress_interval = 1000000 # debug progress every N primality tests
//!
//! [log]
//! level = "info"              # tracing EnvFilter directive
//! ```
//!
//! A missing file is not an error. `NTHPRIME_WITNESSES` overrides
//! `search.witnesses`; command-line flags override both.

use std::env;
use std::fs;
use std::io;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use nthprime_core::SearchOptions;
use nthprime_types::{UnknownPolicyError, WitnessPolicy};

/// Environment variable overriding `search.witnesses`.
pub const WITNESSES_ENV: &str = "NTHPRIME_WITNESSES";

#[derive(Debug, Default, Deserialize)]
pub struct NthPrimeConfig {
    pub search: Option<SearchConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchConfig {
    /// Witness policy for the primality oracle. Default: auto.
    pub witnesses: Option<WitnessPolicy>,
    /// Emit a progress event every this many primality tests.
    pub progress_interval: Option<NonZeroU64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid {name}: {source}")]
    InvalidValue {
        name: &'static str,
        source: UnknownPolicyError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl NthPrimeConfig {
    /// Load from the default location. `Ok(None)` if there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. `Ok(None)` if the file does not exist.
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

    /// Search options from the `[search]` table, defaults for anything unset.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        let search = self.search.as_ref();
        SearchOptions {
            witnesses: search
                .and_then(|search| search.witnesses)
                .unwrap_or_default(),
            progress_interval: search.and_then(|search| search.progress_interval),
        }
    }

    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .map(str::trim)
            .filter(|level| !level.is_empty())
    }
}

/// Witness policy from [`WITNESSES_ENV`], if set.
pub fn witnesses_from_env() -> Result<Option<WitnessPolicy>, ConfigError> {
    parse_witnesses_override(env::var(WITNESSES_ENV).ok().as_deref())
}

/// Parse a raw override value. Blank values count as unset.
pub fn parse_witnesses_override(raw: Option<&str>) -> Result<Option<WitnessPolicy>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|source| ConfigError::InvalidValue {
                name: WITNESSES_ENV,
                source,
            }),
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".nthprime").join("config.toml"))
}
