// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Layered with figment, highest priority last:
//!
//! 1. Built-in defaults
//! 2. `cvmatch.toml` (or an explicit path)
//! 3. Environment variables (`CVMATCH_TOP_N=5`, `CVMATCH_ALGORITHM=aho`, ...)
//!
//! Command-line flags are applied on top by the binary.

use crate::matching::Algorithm;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "cvmatch.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CVMATCH_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Knobs for a [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Exact matcher used when the caller doesn't pick one.
    pub algorithm: Algorithm,
    /// Result limit used when the caller doesn't pick one.
    pub top_n: usize,
    /// Documents shorter than this after trimming are skipped.
    pub min_document_chars: usize,
    /// Documents with more characters are reported as unprocessable.
    pub max_document_chars: usize,
    /// Worker threads for per-document scoring. 0 = one per core, 1 = sequential.
    pub workers: usize,
    /// Run the Levenshtein fallback for keywords with no exact hit.
    pub fuzzy: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Kmp,
            top_n: 10,
            min_document_chars: 10,
            max_document_chars: 2_000_000,
            workers: 0,
            fuzzy: true,
        }
    }
}

impl SearchConfig {
    /// Load from `cvmatch.toml` in the working directory plus environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load from a specific file plus environment. A missing file is fine;
    /// defaults and environment still apply.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string over the defaults. Environment is not consulted.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                key: "top_n".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.min_document_chars > self.max_document_chars {
            return Err(ConfigError::InvalidValue {
                key: "min_document_chars".to_string(),
                message: format!(
                    "{} exceeds max_document_chars ({})",
                    self.min_document_chars, self.max_document_chars
                ),
            });
        }
        Ok(())
    }

    /// Worker count with `0` resolved to the available parallelism.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            0 => std::thread::available_parallelism().map_or(1, usize::from),
            n => n,
        }
    }
}
