// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for keyword search.
//!
//! Only query-level problems reach the caller. A document that can't be
//! scored is reported as [`Error::DocumentProcessing`] inside the engine,
//! logged, and dropped from the results; it never fails the whole query.

use crate::config::ConfigError;
use crate::types::DocId;
use thiserror::Error;

/// Result type alias for cvmatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while searching.
#[derive(Error, Debug)]
pub enum Error {
    /// The keyword string parsed to an empty list.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A single document could not be scored.
    #[error("failed to process document {id}: {reason}")]
    DocumentProcessing {
        /// Document that was skipped.
        id: DocId,
        /// What went wrong.
        reason: String,
    },

    /// Algorithm selector outside the accepted spellings.
    #[error("unknown algorithm '{0}' (expected kmp, bm, or aho)")]
    UnknownAlgorithm(String),

    /// A result limit of zero.
    #[error("result limit must be at least 1")]
    InvalidTopN,

    /// Configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error while reading a corpus.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus file is not valid JSON.
    #[error("corpus parse error: {0}")]
    Json(#[from] serde_json::Error),
}
