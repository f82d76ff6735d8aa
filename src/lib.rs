// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword search and fuzzy ranking over plain-text CVs.
//!
//! Given a corpus of documents and a comma-separated keyword query, find
//! every literal occurrence of each keyword with one of three exact matchers,
//! fall back to Levenshtein similarity for keywords that never occur, and
//! rank documents by how many hits they collected.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │  matching/   │   │     fuzzy/       │   │   types.rs    │
//! │ kmp, bm, aho │   │ distance, tokens │   │ Document,     │
//! └──────┬───────┘   └────────┬─────────┘   │ MatchTally    │
//!        │                    │             └───────┬───────┘
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        search/                          │
//! │  query → per-document exact + fuzzy → pool → ranking    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The matchers and similarity functions are pure. The orchestrator keeps no
//! state between calls; each query rescans the corpus it's given.
//!
//! # Usage
//!
//! ```
//! use cvmatch::{search, Algorithm, Document};
//!
//! let corpus = vec![
//!     Document::new(1, "Senior Rust engineer, some Python"),
//!     Document::new(2, "Python and more python, data pipelines"),
//! ];
//! let results = search(&corpus, "python, rust", Algorithm::AhoCorasick, 10).unwrap();
//! assert_eq!(results[0].document_id.get(), 1);
//! assert_eq!(results[0].total, 2);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod matching;
pub mod search;
mod types;

pub use config::{ConfigError, SearchConfig};
pub use error::{Error, Result};
pub use fuzzy::{distance, find_similar_words, is_similar, similarity, FuzzyWord};
pub use matching::{AhoCorasick, Algorithm, BoyerMoore, ExactPhase, MatchStats, SingleMatcher};
pub use search::{search, KeywordQuery, SearchReport, SearchStats, Searcher, Threshold};
pub use types::{DocId, Document, MatchKind, MatchTally, RankedResult, TallyEntry};
