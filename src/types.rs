// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a keyword search.
//!
//! Documents come in borrowed from whatever store holds them, tallies get
//! built per document, and ranked results come out. Nothing here outlives a
//! single query.
//!
//! # Invariants
//!
//! - **MatchTally**: every entry has `count >= 1`. Empty tallies mean "no match"
//!   and the document never becomes a result.
//!
//! - **RankedResult**: `total == tally.values().sum()`. The only way to build
//!   one is [`RankedResult::from_tally`], which computes the sum.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Document identifier assigned by the document store.
///
/// Opaque to the engine. It is carried from input to output untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DocId(pub u64);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A plaintext document as supplied by the store.
///
/// Decryption and PDF extraction have already happened by the time one of
/// these reaches the engine. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

// =============================================================================
// TALLIES
// =============================================================================

/// Which phase produced a tally entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Literal occurrence found by KMP, Boyer-Moore, or Aho-Corasick.
    Exact,
    /// Word or word window accepted by the Levenshtein fallback.
    Fuzzy,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => f.write_str("exact"),
            MatchKind::Fuzzy => f.write_str("fuzzy"),
        }
    }
}

/// Occurrence count for one matched key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub count: usize,
    pub kind: MatchKind,
}

/// Per-document map from matched text to occurrence count.
///
/// Keys are the query term for exact hits, or the literal word/window text for
/// fuzzy hits. Insertion order is kept so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchTally {
    entries: IndexMap<String, TallyEntry>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences under `key`. A zero count is ignored.
    ///
    /// An entry that already exists keeps its position. An `Exact` entry stays
    /// `Exact` even if fuzzy hits are merged into it.
    pub fn add(&mut self, key: &str, count: usize, kind: MatchKind) {
        if count == 0 {
            return;
        }
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.count += count;
                if kind == MatchKind::Exact {
                    entry.kind = MatchKind::Exact;
                }
            }
            None => {
                self.entries
                    .insert(key.to_string(), TallyEntry { count, kind });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.get(key).map(|entry| entry.count)
    }

    pub fn entry(&self, key: &str) -> Option<&TallyEntry> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.values().map(|entry| entry.count).sum()
    }

    /// Sum of counts produced by one phase.
    pub fn total_of(&self, kind: MatchKind) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.count)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TallyEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One document in the ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub document_id: DocId,
    pub tally: MatchTally,
    pub total: usize,
}

impl RankedResult {
    pub fn from_tally(document_id: DocId, tally: MatchTally) -> Self {
        let total = tally.total();
        Self {
            document_id,
            tally,
            total,
        }
    }
}
