// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword parsing and per-keyword fuzzy thresholds.
//!
//! A raw query is a comma-separated list typed by a recruiter. Each piece is
//! trimmed, lowercased, and has inner whitespace collapsed to single spaces.
//! Empty pieces and repeats are dropped; first occurrence wins, so order is
//! stable from call to call.

use crate::error::{Error, Result};
use crate::matching::{Algorithm, ExactPhase};

/// Added to similarity before comparing so that values sitting exactly on a
/// band edge (80.0 vs 0.8 * 100) aren't lost to float rounding.
const SIMILARITY_EPSILON: f64 = 1e-9;

/// Minimum similarity a fuzzy hit needs, as a fraction in `[0, 1]`.
///
/// Short terms demand near-identical matches: one edit in a three-letter
/// word is already a third of it.
///
/// | term length (chars) | threshold |
/// |---------------------|-----------|
/// | ≤ 3                 | 1.00      |
/// | ≤ 5                 | 0.95      |
/// | ≤ 8                 | 0.85      |
/// | ≤ 12                | 0.80      |
/// | > 12                | 0.70      |
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn for_term(term: &str) -> Self {
        let fraction = match term.chars().count() {
            0..=3 => 1.0,
            4..=5 => 0.95,
            6..=8 => 0.85,
            9..=12 => 0.8,
            _ => 0.7,
        };
        Threshold(fraction)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Does a similarity percentage (`0..=100`) meet this threshold?
    #[inline]
    pub fn accepts(self, similarity_percent: f64) -> bool {
        similarity_percent + SIMILARITY_EPSILON >= self.percent()
    }
}

/// One parsed keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub term: String,
    pub threshold: Threshold,
    chars: Vec<char>,
}

impl Keyword {
    fn new(term: String) -> Self {
        Self {
            threshold: Threshold::for_term(&term),
            chars: term.chars().collect(),
            term,
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Terms with a space are matched against word windows, not single words.
    pub fn is_multi_word(&self) -> bool {
        self.term.contains(' ')
    }
}

/// Ordered, de-duplicated keyword list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordQuery {
    keywords: Vec<Keyword>,
}

impl KeywordQuery {
    /// Parse a comma-separated keyword string.
    ///
    /// Fails with [`Error::InvalidQuery`] if nothing survives parsing.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut keywords: Vec<Keyword> = Vec::new();

        for piece in raw.split(',') {
            let term = piece
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            if term.is_empty() || keywords.iter().any(|k| k.term == term) {
                continue;
            }
            keywords.push(Keyword::new(term));
        }

        if keywords.is_empty() {
            return Err(Error::InvalidQuery(format!(
                "no keywords in {:?}; separate terms with commas",
                raw
            )));
        }

        Ok(Self { keywords })
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn terms(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.term.as_str()).collect()
    }

    /// Exact phase for this query. Aho-Corasick pattern ids line up with
    /// keyword indices.
    pub fn exact_phase(&self, algorithm: Algorithm) -> ExactPhase {
        algorithm.exact_phase(&self.terms())
    }
}
