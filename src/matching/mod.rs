// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact matching: three interchangeable ways to find literal keywords.
//!
//! KMP and Boyer-Moore answer "where does this one pattern occur?".
//! Aho-Corasick answers the same question for every pattern at once. All
//! three return identical positions for the same pattern and text, overlaps
//! included; the differential tests hold them to that.
//!
//! The algorithm is picked once per query as an [`Algorithm`], then turned
//! into an [`ExactPhase`]: either a [`SingleMatcher`] run per keyword, or a
//! prebuilt [`AhoCorasick`] automaton run once per document.

pub mod aho_corasick;
pub mod boyer_moore;
pub mod kmp;

pub use aho_corasick::AhoCorasick;
pub use boyer_moore::BoyerMoore;

use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Which exact matcher a query uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "kmp", alias = "knuth_morris_pratt")]
    Kmp,
    #[serde(rename = "bm", alias = "boyer_moore", alias = "boyermoore")]
    BoyerMoore,
    #[serde(rename = "aho", alias = "aho_corasick", alias = "ahocorasick")]
    AhoCorasick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::AhoCorasick];

    /// Short selector name (`kmp`, `bm`, `aho`).
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "bm",
            Algorithm::AhoCorasick => "aho",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::AhoCorasick => "Aho-Corasick",
        }
    }

    pub fn is_multi_pattern(self) -> bool {
        matches!(self, Algorithm::AhoCorasick)
    }

    /// Single-pattern capability, if this algorithm has one.
    pub fn single_matcher(self) -> Option<SingleMatcher> {
        match self {
            Algorithm::Kmp => Some(SingleMatcher::Kmp),
            Algorithm::BoyerMoore => Some(SingleMatcher::BoyerMoore),
            Algorithm::AhoCorasick => None,
        }
    }

    /// Prepare the exact phase for a query's keyword list.
    ///
    /// For Aho-Corasick this compiles the automaton; for the others it's free.
    pub fn exact_phase<S: AsRef<str>>(self, terms: &[S]) -> ExactPhase {
        match self.single_matcher() {
            Some(matcher) => ExactPhase::Single(matcher),
            None => ExactPhase::Multi(AhoCorasick::new(terms)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kmp" | "knuth_morris_pratt" => Ok(Algorithm::Kmp),
            "bm" | "boyer_moore" | "boyermoore" => Ok(Algorithm::BoyerMoore),
            "aho" | "aho_corasick" | "ahocorasick" => Ok(Algorithm::AhoCorasick),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Uniform single-pattern search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleMatcher {
    Kmp,
    BoyerMoore,
}

impl SingleMatcher {
    pub fn find_all(self, text: &[char], pattern: &[char]) -> Vec<usize> {
        match self {
            SingleMatcher::Kmp => kmp::find_all(text, pattern),
            SingleMatcher::BoyerMoore => boyer_moore::find_all(text, pattern),
        }
    }

    pub fn count(self, text: &[char], pattern: &[char]) -> usize {
        self.find_all(text, pattern).len()
    }
}

/// The exact-match step of a query, chosen once and reused per document.
#[derive(Debug, Clone)]
pub enum ExactPhase {
    /// Run one matcher per keyword.
    Single(SingleMatcher),
    /// Run a compiled automaton once per document. Pattern ids line up with
    /// the keyword order the phase was built from.
    Multi(AhoCorasick),
}

/// Positions plus timing for one single-pattern search.
#[derive(Debug, Clone, Serialize)]
pub struct MatchStats {
    pub algorithm: Algorithm,
    pub positions: Vec<usize>,
    pub pattern_len: usize,
    pub text_len: usize,
    pub elapsed: Duration,
}

impl MatchStats {
    pub fn total_matches(&self) -> usize {
        self.positions.len()
    }
}

/// Run one pattern through `algorithm` and time it.
///
/// Aho-Corasick builds a one-pattern automaton, so its time includes
/// construction.
pub fn timed(algorithm: Algorithm, text: &str, pattern: &str) -> MatchStats {
    let text: Vec<char> = text.chars().collect();
    let pattern_chars: Vec<char> = pattern.chars().collect();

    let start = Instant::now();
    let positions = match algorithm.single_matcher() {
        Some(matcher) => matcher.find_all(&text, &pattern_chars),
        None => AhoCorasick::new([pattern])
            .find_all(&text)
            .into_iter()
            .next()
            .unwrap_or_default(),
    };
    let elapsed = start.elapsed();

    MatchStats {
        algorithm,
        positions,
        pattern_len: pattern_chars.len(),
        text_len: text.len(),
        elapsed,
    }
}

/// Run every pattern through one Aho-Corasick pass.
///
/// Each entry's `elapsed` is the whole pass, build included, since the
/// patterns are found together.
pub fn timed_each<S: AsRef<str>>(text: &str, patterns: &[S]) -> IndexMap<String, MatchStats> {
    let text: Vec<char> = text.chars().collect();

    let start = Instant::now();
    let automaton = AhoCorasick::new(patterns);
    let hits = automaton.find_all(&text);
    let elapsed = start.elapsed();

    automaton
        .patterns()
        .iter()
        .zip(hits)
        .map(|(pattern, positions)| {
            let stats = MatchStats {
                algorithm: Algorithm::AhoCorasick,
                positions,
                pattern_len: pattern.chars().count(),
                text_len: text.len(),
                elapsed,
            };
            (pattern.clone(), stats)
        })
        .collect()
}
