// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matched documents get sorted.
//!
//! Sort order:
//! 1. **Total** - sum of the tally, descending
//! 2. **Scan order** - position in the input corpus, ascending
//!
//! The second key makes ties come out in corpus order no matter which worker
//! finished first, so the same input always ranks the same way.

use crate::types::RankedResult;
use std::cmp::Ordering;

/// A result tagged with where its document sat in the corpus.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub scan_index: usize,
    pub result: RankedResult,
}

/// Compare two scored documents for ranking.
pub fn compare_results(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    match b.result.total.cmp(&a.result.total) {
        Ordering::Equal => a.scan_index.cmp(&b.scan_index),
        ord => ord,
    }
}

/// Sort by [`compare_results`] and keep the first `top_n`.
pub fn rank(mut scored: Vec<ScoredDocument>, top_n: usize) -> Vec<RankedResult> {
    scored.sort_by(compare_results);
    scored.truncate(top_n);
    scored.into_iter().map(|scored| scored.result).collect()
}
