// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring a single document: exact phase, then fuzzy fallback.
//!
//! Everything here is a pure function of the document, the parsed query, and
//! the prepared exact phase. No state is shared between documents, which is
//! what lets the pool score them on any thread in any order.

use super::query::{Keyword, KeywordQuery};
use crate::error::{Error, Result};
use crate::fuzzy::Tokens;
use crate::matching::ExactPhase;
use crate::types::{Document, MatchKind, MatchTally};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Size limits and switches applied per document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanLimits {
    pub min_chars: usize,
    pub max_chars: usize,
    pub fuzzy: bool,
}

/// Tally and phase timings for one scored document.
#[derive(Debug, Clone, Default)]
pub(crate) struct DocumentScore {
    pub tally: MatchTally,
    pub exact_time: Duration,
    pub fuzzy_time: Duration,
}

/// What happened to one document.
#[derive(Debug)]
pub(crate) enum DocumentOutcome {
    /// Empty or below the minimum length.
    Skipped,
    /// Could not be scored; excluded from results.
    Failed(Error),
    /// Scored. The tally may be empty.
    Scored(DocumentScore),
}

/// Score `document`, turning a panic into [`DocumentOutcome::Failed`].
pub(crate) fn score_isolated(
    document: &Document,
    query: &KeywordQuery,
    phase: &ExactPhase,
    limits: ScanLimits,
) -> DocumentOutcome {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        score_document(document, query, phase, limits)
    }));

    match attempt {
        Ok(Ok(Some(score))) => DocumentOutcome::Scored(score),
        Ok(Ok(None)) => DocumentOutcome::Skipped,
        Ok(Err(err)) => DocumentOutcome::Failed(err),
        Err(payload) => DocumentOutcome::Failed(Error::DocumentProcessing {
            id: document.id,
            reason: panic_reason(payload.as_ref()),
        }),
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}

/// Run both phases over one document.
///
/// `Ok(None)` means the document was too short to consider.
pub(crate) fn score_document(
    document: &Document,
    query: &KeywordQuery,
    phase: &ExactPhase,
    limits: ScanLimits,
) -> Result<Option<DocumentScore>> {
    let trimmed_chars = document.text.trim().chars().count();
    if trimmed_chars < limits.min_chars.max(1) {
        debug!(doc = %document.id, chars = trimmed_chars, "skipping short document");
        return Ok(None);
    }

    let folded = document.text.to_lowercase();
    let text: Vec<char> = folded.chars().collect();
    if text.len() > limits.max_chars {
        return Err(Error::DocumentProcessing {
            id: document.id,
            reason: format!(
                "{} characters exceeds the {} character limit",
                text.len(),
                limits.max_chars
            ),
        });
    }

    let mut score = DocumentScore::default();

    let exact_start = Instant::now();
    let remaining = exact_phase(&text, query, phase, &mut score.tally);
    score.exact_time = exact_start.elapsed();

    if limits.fuzzy && !remaining.is_empty() {
        let fuzzy_start = Instant::now();
        let tokens = Tokens::new(&folded);
        for keyword in remaining {
            fuzzy_phase(&tokens, keyword, &mut score.tally);
        }
        score.fuzzy_time = fuzzy_start.elapsed();
    }

    debug!(
        doc = %document.id,
        exact = score.tally.total_of(MatchKind::Exact),
        fuzzy = score.tally.total_of(MatchKind::Fuzzy),
        "scored document"
    );
    Ok(Some(score))
}

/// Tally exact hits; return the keywords that had none.
fn exact_phase<'q>(
    text: &[char],
    query: &'q KeywordQuery,
    phase: &ExactPhase,
    tally: &mut MatchTally,
) -> Vec<&'q Keyword> {
    let mut remaining = Vec::new();

    match phase {
        ExactPhase::Multi(automaton) => {
            let counts = automaton.count_all(text);
            for (id, keyword) in query.keywords().iter().enumerate() {
                match counts.get(id).copied().unwrap_or(0) {
                    0 => remaining.push(keyword),
                    count => tally.add(&keyword.term, count, MatchKind::Exact),
                }
            }
        }
        ExactPhase::Single(matcher) => {
            for keyword in query.keywords() {
                match matcher.count(text, keyword.chars()) {
                    0 => remaining.push(keyword),
                    count => tally.add(&keyword.term, count, MatchKind::Exact),
                }
            }
        }
    }

    remaining
}

/// Tally every word (or word window) close enough to `keyword`.
fn fuzzy_phase(tokens: &Tokens<'_>, keyword: &Keyword, tally: &mut MatchTally) {
    let threshold = keyword.threshold;
    for (window, similarity) in tokens.similar_windows(&keyword.term, |s| threshold.accepts(s)) {
        trace!(term = %keyword.term, window = %window, similarity, "fuzzy hit");
        tally.add(&window, 1, MatchKind::Fuzzy);
    }
}
