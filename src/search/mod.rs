// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: keyword string in, ranked documents out.
//!
//! A query runs in three stages:
//!
//! 1. **Prepare** - parse the keyword string, pick the exact phase once
//!    (compiling the Aho-Corasick automaton if that's the algorithm).
//! 2. **Score** - per document: skip if too short, count exact hits for
//!    every keyword, then fall back to Levenshtein for keywords with none.
//!    Documents go through the worker pool when there's more than one worker.
//! 3. **Rank** - drop documents with an empty tally, sort by total with scan
//!    order as tiebreaker, truncate.
//!
//! Nothing is cached between calls. The corpus is rescanned every time.

mod document;
mod pool;
pub mod query;
pub mod ranking;

pub use query::{Keyword, KeywordQuery, Threshold};
pub use ranking::{compare_results, rank, ScoredDocument};

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::matching::{Algorithm, ExactPhase};
use crate::types::{Document, MatchKind, RankedResult};
use document::{DocumentOutcome, ScanLimits};
use pool::PoolMessage;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Counters and timings for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub algorithm: Algorithm,
    pub terms: usize,
    pub documents_scanned: usize,
    pub documents_skipped: usize,
    pub documents_failed: usize,
    pub documents_matched: usize,
    pub exact_hits: usize,
    pub fuzzy_hits: usize,
    /// Summed across documents, so can exceed `elapsed` when run in parallel.
    pub exact_time: Duration,
    pub fuzzy_time: Duration,
    pub elapsed: Duration,
}

/// Ranked results plus the stats that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub results: Vec<RankedResult>,
    pub stats: SearchStats,
}

/// Runs keyword queries over a borrowed corpus.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search with the configured algorithm and result limit.
    pub fn search_default(&self, corpus: &[Document], raw_query: &str) -> Result<Vec<RankedResult>> {
        self.search(corpus, raw_query, self.config.algorithm, self.config.top_n)
    }

    /// Rank at most `top_n` documents of `corpus` against `raw_query`.
    pub fn search(
        &self,
        corpus: &[Document],
        raw_query: &str,
        algorithm: Algorithm,
        top_n: usize,
    ) -> Result<Vec<RankedResult>> {
        self.search_with_stats(corpus, raw_query, algorithm, top_n)
            .map(|report| report.results)
    }

    /// [`Searcher::search`] plus per-phase counters and timings.
    pub fn search_with_stats(
        &self,
        corpus: &[Document],
        raw_query: &str,
        algorithm: Algorithm,
        top_n: usize,
    ) -> Result<SearchReport> {
        if top_n == 0 {
            return Err(Error::InvalidTopN);
        }
        let query = KeywordQuery::parse(raw_query)?;

        let start = Instant::now();
        let phase = query.exact_phase(algorithm);
        let limits = ScanLimits {
            min_chars: self.config.min_document_chars,
            max_chars: self.config.max_document_chars,
            fuzzy: self.config.fuzzy,
        };

        let messages = self.score_corpus(corpus, &query, &phase, limits);

        let mut stats = SearchStats {
            algorithm,
            terms: query.len(),
            ..SearchStats::default()
        };
        let mut scored = Vec::new();

        for message in messages {
            match message.outcome {
                DocumentOutcome::Skipped => stats.documents_skipped += 1,
                DocumentOutcome::Failed(err) => {
                    warn!(doc = %message.document_id, error = %err, "skipping document");
                    stats.documents_failed += 1;
                }
                DocumentOutcome::Scored(score) => {
                    stats.documents_scanned += 1;
                    stats.exact_time += score.exact_time;
                    stats.fuzzy_time += score.fuzzy_time;
                    if score.tally.is_empty() {
                        continue;
                    }
                    stats.documents_matched += 1;
                    stats.exact_hits += score.tally.total_of(MatchKind::Exact);
                    stats.fuzzy_hits += score.tally.total_of(MatchKind::Fuzzy);
                    scored.push(ScoredDocument {
                        scan_index: message.scan_index,
                        result: RankedResult::from_tally(message.document_id, score.tally),
                    });
                }
            }
        }

        let results = rank(scored, top_n);
        stats.elapsed = start.elapsed();

        info!(
            algorithm = %algorithm,
            terms = stats.terms,
            documents = corpus.len(),
            matched = stats.documents_matched,
            returned = results.len(),
            elapsed_ms = stats.elapsed.as_secs_f64() * 1000.0,
            "search complete"
        );

        Ok(SearchReport { results, stats })
    }

    fn score_corpus(
        &self,
        corpus: &[Document],
        query: &KeywordQuery,
        phase: &ExactPhase,
        limits: ScanLimits,
    ) -> Vec<PoolMessage> {
        #[cfg(feature = "parallel")]
        {
            let workers = self.config.resolved_workers().min(corpus.len());
            if workers > 1 {
                return pool::score_parallel(corpus, query, phase, limits, workers);
            }
        }
        pool::score_sequential(corpus, query, phase, limits)
    }
}

/// Search with default configuration.
pub fn search(
    corpus: &[Document],
    raw_query: &str,
    algorithm: Algorithm,
    top_n: usize,
) -> Result<Vec<RankedResult>> {
    Searcher::default().search(corpus, raw_query, algorithm, top_n)
}
