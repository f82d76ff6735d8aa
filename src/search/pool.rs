// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document fan-out.
//!
//! Documents are independent, so scoring is embarrassingly parallel. A
//! fixed-size rayon pool scores one document per task; each task sends
//! `(scan_index, outcome)` over a channel and the calling thread collects
//! them. Workers never touch shared mutable state: the corpus, query, and
//! exact phase are read-only, and each tally lives on its worker until sent.
//!
//! The collector restores scan order before returning, so callers can't
//! tell which path ran.

use super::document::{score_isolated, DocumentOutcome, ScanLimits};
use super::query::KeywordQuery;
use crate::matching::ExactPhase;
use crate::types::{DocId, Document};

/// One scored document as it leaves the pool.
#[derive(Debug)]
pub(crate) struct PoolMessage {
    pub scan_index: usize,
    pub document_id: DocId,
    pub outcome: DocumentOutcome,
}

/// Score documents one after another on the calling thread.
pub(crate) fn score_sequential(
    corpus: &[Document],
    query: &KeywordQuery,
    phase: &ExactPhase,
    limits: ScanLimits,
) -> Vec<PoolMessage> {
    corpus
        .iter()
        .enumerate()
        .map(|(scan_index, document)| PoolMessage {
            scan_index,
            document_id: document.id,
            outcome: score_isolated(document, query, phase, limits),
        })
        .collect()
}

/// Score documents on `workers` threads. Output is in scan order.
///
/// Falls back to [`score_sequential`] if the pool can't be built.
#[cfg(feature = "parallel")]
pub(crate) fn score_parallel(
    corpus: &[Document],
    query: &KeywordQuery,
    phase: &ExactPhase,
    limits: ScanLimits,
    workers: usize,
) -> Vec<PoolMessage> {
    use std::sync::mpsc::channel;

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("cvmatch-worker-{}", i))
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            tracing::warn!(error = %err, "thread pool unavailable, scoring sequentially");
            return score_sequential(corpus, query, phase, limits);
        }
    };

    let (tx, rx) = channel::<PoolMessage>();
    pool.scope(|scope| {
        for (scan_index, document) in corpus.iter().enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let outcome = score_isolated(document, query, phase, limits);
                // The receiver outlives the scope, so send can't fail.
                let _ = tx.send(PoolMessage {
                    scan_index,
                    document_id: document.id,
                    outcome,
                });
            });
        }
    });
    drop(tx);

    let mut messages: Vec<PoolMessage> = rx.into_iter().collect();
    messages.sort_by_key(|message| message.scan_index);
    messages
}
