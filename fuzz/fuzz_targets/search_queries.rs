// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: arbitrary queries over arbitrary corpora.
//!
//! Search must never panic, must reject only empty queries, and must return
//! a ranked, bounded list that every algorithm agrees on.

#![no_main]

use arbitrary::Arbitrary;
use cvmatch::{Algorithm, Document, Error, SearchConfig, Searcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    documents: Vec<String>,
    query: String,
    top_n: u8,
}

fuzz_target!(|input: SearchInput| {
    let corpus: Vec<Document> = input
        .documents
        .iter()
        .take(16)
        .enumerate()
        .map(|(i, text)| Document::new(i as u64, text.chars().take(300).collect::<String>()))
        .collect();
    let query: String = input.query.chars().take(60).collect();
    let top_n = usize::from(input.top_n).max(1);

    let searcher = Searcher::new(SearchConfig {
        workers: 1,
        min_document_chars: 1,
        ..SearchConfig::default()
    });

    let reference = match searcher.search(&corpus, &query, Algorithm::Kmp, top_n) {
        Ok(results) => results,
        Err(Error::InvalidQuery(_)) => {
            assert!(query.split(',').all(|piece| piece.trim().is_empty()));
            return;
        }
        Err(err) => panic!("unexpected error: {}", err),
    };

    assert!(reference.len() <= top_n);
    for pair in reference.windows(2) {
        assert!(pair[0].total >= pair[1].total);
    }

    for algorithm in [Algorithm::BoyerMoore, Algorithm::AhoCorasick] {
        let results = searcher
            .search(&corpus, &query, algorithm, top_n)
            .expect("query already parsed once");
        assert_eq!(results, reference, "{} diverged", algorithm);
    }
});
