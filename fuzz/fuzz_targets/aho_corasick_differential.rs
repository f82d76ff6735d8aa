// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: Aho-Corasick per pattern equals KMP on that pattern alone.
//!
//! Catches missing or duplicated outputs along failure links.

#![no_main]

use arbitrary::Arbitrary;
use cvmatch::matching::kmp;
use cvmatch::AhoCorasick;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MultiInput {
    text: Vec<u8>,
    patterns: Vec<Vec<u8>>,
}

fn fold(bytes: &[u8], cap: usize) -> String {
    bytes
        .iter()
        .take(cap)
        .map(|b| (b'a' + b % 3) as char)
        .collect()
}

fuzz_target!(|input: MultiInput| {
    let text = fold(&input.text, 512);
    let patterns: Vec<String> = input
        .patterns
        .iter()
        .take(16)
        .map(|p| fold(p, 8))
        .collect();

    let automaton = AhoCorasick::new(&patterns);
    let text_chars: Vec<char> = text.chars().collect();
    let hits = automaton.find_all(&text_chars);

    assert_eq!(hits.len(), automaton.patterns().len());
    for (pattern, positions) in automaton.patterns().iter().zip(&hits) {
        assert_eq!(positions, &kmp::search(&text, pattern), "pattern {:?}", pattern);
    }
});
