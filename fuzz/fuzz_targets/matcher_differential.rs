// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: KMP and Boyer-Moore against a naive scan.
//!
//! Bytes are folded onto a three-letter alphabet so that periodic patterns
//! and overlapping hits show up constantly. Any disagreement is a shift-table
//! bug.

#![no_main]

use arbitrary::Arbitrary;
use cvmatch::matching::{boyer_moore, kmp};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fn fold(bytes: &[u8], cap: usize) -> Vec<char> {
    bytes
        .iter()
        .take(cap)
        .map(|b| (b'a' + b % 3) as char)
        .collect()
}

fn naive(text: &[char], pattern: &[char]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

fuzz_target!(|input: MatchInput| {
    let text = fold(&input.text, 512);
    let pattern = fold(&input.pattern, 16);

    let expected = naive(&text, &pattern);
    assert_eq!(kmp::find_all(&text, &pattern), expected, "kmp");
    assert_eq!(
        boyer_moore::find_all(&text, &pattern),
        expected,
        "boyer-moore text={:?} pattern={:?}",
        text.iter().collect::<String>(),
        pattern.iter().collect::<String>()
    );
});
