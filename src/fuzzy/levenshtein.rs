// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity percentage built on it.
//!
//! Distance is the classic Wagner-Fischer DP, kept to a single rolling row
//! sized by the shorter string: O(|a|·|b|) time, O(min(|a|, |b|)) space.
//!
//! Similarity rescales distance against the longer string:
//! `(max_len - distance) / max_len * 100`. Two empty strings are identical,
//! so they score 100.
//!
//! `|len(a) - len(b)|` is a lower bound on distance, which gives a cheap
//! upper bound on similarity. [`similarity_upper_bound`] exposes it so
//! callers can skip the DP for words that can't possibly pass a threshold.

/// Minimum number of single-character inserts, deletes, and substitutions
/// turning `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

/// [`distance`] over pre-split characters.
pub fn distance_chars(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Similarity percentage in `[0, 100]`. Case-insensitive.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    similarity_chars(&a, &b)
}

/// [`similarity`] over pre-split, already case-folded characters.
pub fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 100.0;
    }
    let distance = distance_chars(a, b);
    (max_len - distance) as f64 / max_len as f64 * 100.0
}

/// Highest similarity two strings of these lengths could reach.
pub fn similarity_upper_bound(a_len: usize, b_len: usize) -> f64 {
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 100.0;
    }
    let min_distance = max_len - a_len.min(b_len);
    (max_len - min_distance) as f64 / max_len as f64 * 100.0
}

/// Default percentage for [`is_similar`].
pub const DEFAULT_SIMILARITY_PERCENT: f64 = 80.0;

/// Is `similarity(a, b)` at least `threshold_percent`?
pub fn is_similar(a: &str, b: &str, threshold_percent: f64) -> bool {
    similarity(a, b) >= threshold_percent
}
