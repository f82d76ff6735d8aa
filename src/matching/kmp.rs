// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt: single-pattern search that never re-reads the text.
//!
//! The prefix function says, for every prefix of the pattern, how long its
//! longest proper border is. On a mismatch (or after a full match) we fall
//! back to that border instead of restarting, which is what surfaces
//! overlapping occurrences: `"aa"` in `"aaa"` is found at 0 and 1.
//!
//! This is the ground truth the other matchers are tested against.

/// Longest proper prefix of `pattern[..=i]` that is also a suffix of it.
pub fn prefix_function(pattern: &[char]) -> Vec<usize> {
    let mut pi = vec![0; pattern.len()];
    let mut border = 0;

    for i in 1..pattern.len() {
        while border > 0 && pattern[i] != pattern[border] {
            border = pi[border - 1];
        }
        if pattern[i] == pattern[border] {
            border += 1;
        }
        pi[i] = border;
    }

    pi
}

/// Every start index of `pattern` in `text`, overlaps included.
///
/// O(n + m). An empty pattern matches nowhere.
pub fn find_all(text: &[char], pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let pi = prefix_function(pattern);
    let mut positions = Vec::new();
    let mut matched = 0;

    for (i, &c) in text.iter().enumerate() {
        while matched > 0 && pattern[matched] != c {
            matched = pi[matched - 1];
        }
        if pattern[matched] == c {
            matched += 1;
        }
        if matched == m {
            positions.push(i + 1 - m);
            matched = pi[m - 1];
        }
    }

    positions
}

/// [`find_all`] over string slices. Positions are character indices.
pub fn search(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all(&text, &pattern)
}
