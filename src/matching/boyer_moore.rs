// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore: compare right-to-left, skip ahead on mismatch.
//!
//! Two shift tables, both computed once per pattern:
//!
//! - **Bad character**: last index of each symbol in the pattern. On a
//!   mismatch against text symbol `c` at pattern index `j`, sliding by
//!   `j - last[c]` lines the rightmost `c` in the pattern up with the text.
//!   Can be zero or negative, which is why it's never used alone.
//!
//! - **Good suffix**: for each mismatch index, the smallest shift that keeps
//!   the already-matched suffix consistent. Two cases feed it: the suffix
//!   reoccurs elsewhere in the pattern, or only a prefix of the pattern
//!   matches a tail of the suffix. Both come from the `suffixes` array, where
//!   `suffixes[i]` is the length of the longest common suffix of the pattern
//!   and `pattern[..=i]` (a Z-array over the reversed pattern).
//!
//! After a full match the window moves by `good_suffix[0]`, which is the
//! pattern's period. Any closer occurrence would imply a shorter period, so
//! overlaps are never skipped and the output is position-for-position the
//! same as KMP.

use std::collections::HashMap;

/// Precomputed shift tables for one pattern.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<char>,
    bad_char: HashMap<char, usize>,
    good_suffix: Vec<usize>,
}

impl BoyerMoore {
    pub fn new(pattern: &[char]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            bad_char: bad_char_table(pattern),
            good_suffix: good_suffix_table(pattern),
        }
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Every start index of the pattern in `text`, overlaps included.
    pub fn find_all(&self, text: &[char]) -> Vec<usize> {
        let m = self.pattern.len();
        let n = text.len();
        let mut positions = Vec::new();
        if m == 0 || m > n {
            return positions;
        }

        let mut shift = 0;
        while shift + m <= n {
            // Index one past the leftmost compared position; 0 means full match.
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                positions.push(shift);
                shift += self.good_suffix[0];
            } else {
                let mismatch = j - 1;
                let bad_char_shift = match self.bad_char.get(&text[shift + mismatch]) {
                    Some(&last) => mismatch as isize - last as isize,
                    None => mismatch as isize + 1,
                };
                let good_suffix_shift = self.good_suffix[mismatch] as isize;
                shift += bad_char_shift.max(good_suffix_shift).max(1) as usize;
            }
        }

        positions
    }
}

/// Last index of every symbol in `pattern`.
pub fn bad_char_table(pattern: &[char]) -> HashMap<char, usize> {
    pattern
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i))
        .collect()
}

/// `suffixes[i]` = length of the longest common suffix of `pattern` and
/// `pattern[..=i]`. Linear time via the usual window reuse.
pub fn suffixes(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len() as isize;
    if m == 0 {
        return Vec::new();
    }

    let mut suff = vec![0isize; m as usize];
    suff[(m - 1) as usize] = m;

    // [g+1, f] is the rightmost window known to match a suffix of the pattern.
    let mut g = m - 1;
    let mut f = m - 1;
    for i in (0..m - 1).rev() {
        if i > g && suff[(i + m - 1 - f) as usize] < i - g {
            suff[i as usize] = suff[(i + m - 1 - f) as usize];
        } else {
            if i < g {
                g = i;
            }
            f = i;
            while g >= 0 && pattern[g as usize] == pattern[(g + m - 1 - f) as usize] {
                g -= 1;
            }
            suff[i as usize] = f - g;
        }
    }

    suff.into_iter().map(|len| len as usize).collect()
}

/// Good-suffix shift for a mismatch at each pattern index.
pub fn good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 {
        return Vec::new();
    }

    let suff = suffixes(pattern);
    let mut good_suffix = vec![m; m];

    // Only a prefix of the pattern survives: pattern[..=i] is also a suffix.
    let mut j = 0;
    for i in (0..m).rev() {
        if suff[i] == i + 1 {
            while j < m - 1 - i {
                if good_suffix[j] == m {
                    good_suffix[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }

    // The matched suffix reoccurs ending at i; rightmost occurrence wins.
    for i in 0..m - 1 {
        good_suffix[m - 1 - suff[i]] = m - 1 - i;
    }

    good_suffix
}

/// Every start index of `pattern` in `text`, overlaps included.
pub fn find_all(text: &[char], pattern: &[char]) -> Vec<usize> {
    BoyerMoore::new(pattern).find_all(text)
}

/// [`find_all`] over string slices. Positions are character indices.
pub fn search(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all(&text, &pattern)
}
