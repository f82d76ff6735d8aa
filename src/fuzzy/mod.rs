// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Text is split on whitespace only, no stemming or language rules. A term of
//! `L` words is compared against every run of `L` consecutive words (a single
//! word when `L == 1`), and each run that scores high enough counts as a hit
//! under its own literal text.

mod levenshtein;

pub use levenshtein::*;

use serde::Serialize;
use std::borrow::Cow;

/// A word accepted by [`find_similar_words`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyWord {
    pub word: String,
    pub similarity: f64,
    /// Character offset of the word in the original text.
    pub position: usize,
}

/// Whitespace-separated words with their character offsets.
pub fn word_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    let mut char_pos = 0;

    for (byte_pos, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some((chars_at, bytes_at)) = start.take() {
                spans.push((chars_at, &text[bytes_at..byte_pos]));
            }
        } else if start.is_none() {
            start = Some((char_pos, byte_pos));
        }
        char_pos += 1;
    }
    if let Some((chars_at, bytes_at)) = start {
        spans.push((chars_at, &text[bytes_at..]));
    }

    spans
}

/// Every word in `text` whose similarity to `pattern` is at least
/// `threshold_percent`, in text order.
pub fn find_similar_words(text: &str, pattern: &str, threshold_percent: f64) -> Vec<FuzzyWord> {
    word_spans(text)
        .into_iter()
        .filter_map(|(position, word)| {
            let similarity = similarity(pattern, word);
            (similarity >= threshold_percent).then(|| FuzzyWord {
                word: word.to_string(),
                similarity,
                position,
            })
        })
        .collect()
}

/// A document's words, split once and reused for every fuzzy term.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    words: Vec<&'a str>,
    chars: Vec<Vec<char>>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        let words: Vec<&'a str> = text.split_whitespace().collect();
        let chars = words.iter().map(|word| word.chars().collect()).collect();
        Self { words, chars }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every run of `size` consecutive words joined by single spaces.
    pub fn windows(&self, size: usize) -> impl Iterator<Item = Cow<'a, str>> + '_ {
        let count = if size == 0 || size > self.words.len() {
            0
        } else {
            self.words.len() - size + 1
        };
        (0..count).map(move |start| self.window_text(start, size))
    }

    fn window_text(&self, start: usize, size: usize) -> Cow<'a, str> {
        if size == 1 {
            Cow::Borrowed(self.words[start])
        } else {
            Cow::Owned(self.words[start..start + size].join(" "))
        }
    }

    fn window_len(&self, start: usize, size: usize) -> usize {
        self.chars[start..start + size].iter().map(Vec::len).sum::<usize>() + size - 1
    }

    fn window_chars(&self, start: usize, size: usize) -> Cow<'_, [char]> {
        if size == 1 {
            return Cow::Borrowed(self.chars[start].as_slice());
        }
        let mut joined = Vec::with_capacity(self.window_len(start, size));
        for (offset, word) in self.chars[start..start + size].iter().enumerate() {
            if offset > 0 {
                joined.push(' ');
            }
            joined.extend_from_slice(word);
        }
        Cow::Owned(joined)
    }

    /// Windows as wide as `term` has words whose similarity passes `accept`.
    ///
    /// `term` must already be case-folded like the text. Windows whose length
    /// alone rules them out are skipped before the DP runs.
    pub fn similar_windows<F>(&self, term: &str, accept: F) -> Vec<(Cow<'a, str>, f64)>
    where
        F: Fn(f64) -> bool,
    {
        let size = term.split_whitespace().count().max(1);
        if size > self.words.len() {
            return Vec::new();
        }

        let term_chars: Vec<char> = term.chars().collect();
        let mut hits = Vec::new();
        for start in 0..=self.words.len() - size {
            let bound = similarity_upper_bound(term_chars.len(), self.window_len(start, size));
            if !accept(bound) {
                continue;
            }
            let similarity = similarity_chars(&term_chars, &self.window_chars(start, size));
            if accept(similarity) {
                hits.push((self.window_text(start, size), similarity));
            }
        }
        hits
    }
}
