//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cvmatch::{Document, SearchConfig, Searcher};

// ============================================================================
// ORACLES
// ============================================================================

/// Every start index where `pattern` occurs in `text`, overlaps included.
///
/// Quadratic and obviously correct. An empty pattern never matches.
pub fn naive_find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == pattern[..])
        .collect()
}

/// Full-matrix Wagner-Fischer edit distance.
pub fn naive_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

// ============================================================================
// CORPUS HELPERS
// ============================================================================

/// Build a corpus with ids 1, 2, 3, ... in the given order.
pub fn corpus(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(i as u64 + 1, *text))
        .collect()
}

/// Searcher that never spawns workers.
pub fn sequential_searcher() -> Searcher {
    Searcher::new(SearchConfig {
        workers: 1,
        ..SearchConfig::default()
    })
}

/// Searcher with a fixed worker pool.
pub fn parallel_searcher(workers: usize) -> Searcher {
    Searcher::new(SearchConfig {
        workers,
        ..SearchConfig::default()
    })
}

/// A small CV corpus with known keyword distribution.
pub fn sample_cvs() -> Vec<Document> {
    corpus(&[
        "Backend engineer. Python, Django and PostgreSQL on AWS. Some Go.",
        "Data scientist: python, pandas, machine learning, more Python for ETL.",
        "Frontend developer with React and TypeScript. No backend experience.",
        "DevOps: AWS, Terraform, Kubernetes, aws lambda, python scripting.",
        "Phython enthusiast who also writes Rust and C++.",
        "short",
    ])
}
