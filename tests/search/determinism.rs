//! Same input, same output: across runs, worker counts, and algorithms.

use super::common::{parallel_searcher, sample_cvs, sequential_searcher};
use cvmatch::{Algorithm, Document};

fn large_corpus() -> Vec<Document> {
    let templates = [
        "Python developer with AWS and Docker",
        "Rust and Go backend engineer, some python",
        "Phython scripting, aws lambda, aws s3",
        "Machine lerning researcher using python and pytorch",
        "Frontend work: React, TypeScript, CSS",
    ];
    (0..200)
        .map(|i| Document::new(i as u64, templates[i % templates.len()].repeat(1 + i % 3)))
        .collect()
}

#[test]
fn test_repeated_runs_are_identical() {
    let searcher = parallel_searcher(4);
    let first = searcher
        .search(&large_corpus(), "python, aws, machine learning", Algorithm::AhoCorasick, 25)
        .unwrap();
    for _ in 0..5 {
        let again = searcher
            .search(&large_corpus(), "python, aws, machine learning", Algorithm::AhoCorasick, 25)
            .unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_worker_count_does_not_change_results() {
    let corpus = large_corpus();
    for algorithm in Algorithm::ALL {
        let reference = sequential_searcher()
            .search(&corpus, "python, aws, rust", algorithm, 50)
            .unwrap();
        for workers in [2, 3, 8] {
            let results = parallel_searcher(workers)
                .search(&corpus, "python, aws, rust", algorithm, 50)
                .unwrap();
            assert_eq!(results, reference, "{algorithm} with {workers} workers");
        }
    }
}

#[test]
fn test_more_workers_than_documents() {
    let results = parallel_searcher(16)
        .search(&sample_cvs(), "python, aws", Algorithm::Kmp, 10)
        .unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.document_id.get()).collect();
    assert_eq!(ids, vec![4, 1, 2, 5]);
}

#[test]
fn test_equal_totals_keep_corpus_order_in_parallel() {
    let corpus: Vec<Document> = (0..64)
        .map(|i| Document::new(1000 - i as u64, "one rust mention only"))
        .collect();
    let results = parallel_searcher(4)
        .search(&corpus, "rust", Algorithm::BoyerMoore, 64)
        .unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.document_id.get()).collect();
    let expected: Vec<u64> = (0..64).map(|i| 1000 - i as u64).collect();
    assert_eq!(ids, expected);
}
