//! Empty inputs, invalid queries, and documents that can't be scored.

use super::common::{corpus, sample_cvs, sequential_searcher};
use cvmatch::{search, Algorithm, Document, Error, SearchConfig, Searcher};

#[test]
fn test_empty_corpus_returns_nothing() {
    for algorithm in Algorithm::ALL {
        let results = search(&[], "python, aws", algorithm, 10).unwrap();
        assert!(results.is_empty());
    }
}

#[test]
fn test_blank_query_is_rejected() {
    for raw in ["", "   ", ",,,", " , ,\t, "] {
        let err = search(&sample_cvs(), raw, Algorithm::Kmp, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)), "{raw:?}: {err}");
    }
}

#[test]
fn test_zero_top_n_is_rejected() {
    let err = search(&sample_cvs(), "python", Algorithm::Kmp, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidTopN));
}

#[test]
fn test_stray_commas_are_ignored() {
    let a = search(&sample_cvs(), ",python,, aws,", Algorithm::Kmp, 10).unwrap();
    let b = search(&sample_cvs(), "python, aws", Algorithm::Kmp, 10).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_repeated_keywords_count_once() {
    let once = search(&sample_cvs(), "python", Algorithm::AhoCorasick, 10).unwrap();
    let twice = search(&sample_cvs(), "Python, python ,PYTHON", Algorithm::AhoCorasick, 10).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_short_and_empty_documents_are_skipped() {
    let docs = vec![
        Document::new(1, ""),
        Document::new(2, "   \n\t  "),
        Document::new(3, "rust"),
        Document::new(4, "   rust   "),
        Document::new(5, "rust, rust and more rust"),
    ];
    let report = sequential_searcher()
        .search_with_stats(&docs, "rust", Algorithm::Kmp, 10)
        .unwrap();
    assert_eq!(report.stats.documents_skipped, 4);
    assert_eq!(report.stats.documents_scanned, 1);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].document_id.get(), 5);
    assert_eq!(report.results[0].total, 3);
}

#[test]
fn test_oversized_document_is_dropped_not_fatal() {
    let searcher = Searcher::new(SearchConfig {
        workers: 1,
        max_document_chars: 30,
        ..SearchConfig::default()
    });
    let docs = corpus(&[
        "rust rust rust rust rust rust rust rust rust",
        "rust engineer",
    ]);
    let report = searcher
        .search_with_stats(&docs, "rust", Algorithm::BoyerMoore, 10)
        .unwrap();
    assert_eq!(report.stats.documents_failed, 1);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].document_id.get(), 2);
}

#[test]
fn test_case_folding_beyond_ascii() {
    let docs = corpus(&["Erfahrung mit ÜBERWACHUNG und Über-Design"]);
    let results = sequential_searcher()
        .search(&docs, "über", Algorithm::Kmp, 10)
        .unwrap();
    assert_eq!(results[0].tally.get("über"), Some(2));
}

#[test]
fn test_query_longer_than_every_document() {
    let docs = corpus(&["Rust engineer", "Python developer"]);
    let results = sequential_searcher()
        .search(
            &docs,
            "distributed systems engineering with formal verification",
            Algorithm::AhoCorasick,
            10,
        )
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_stats_split_exact_and_fuzzy_hits() {
    let report = sequential_searcher()
        .search_with_stats(&sample_cvs(), "python, aws", Algorithm::Kmp, 10)
        .unwrap();
    let stats = &report.stats;
    assert_eq!(stats.terms, 2);
    assert_eq!(stats.documents_scanned, 5);
    assert_eq!(stats.documents_skipped, 1);
    assert_eq!(stats.documents_matched, 4);
    assert_eq!(stats.exact_hits, 7);
    assert_eq!(stats.fuzzy_hits, 1);
}
