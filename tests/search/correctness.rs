//! End-to-end ranking over a small CV corpus.

use super::common::{corpus, sample_cvs, sequential_searcher};
use cvmatch::{search, Algorithm, MatchKind, RankedResult};

fn ids(results: &[RankedResult]) -> Vec<u64> {
    results.iter().map(|r| r.document_id.get()).collect()
}

#[test]
fn test_python_aws_ranking() {
    let results = sequential_searcher()
        .search(&sample_cvs(), "Python, AWS", Algorithm::Kmp, 10)
        .unwrap();

    assert_eq!(ids(&results), vec![4, 1, 2, 5]);
    let totals: Vec<usize> = results.iter().map(|r| r.total).collect();
    assert_eq!(totals, vec![3, 2, 2, 1]);

    let top = &results[0].tally;
    let keys: Vec<&str> = top.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["python", "aws"]);
    assert_eq!(top.get("aws"), Some(2));
    assert_eq!(top.entry("python").unwrap().kind, MatchKind::Exact);
}

#[test]
fn test_fuzzy_hit_keyed_by_document_word() {
    let results = sequential_searcher()
        .search(&sample_cvs(), "python, aws", Algorithm::BoyerMoore, 10)
        .unwrap();
    let last = results.last().unwrap();
    assert_eq!(last.document_id.get(), 5);
    assert_eq!(last.tally.get("phython"), Some(1));
    assert_eq!(last.tally.get("python"), None);
    assert_eq!(last.tally.entry("phython").unwrap().kind, MatchKind::Fuzzy);
}

#[test]
fn test_same_ranking_for_every_algorithm() {
    let reference = sequential_searcher()
        .search(&sample_cvs(), "python, aws, rust", Algorithm::Kmp, 10)
        .unwrap();
    for algorithm in Algorithm::ALL {
        let results = sequential_searcher()
            .search(&sample_cvs(), "python, aws, rust", algorithm, 10)
            .unwrap();
        assert_eq!(results, reference, "{algorithm}");
    }
}

#[test]
fn test_top_n_truncates() {
    let results = search(&sample_cvs(), "python, aws", Algorithm::AhoCorasick, 2).unwrap();
    assert_eq!(ids(&results), vec![4, 1]);
}

#[test]
fn test_ties_follow_corpus_order() {
    let docs = corpus(&[
        "Go developer, some rust",
        "Rust engineer writing Go",
        "Rust and go, go, go",
    ]);
    let results = sequential_searcher()
        .search(&docs, "rust, go", Algorithm::Kmp, 10)
        .unwrap();
    // Totals 2, 2, 4.
    assert_eq!(ids(&results), vec![3, 1, 2]);
}

#[test]
fn test_overlapping_hits_all_count() {
    let docs = corpus(&["aaaa bbbb aaaa"]);
    let results = sequential_searcher()
        .search(&docs, "aa", Algorithm::BoyerMoore, 10)
        .unwrap();
    assert_eq!(results[0].tally.get("aa"), Some(6));
}

#[test]
fn test_keywords_match_inside_longer_words() {
    let docs = corpus(&["JavaScript and TypeScript for the web"]);
    let results = sequential_searcher()
        .search(&docs, "script, java", Algorithm::AhoCorasick, 10)
        .unwrap();
    assert_eq!(results[0].tally.get("script"), Some(2));
    assert_eq!(results[0].tally.get("java"), Some(1));
}

#[test]
fn test_documents_without_hits_are_dropped() {
    let results = sequential_searcher()
        .search(&sample_cvs(), "javascript", Algorithm::Kmp, 10)
        .unwrap();
    assert!(results.is_empty());
}
