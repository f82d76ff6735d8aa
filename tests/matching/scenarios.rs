//! Known inputs with hand-checked answers.

use cvmatch::matching::{aho_corasick, boyer_moore, kmp, timed};
use cvmatch::{AhoCorasick, Algorithm};

#[test]
fn test_kmp_and_boyer_moore_find_single_occurrence() {
    let text = "ABABDABACDABABCABAB";
    let pattern = "ABABCABAB";
    assert_eq!(kmp::search(text, pattern), vec![10]);
    assert_eq!(boyer_moore::search(text, pattern), vec![10]);
}

#[test]
fn test_aho_corasick_classic_ushers() {
    let hits = aho_corasick::search("ushers", &["he", "she", "his", "hers"]);
    assert_eq!(hits["he"], vec![1]);
    assert_eq!(hits["she"], vec![0]);
    assert!(hits["his"].is_empty());
    assert_eq!(hits["hers"], vec![1]);

    let order: Vec<&str> = hits.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["he", "she", "his", "hers"]);
}

#[test]
fn test_overlapping_occurrences_are_all_reported() {
    for text in ["aaaa", "abababa"] {
        let pattern = &text[..3];
        let expected = super::common::naive_find_all(text, pattern);
        assert_eq!(kmp::search(text, pattern), expected, "kmp {text}");
        assert_eq!(boyer_moore::search(text, pattern), expected, "bm {text}");
        assert_eq!(aho_corasick::search(text, &[pattern])[pattern], expected);
    }
    assert_eq!(kmp::search("aaaa", "aa"), vec![0, 1, 2]);
}

#[test]
fn test_degenerate_inputs_return_nothing() {
    assert!(kmp::search("", "a").is_empty());
    assert!(kmp::search("abc", "").is_empty());
    assert!(kmp::search("ab", "abc").is_empty());
    assert!(boyer_moore::search("", "a").is_empty());
    assert!(boyer_moore::search("abc", "").is_empty());
    assert!(boyer_moore::search("ab", "abc").is_empty());

    let automaton = AhoCorasick::new(Vec::<String>::new());
    assert!(automaton.find_all(&['a', 'b']).is_empty());
    assert!(aho_corasick::search("", &["a"])["a"].is_empty());
}

#[test]
fn test_positions_are_character_indices() {
    // "é" is two bytes; positions must not drift after it.
    let text = "café au lait, café noir";
    assert_eq!(kmp::search(text, "café"), vec![0, 14]);
    assert_eq!(boyer_moore::search(text, "café"), vec![0, 14]);
    assert_eq!(aho_corasick::search(text, &["café", "lait"])["lait"], vec![8]);
}

#[test]
fn test_matching_is_case_sensitive() {
    assert!(kmp::search("Python", "python").is_empty());
    assert!(boyer_moore::search("Python", "python").is_empty());
    assert!(aho_corasick::search("Python", &["python"])["python"].is_empty());
}

#[test]
fn test_duplicate_patterns_share_one_entry() {
    let automaton = AhoCorasick::new(["aws", "aws", "gcp"]);
    assert_eq!(automaton.patterns(), ["aws", "gcp"]);
}

#[test]
fn test_timed_agrees_across_algorithms() {
    let text = "aws, gcp and aws again; awsaws";
    let reference = timed(Algorithm::Kmp, text, "aws");
    assert_eq!(reference.positions, vec![0, 13, 24, 27]);
    assert_eq!(reference.pattern_len, 3);
    assert_eq!(reference.text_len, text.chars().count());

    for algorithm in Algorithm::ALL {
        let stats = timed(algorithm, text, "aws");
        assert_eq!(stats.algorithm, algorithm);
        assert_eq!(stats.positions, reference.positions, "{algorithm}");
        assert_eq!(stats.total_matches(), 4);
    }
}

#[test]
fn test_algorithm_selector_spellings() {
    assert_eq!("kmp".parse::<Algorithm>().unwrap(), Algorithm::Kmp);
    assert_eq!("BM".parse::<Algorithm>().unwrap(), Algorithm::BoyerMoore);
    assert_eq!("boyer_moore".parse::<Algorithm>().unwrap(), Algorithm::BoyerMoore);
    assert_eq!("aho".parse::<Algorithm>().unwrap(), Algorithm::AhoCorasick);
    assert_eq!("aho_corasick".parse::<Algorithm>().unwrap(), Algorithm::AhoCorasick);
    assert!("regex".parse::<Algorithm>().is_err());
}
