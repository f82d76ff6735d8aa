//! Differential testing: every exact matcher against the naive scan.
//!
//! Small alphabets make repeats and overlaps common, which is where shift
//! tables go wrong. If a matcher and the oracle disagree, the oracle is right.

use super::common::naive_find_all;
use cvmatch::matching::{aho_corasick, boyer_moore, kmp};
use proptest::prelude::*;

// =============================================================================
// SINGLE PATTERN
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn diff_kmp_binary_alphabet(text in "[ab]{0,40}", pattern in "[ab]{1,6}") {
        prop_assert_eq!(kmp::search(&text, &pattern), naive_find_all(&text, &pattern));
    }

    #[test]
    fn diff_boyer_moore_binary_alphabet(text in "[ab]{0,40}", pattern in "[ab]{1,6}") {
        prop_assert_eq!(
            boyer_moore::search(&text, &pattern),
            naive_find_all(&text, &pattern),
            "text={:?} pattern={:?}", text, pattern
        );
    }

    #[test]
    fn diff_boyer_moore_ternary_alphabet(text in "[abc]{0,60}", pattern in "[abc]{1,8}") {
        prop_assert_eq!(
            boyer_moore::search(&text, &pattern),
            kmp::search(&text, &pattern),
            "text={:?} pattern={:?}", text, pattern
        );
    }

    /// Pattern lifted from the text itself, so there's at least one hit.
    #[test]
    fn diff_embedded_pattern(text in "[a-d]{1,50}", start in 0usize..50, len in 1usize..10) {
        let chars: Vec<char> = text.chars().collect();
        let start = start % chars.len();
        let end = (start + len).min(chars.len());
        let pattern: String = chars[start..end].iter().collect();

        let expected = naive_find_all(&text, &pattern);
        prop_assert!(expected.contains(&start));
        prop_assert_eq!(kmp::search(&text, &pattern), expected.clone());
        prop_assert_eq!(boyer_moore::search(&text, &pattern), expected);
    }

    #[test]
    fn diff_unicode_text(text in "[aéü ]{0,30}", pattern in "[aéü]{1,4}") {
        let expected = naive_find_all(&text, &pattern);
        prop_assert_eq!(kmp::search(&text, &pattern), expected.clone());
        prop_assert_eq!(boyer_moore::search(&text, &pattern), expected);
    }
}

// =============================================================================
// MULTI PATTERN
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Aho-Corasick per pattern equals KMP run on that pattern alone.
    #[test]
    fn diff_aho_corasick_vs_kmp(
        text in "[abc]{0,50}",
        patterns in prop::collection::vec("[abc]{1,5}", 1..8)
    ) {
        let hits = aho_corasick::search(&text, &patterns);
        for pattern in &patterns {
            let expected = kmp::search(&text, pattern);
            prop_assert_eq!(
                &hits[pattern.as_str()], &expected,
                "pattern {:?} in {:?} (all: {:?})", pattern, text, patterns
            );
        }
    }

    /// Nested patterns (each a prefix or suffix of the next) stress the
    /// output sets collected along failure links.
    #[test]
    fn diff_aho_corasick_nested_patterns(text in "[ab]{0,40}", base in "[ab]{1,3}") {
        let patterns = vec![
            base.clone(),
            format!("a{}", base),
            format!("{}b", base),
            format!("a{}b", base),
        ];
        let hits = aho_corasick::search(&text, &patterns);
        for pattern in &patterns {
            prop_assert_eq!(&hits[pattern.as_str()], &naive_find_all(&text, pattern));
        }
    }
}
