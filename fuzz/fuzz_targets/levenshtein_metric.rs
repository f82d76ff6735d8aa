// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: edit distance is a metric and similarity stays in range.
//!
//! Arbitrary UTF-8, so multi-byte and case-changing characters get exercised.

#![no_main]

use arbitrary::Arbitrary;
use cvmatch::fuzzy::{distance, similarity, similarity_upper_bound};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Triple {
    a: String,
    b: String,
    c: String,
}

fn cap(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: Triple| {
    let (a, b, c) = (cap(&input.a), cap(&input.b), cap(&input.c));
    let (la, lb) = (a.chars().count(), b.chars().count());

    let ab = distance(&a, &b);
    assert_eq!(ab, distance(&b, &a), "symmetry");
    assert_eq!(distance(&a, &a), 0, "identity");
    assert!(ab >= la.abs_diff(lb));
    assert!(ab <= la.max(lb));
    assert!(distance(&a, &c) <= ab + distance(&b, &c), "triangle");

    let s = similarity(&a, &b);
    assert!((0.0..=100.0).contains(&s), "similarity {} out of range", s);

    let (fa, fb) = (a.to_lowercase(), b.to_lowercase());
    let bound = similarity_upper_bound(fa.chars().count(), fb.chars().count());
    assert!(s <= bound + 1e-9, "similarity {} above bound {}", s, bound);
});
