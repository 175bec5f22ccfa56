// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for word matching and edit distance.
//!
//! Checks the algebra the ranking relies on: symmetric distance, a bounded
//! check that agrees with the full one, and a fuzzy matcher that is
//! reflexive and commutative on any input.

#![no_main]

use arbitrary::Arbitrary;
use blognote::{distance, fuzzy_match, fuzzy_match_in_text, levenshtein_within, normalize};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths on char boundaries to avoid timeouts
    let a: String = input.a.chars().take(40).collect();
    let b: String = input.b.chars().take(40).collect();
    let max = usize::from(input.max % 16);

    let d = distance(&a, &b);
    assert_eq!(d, distance(&b, &a), "distance not symmetric");
    assert!(d <= a.chars().count().max(b.chars().count()));
    assert_eq!(
        levenshtein_within(&a, &b, max),
        d <= max,
        "bounded check disagrees: d={} max={}",
        d,
        max
    );

    let n = normalize(&a);
    assert_eq!(normalize(&n), n, "normalize not idempotent");

    assert!(fuzzy_match(&a, &a), "fuzzy_match not reflexive");
    assert_eq!(fuzzy_match(&a, &b), fuzzy_match(&b, &a), "fuzzy_match not commutative");

    if !b.trim().is_empty() && a.contains(b.as_str()) {
        assert!(fuzzy_match_in_text(&a, &b));
    }
});
