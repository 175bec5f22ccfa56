// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, plain and bounded.
//!
//! `distance` is the textbook unit-cost Levenshtein over Unicode code points:
//! substitutions, insertions and deletions, no transpositions.
//!
//! `levenshtein_within` answers `distance(a, b) <= max` without always paying
//! for the full table. `|len(a) - len(b)|` is a lower bound on edit distance,
//! so strings that differ in length by more than `max` are rejected before
//! allocating anything, and a DP row whose minimum already exceeds `max` ends
//! the scan. Both cutoffs are sound: the answer always equals the unbounded one.

/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// Fills a `(|b|+1) x (|a|+1)` table where cell `[i][j]` is the distance
/// between the first `i` chars of `b` and the first `j` chars of `a`. Row 0
/// and column 0 are the index itself.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=a.len() {
        table[0][j] = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            table[i][j] = if b[i - 1] == a[j - 1] {
                table[i - 1][j - 1]
            } else {
                (table[i - 1][j - 1] + 1)
                    .min(table[i][j - 1] + 1)
                    .min(table[i - 1][j] + 1)
            };
        }
    }

    table[b.len()][a.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Same result as `distance(a, b) <= max`, with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Uses a single rolling row instead of the full table.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
