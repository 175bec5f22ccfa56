// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-level fuzzy matching.
//!
//! A cheap-to-expensive cascade, stopping at the first check that passes:
//!
//! ```text
//! normalize ─▶ equal? ─▶ contains? ─▶ same stem? ─▶ edit distance ≤ 30%?
//! ```
//!
//! The order is part of the contract. Containment runs before edit distance,
//! so a one-letter word matches every word that contains that letter even
//! though the edit distance between them is large.

use crate::fuzzy::levenshtein_within;
use crate::utils::{char_prefix, normalize, tokens};

/// Longest stem compared by the prefix check.
pub const STEM_LEN: usize = 4;

/// Shortest stem that counts. Two-letter prefixes are too common to mean anything.
pub const MIN_STEM_LEN: usize = 3;

/// Fraction of the longer word's length allowed as edits, rounded down.
pub const TYPO_TOLERANCE: f64 = 0.3;

/// Edit budget for a pair of words whose longer side has `max_len` chars.
///
/// `floor(max_len * 0.3)`: words up to 3 chars get no typos, 4-6 get one,
/// 7-9 get two.
#[inline]
pub fn typo_budget(max_len: usize) -> usize {
    (max_len as f64 * TYPO_TOLERANCE).floor() as usize
}

/// Do these two words count as the same word?
///
/// Both sides are normalized first. A side that normalizes to nothing
/// (pure punctuation, emoji) is contained in every word, so it matches
/// anything.
pub fn fuzzy_match(word1: &str, word2: &str) -> bool {
    let w1 = normalize(word1);
    let w2 = normalize(word2);

    if w1 == w2 {
        return true;
    }

    if w1.contains(w2.as_str()) || w2.contains(w1.as_str()) {
        return true;
    }

    let len1 = w1.chars().count();
    let len2 = w2.chars().count();

    let stem = STEM_LEN.min(len1.min(len2));
    if stem >= MIN_STEM_LEN && char_prefix(&w1, stem) == char_prefix(&w2, stem) {
        return true;
    }

    levenshtein_within(&w1, &w2, typo_budget(len1.max(len2)))
}

/// Does `word` occur in `text`, verbatim or fuzzily?
///
/// Verbatim containment is checked on the raw strings, so multi-word `word`s
/// can still hit. Otherwise each whitespace token of `text` is tried with
/// [`fuzzy_match`].
pub fn fuzzy_match_in_text(text: &str, word: &str) -> bool {
    if text.contains(word) {
        return true;
    }
    tokens(text).any(|token| fuzzy_match(token, word))
}
