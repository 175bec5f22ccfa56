//! Normalization, edit distance and fuzzy matching.

use crate::{messy_word_strategy, word_strategy};
use blognote::{distance, fuzzy_match, fuzzy_match_in_text, levenshtein_within, normalize};
use proptest::prelude::*;

// ============================================================================
// NORMALIZE
// ============================================================================

proptest! {
    /// normalize(normalize(x)) == normalize(x)
    #[test]
    fn prop_normalize_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Only word characters survive.
    #[test]
    fn prop_normalize_keeps_only_word_chars(s in messy_word_strategy()) {
        for c in normalize(&s).chars() {
            prop_assert!(
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || ('а'..='я').contains(&c) || c == 'ё',
                "unexpected char {:?} in normalize({:?})", c, s
            );
        }
    }

    /// Already clean words come back unchanged.
    #[test]
    fn prop_normalize_fixes_clean_words(w in word_strategy()) {
        prop_assert_eq!(normalize(&w), w);
    }
}

// ============================================================================
// EDIT DISTANCE
// ============================================================================

proptest! {
    /// Agrees with the strsim reference implementation.
    #[test]
    fn prop_distance_matches_reference(a in "[a-zа-я]{0,12}", b in "[a-zа-я]{0,12}") {
        prop_assert_eq!(distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_distance_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_distance_identity(a in any::<String>()) {
        prop_assert_eq!(distance(&a, &a), 0);
        prop_assert_eq!(distance("", &a), a.chars().count());
    }

    /// The bounded check answers exactly "distance <= max".
    #[test]
    fn prop_within_agrees_with_distance(a in word_strategy(), b in word_strategy(), max in 0usize..8) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), distance(&a, &b) <= max);
    }

    /// Lower bound: the length difference.
    #[test]
    fn prop_distance_at_least_length_gap(a in word_strategy(), b in word_strategy()) {
        let gap = a.chars().count().abs_diff(b.chars().count());
        prop_assert!(distance(&a, &b) >= gap);
    }
}

// ============================================================================
// FUZZY MATCH
// ============================================================================

proptest! {
    #[test]
    fn prop_fuzzy_reflexive(w in messy_word_strategy()) {
        prop_assert!(fuzzy_match(&w, &w));
    }

    #[test]
    fn prop_fuzzy_commutative(a in messy_word_strategy(), b in messy_word_strategy()) {
        prop_assert_eq!(fuzzy_match(&a, &b), fuzzy_match(&b, &a));
    }

    /// Case and trailing punctuation never matter.
    #[test]
    fn prop_fuzzy_ignores_case_and_punctuation(w in word_strategy()) {
        let shouted = format!("{}!", w.to_uppercase());
        prop_assert!(fuzzy_match(&shouted, &w));
    }

    /// Any non-empty piece of a word matches the word.
    #[test]
    fn prop_fuzzy_containment(w in "[a-z]{2,10}", start in 0usize..10, len in 1usize..10) {
        let start = start % w.len();
        let end = (start + len).min(w.len());
        let piece = &w[start..end];
        prop_assert!(fuzzy_match(piece, &w));
    }

    /// One substitution in a word of 4+ chars is always tolerated.
    #[test]
    fn prop_single_typo_tolerated(w in "[a-y]{4,10}", pos in 0usize..10) {
        let pos = pos % w.len();
        let mut chars: Vec<char> = w.chars().collect();
        chars[pos] = 'z';
        let typo: String = chars.into_iter().collect();
        prop_assert!(fuzzy_match(&typo, &w));
    }

    /// Every token of a text is found in that text.
    #[test]
    fn prop_tokens_found_in_text(words in prop::collection::vec(word_strategy(), 1..6), pick in 0usize..6) {
        let text = words.join(" ");
        let word = &words[pick % words.len()];
        prop_assert!(fuzzy_match_in_text(&text, word));
    }
}

#[test]
fn test_distance_fixed_points() {
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("kitten", "sitting"), 3);
    assert_eq!(distance("ёж", "еж"), 1);
}
