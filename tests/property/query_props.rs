//! Query parsing never fails and always yields clean terms.

use crate::{raw_query_strategy, word_strategy};
use blognote::{normalize, parse_query};
use proptest::prelude::*;

proptest! {
    /// Total: any string parses.
    #[test]
    fn prop_parse_never_panics(raw in any::<String>()) {
        let _ = parse_query(&raw);
    }

    /// Every term is lower-case and non-empty.
    #[test]
    fn prop_terms_lowercase_nonempty(raw in raw_query_strategy()) {
        let q = parse_query(&raw);
        for term in q.exact_phrases.iter().chain(&q.tag_terms).chain(&q.fuzzy_terms) {
            prop_assert!(!term.is_empty());
            prop_assert_eq!(term, &term.to_lowercase());
        }
    }

    /// Tags and fuzzy words never contain whitespace; tags and fuzzy words
    /// always keep at least one word character.
    #[test]
    fn prop_single_token_terms(raw in raw_query_strategy()) {
        let q = parse_query(&raw);
        for term in q.tag_terms.iter().chain(&q.fuzzy_terms) {
            prop_assert!(!term.chars().any(char::is_whitespace), "term {:?}", term);
            prop_assert!(!normalize(term).is_empty(), "term {:?}", term);
        }
    }

    /// No category holds the same term twice.
    #[test]
    fn prop_no_duplicate_terms(raw in raw_query_strategy()) {
        let q = parse_query(&raw);
        for list in [&q.exact_phrases, &q.tag_terms, &q.fuzzy_terms] {
            let mut seen = std::collections::HashSet::new();
            for term in list {
                prop_assert!(seen.insert(term), "duplicate {:?}", term);
            }
        }
    }

    /// Plain words (no quotes, no hashes) all become fuzzy terms, in order.
    #[test]
    fn prop_plain_words_are_fuzzy(words in prop::collection::vec(word_strategy(), 1..6)) {
        let raw = words.join("  ");
        let q = parse_query(&raw);
        prop_assert!(q.exact_phrases.is_empty());
        prop_assert!(q.tag_terms.is_empty());
        let mut expected: Vec<String> = Vec::new();
        for w in words {
            if !expected.contains(&w) {
                expected.push(w);
            }
        }
        prop_assert_eq!(q.fuzzy_terms, expected);
    }

    /// A quoted word is a phrase and nothing else.
    #[test]
    fn prop_quoted_word_is_phrase(w in word_strategy()) {
        let q = parse_query(&format!("\"{}\"", w));
        prop_assert_eq!(q.exact_phrases, vec![w]);
        prop_assert!(q.tag_terms.is_empty());
        prop_assert!(q.fuzzy_terms.is_empty());
    }

    /// A hashed word is a tag and nothing else.
    #[test]
    fn prop_hashed_word_is_tag(w in word_strategy()) {
        let q = parse_query(&format!("#{}", w));
        prop_assert_eq!(q.tag_terms, vec![w]);
        prop_assert!(q.exact_phrases.is_empty());
        prop_assert!(q.fuzzy_terms.is_empty());
    }
}
