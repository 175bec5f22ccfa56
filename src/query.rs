// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: one raw string in, three kinds of terms out.
//!
//! ```text
//! "hello world" #rust borrow checker
//! └─── phrase ──┘ └tag┘ └── fuzzy ───┘
//! ```
//!
//! Extraction runs in a fixed order and each pass cuts what it took out of
//! the working string, so a fragment lands in exactly one category:
//!
//! 1. `"..."` segments become exact phrases (a closing quote is required;
//!    a stray `"` is just another character)
//! 2. `#token` segments become tag terms
//! 3. whatever is left is split on whitespace into fuzzy terms
//!
//! Parsing is total. Any string, including garbage, gives a `ParsedQuery`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ParsedQuery;
use crate::utils::normalize;

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\S+)").unwrap());

/// Break a raw query into exact phrases, tag terms and fuzzy terms.
///
/// Every term is lower-cased. Zero-length phrases (`""`, `"   "`) are
/// dropped. Tags and fuzzy words that have no word characters at all
/// (`#!!`, `-`, `…`) are dropped too, so a punctuation-only query parses to
/// an empty query.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let mut query = ParsedQuery::default();

    for caps in QUOTED.captures_iter(raw.trim()) {
        let phrase = caps[1].trim().to_lowercase();
        if !phrase.is_empty() {
            push_unique(&mut query.exact_phrases, phrase);
        }
    }
    let rest = QUOTED.replace_all(raw.trim(), "");

    for caps in HASHTAG.captures_iter(&rest) {
        let tag = caps[1].to_lowercase();
        if !normalize(&tag).is_empty() {
            push_unique(&mut query.tag_terms, tag);
        }
    }
    let rest = HASHTAG.replace_all(&rest, "");

    for word in rest.split_whitespace() {
        if !normalize(word).is_empty() {
            push_unique(&mut query.fuzzy_terms, word.to_lowercase());
        }
    }

    query
}

fn push_unique(terms: &mut Vec<String>, term: String) {
    if !terms.contains(&term) {
        terms.push(term);
    }
}
