// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Does one post match a parsed query?
//!
//! AND across everything: every exact phrase, every tag term and every fuzzy
//! term has to succeed on its own. No partial matches. An empty category
//! imposes nothing, so the empty query matches every post.

use crate::fields::PostText;
use crate::fuzzy::{fuzzy_match, fuzzy_match_in_text};
use crate::types::{ParsedQuery, Post};

/// Does `post` satisfy every term of `query`?
pub fn matches(post: &Post, query: &ParsedQuery) -> bool {
    matches_text(&PostText::new(post), query)
}

/// [`matches`] over an already lower-cased post.
pub fn matches_text(text: &PostText, query: &ParsedQuery) -> bool {
    query
        .exact_phrases
        .iter()
        .all(|phrase| text.title.contains(phrase.as_str()) || text.content.contains(phrase.as_str()))
        && query.tag_terms.iter().all(|term| has_tag(text, term))
        && query.fuzzy_terms.iter().all(|term| {
            fuzzy_match_in_text(&text.title, term)
                || fuzzy_match_in_text(&text.content, term)
                || has_tag(text, term)
        })
}

/// Any tag fuzzy-matching `term`. False for untagged posts.
fn has_tag(text: &PostText, term: &str) -> bool {
    text.tags.iter().any(|tag| fuzzy_match(tag, term))
}
