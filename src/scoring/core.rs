// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Purely additive, one contribution per term, no length normalization.
//! Scores only order results; they mean nothing on their own and are never
//! stored.
//!
//! # Constants
//!
//! | Term kind     | Field   | Verbatim | Fuzzy only |
//! |---------------|---------|----------|------------|
//! | Exact phrase  | Title   | 10       | -          |
//! | Exact phrase  | Content | 3        | -          |
//! | Tag term      | Tags    | -        | 5          |
//! | Fuzzy term    | Title   | 7        | 4          |
//! | Fuzzy term    | Content | 2        | 1          |
//!
//! Within one field a fuzzy term earns either its verbatim bonus or its
//! fuzzy bonus, never both. Title and content are scored independently and
//! add up, so one fuzzy term is worth at most 7 + 2 = 9.

use crate::fields::PostText;
use crate::fuzzy::{fuzzy_match, fuzzy_match_in_text};
use crate::types::{ParsedQuery, Post};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Exact phrase found in the title.
pub const PHRASE_TITLE_SCORE: u32 = 10;

/// Exact phrase found in the content.
pub const PHRASE_CONTENT_SCORE: u32 = 3;

/// Tag term fuzzy-matching one of the post's tags.
pub const TAG_SCORE: u32 = 5;

/// Fuzzy term appearing verbatim in the title.
pub const FUZZY_TITLE_EXACT_SCORE: u32 = 7;

/// Fuzzy term matching a title word, but not verbatim.
pub const FUZZY_TITLE_SCORE: u32 = 4;

/// Fuzzy term appearing verbatim in the content.
pub const FUZZY_CONTENT_EXACT_SCORE: u32 = 2;

/// Fuzzy term matching a content word, but not verbatim.
pub const FUZZY_CONTENT_SCORE: u32 = 1;

/// Relevance of `post` for `query`.
///
/// Meant for posts that already passed [`crate::matches`]. Scoring a post
/// that does not match gives a number, but not a meaningful one.
pub fn score(post: &Post, query: &ParsedQuery) -> u32 {
    score_text(&PostText::new(post), query)
}

/// [`score`] over an already lower-cased post.
pub fn score_text(text: &PostText, query: &ParsedQuery) -> u32 {
    let phrases: u32 = query
        .exact_phrases
        .iter()
        .map(|phrase| phrase_score(text, phrase))
        .sum();

    let tags: u32 = query
        .tag_terms
        .iter()
        .filter(|term| text.tags.iter().any(|tag| fuzzy_match(tag, term)))
        .map(|_| TAG_SCORE)
        .sum();

    let fuzzy: u32 = query
        .fuzzy_terms
        .iter()
        .map(|term| {
            field_score(&text.title, term, FUZZY_TITLE_EXACT_SCORE, FUZZY_TITLE_SCORE)
                + field_score(&text.content, term, FUZZY_CONTENT_EXACT_SCORE, FUZZY_CONTENT_SCORE)
        })
        .sum();

    phrases + tags + fuzzy
}

fn phrase_score(text: &PostText, phrase: &str) -> u32 {
    let mut total = 0;
    if text.title.contains(phrase) {
        total += PHRASE_TITLE_SCORE;
    }
    if text.content.contains(phrase) {
        total += PHRASE_CONTENT_SCORE;
    }
    total
}

/// Best tier one fuzzy term reaches in one field.
fn field_score(field: &str, term: &str, exact: u32, fuzzy: u32) -> u32 {
    if field.contains(term) {
        exact
    } else if fuzzy_match_in_text(field, term) {
        fuzzy
    } else {
        0
    }
}
