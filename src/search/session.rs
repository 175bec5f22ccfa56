// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search, end to end.
//!
//! ```text
//! raw ─▶ parse_query ─▶ matches (filter) ─▶ score ─▶ rank
//! ```
//!
//! No state survives the call. Hosts that search on every keystroke just
//! call again and drop results from the superseded query.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::fields::PostText;
use crate::query::parse_query;
use crate::scoring::ranking::rank;
use crate::scoring::score_text;
use crate::search::matches_text;
use crate::types::{ParsedQuery, Post, SearchHit};

/// Collections smaller than this are searched on the calling thread.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 512;

/// Search `posts` for `raw`, best hits first.
///
/// A query with no terms (blank, or punctuation only) returns nothing:
/// "no query" is not "show everything".
pub fn search_posts<'a>(posts: &'a [Post], raw: &str) -> Vec<SearchHit<'a>> {
    let query = parse_query(raw);
    debug!(
        phrases = ?query.exact_phrases,
        tags = ?query.tag_terms,
        fuzzy = ?query.fuzzy_terms,
        "parsed query"
    );
    if query.is_empty() {
        return Vec::new();
    }

    let hits = search_parsed(posts, &query);
    debug!(candidates = posts.len(), hits = hits.len(), "search finished");
    hits
}

/// Search with an already parsed query.
///
/// Unlike [`search_posts`], an empty query here matches every post (all
/// scoring 0, newest first).
pub fn search_parsed<'a>(posts: &'a [Post], query: &ParsedQuery) -> Vec<SearchHit<'a>> {
    let mut hits = collect_hits(posts, query);
    rank(&mut hits);
    hits
}

fn score_one<'a>(post: &'a Post, query: &ParsedQuery) -> Option<SearchHit<'a>> {
    let text = PostText::new(post);
    matches_text(&text, query).then(|| SearchHit {
        post,
        score: score_text(&text, query),
    })
}

fn collect_hits<'a>(posts: &'a [Post], query: &ParsedQuery) -> Vec<SearchHit<'a>> {
    #[cfg(feature = "parallel")]
    {
        if posts.len() >= PARALLEL_THRESHOLD {
            // collect keeps input order
            return posts
                .par_iter()
                .filter_map(|post| score_one(post, query))
                .collect();
        }
    }
    posts.iter().filter_map(|post| score_one(post, query)).collect()
}
