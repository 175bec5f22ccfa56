// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query parsing and search.
//!
//! Arbitrary bytes go through `parse_query` and `search_posts` over a small
//! fixed blog. Neither may panic, and whatever comes back must be a clean
//! query and a consistent, ranked hit list.

#![no_main]

use blognote::{matches, normalize, parse_query, score, search_posts, Post};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn corpus() -> &'static [Post] {
    static POSTS: OnceLock<Vec<Post>> = OnceLock::new();
    POSTS.get_or_init(|| {
        [
            ("1", "Основы программирования", "Владение и заимствование", &["rust"][..], "2024-01-01"),
            ("2", "Hello world", "say \"hello\" #world", &["news", "Новости"][..], "2024-02-01"),
            ("3", "", "", &[][..], "not a date"),
            ("4", "Ёжик в тумане", "мультфильм", &["кино"][..], "2023-12-31T23:59:59Z"),
        ]
        .into_iter()
        .map(|(id, title, content, tags, date)| Post {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: date.to_string(),
            ..Default::default()
        })
        .collect()
    })
}

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    // Cap length on a char boundary to avoid timeouts
    let raw: String = raw.chars().take(200).collect();

    let query = parse_query(&raw);
    for term in query.tag_terms.iter().chain(&query.fuzzy_terms) {
        assert!(!term.is_empty());
        assert!(!normalize(term).is_empty(), "term without word chars: {:?}", term);
        assert!(!term.chars().any(char::is_whitespace));
    }
    for phrase in &query.exact_phrases {
        assert!(!phrase.is_empty());
        assert_eq!(phrase.trim(), phrase);
    }

    let posts = corpus();
    let hits = search_posts(posts, &raw);
    if query.is_empty() {
        assert!(hits.is_empty());
    }
    assert!(hits.len() <= posts.len());
    for hit in &hits {
        assert!(matches(hit.post, &query));
        assert_eq!(hit.score, score(hit.post, &query));
    }
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score, "hits out of order");
    }
});
