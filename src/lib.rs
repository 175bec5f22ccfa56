// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Local full-text search over a folder-backed Blognote blog.
//!
//! A query mixes three kinds of terms: `"quoted phrases"` that must appear
//! verbatim, `#tags` matched against post tags, and plain words matched
//! fuzzily (typos, word forms, substrings). A post is a hit only when every
//! term matches; hits are then scored and ranked.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  query.rs   │────▶│  search/     │────▶│  scoring/   │────▶│  ranking    │
//! │(parse_query)│     │  (matches)   │     │  (score)    │     │  (rank)     │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │            fuzzy/               │
//!                     │  (fuzzy_match, distance,        │
//!                     │   levenshtein_within)           │
//!                     └─────────────────────────────────┘
//!                                    │
//!                                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │    utils.rs (normalize)         │
//!                     └─────────────────────────────────┘
//! ```
//!
//! Around the engine: [`store`] loads a data folder, [`feed`] lists posts the
//! non-search way, [`format`] has the text helpers the CLI prints with.
//!
//! # Usage
//!
//! ```
//! use blognote::{search_posts, Post};
//!
//! let posts = vec![Post {
//!     id: "1".into(),
//!     title: "Основы программирования".into(),
//!     tags: vec!["rust".into()],
//!     date: "2024-01-01".into(),
//!     ..Default::default()
//! }];
//!
//! let hits = search_posts(&posts, "програмирование #rust");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].post.id, "1");
//! ```

// Module declarations
pub mod error;
pub mod feed;
pub mod fields;
pub mod format;
mod fuzzy;
mod query;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use error::StoreError;
pub use feed::{feed, feed_with_rng, tag_counts, FeedFilter, FeedOrder};
pub use format::{count_posts, excerpt, plural_ru, relative_date};
pub use fuzzy::{distance, fuzzy_match, fuzzy_match_in_text, levenshtein_within, typo_budget};
pub use query::parse_query;
pub use scoring::ranking::{compare_dates, rank};
pub use scoring::score;
pub use search::{matches, search_parsed, search_posts};
pub use store::BlogStore;
pub use types::{parse_date, ParsedQuery, Post, SearchHit, User};
pub use utils::normalize;
