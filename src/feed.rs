// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Feed listing: the non-search way of browsing posts.
//!
//! The feed, profile and bookmark pages all show a filtered, dated list of
//! posts with a quick substring filter on top. None of that goes through the
//! fuzzy search engine: tag filters here are exact, and the quick filter is
//! a plain lower-cased substring test.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Post;

/// Which posts a feed shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// Only posts carrying exactly this tag (case-sensitive).
    pub tag: Option<String>,
    /// Only posts by this author id.
    pub author: Option<String>,
    /// Only posts whose id is in this set.
    pub bookmarks: Option<HashSet<String>>,
    /// Quick filter: substring of title, content or any tag, ignoring case.
    pub text: Option<String>,
}

impl FeedFilter {
    /// Does `post` pass every active filter?
    pub fn accepts(&self, post: &Post) -> bool {
        if let Some(tag) = &self.tag {
            if !post.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if &post.author_id != author {
                return false;
            }
        }
        if let Some(bookmarks) = &self.bookmarks {
            if !bookmarks.contains(&post.id) {
                return false;
            }
        }
        match self.text.as_deref().map(|t| t.trim().to_lowercase()) {
            Some(needle) if !needle.is_empty() => quick_match(post, &needle),
            _ => true,
        }
    }
}

/// Lower-cased `needle` in title, content or any tag.
fn quick_match(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
        || post.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Feed sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedOrder {
    #[default]
    Newest,
    Oldest,
    Random,
}

impl FromStr for FeedOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" | "new" => Ok(FeedOrder::Newest),
            "oldest" | "old" => Ok(FeedOrder::Oldest),
            "random" => Ok(FeedOrder::Random),
            other => Err(format!("unknown feed order '{}' (expected newest, oldest or random)", other)),
        }
    }
}

/// Filtered and ordered posts for a feed page.
pub fn feed<'a>(posts: &'a [Post], filter: &FeedFilter, order: FeedOrder) -> Vec<&'a Post> {
    feed_with_rng(posts, filter, order, &mut rand::thread_rng())
}

/// [`feed`] with a caller-supplied random source for [`FeedOrder::Random`].
pub fn feed_with_rng<'a, R: Rng + ?Sized>(
    posts: &'a [Post],
    filter: &FeedFilter,
    order: FeedOrder,
    rng: &mut R,
) -> Vec<&'a Post> {
    let mut selected: Vec<&Post> = posts.iter().filter(|p| filter.accepts(p)).collect();
    match order {
        FeedOrder::Newest => {
            selected.sort_by_cached_key(|p| std::cmp::Reverse(p.published_at()));
        }
        FeedOrder::Oldest => {
            // Unparseable dates still go last
            selected.sort_by_cached_key(|p| {
                let date = p.published_at();
                (date.is_none(), date)
            });
        }
        FeedOrder::Random => selected.shuffle(rng),
    }
    selected
}

/// Tag usage across `posts`, most used first, at most `limit` entries.
///
/// Ties keep the order in which tags were first seen.
pub fn tag_counts(posts: &[Post], limit: usize) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        let count = counts.entry(tag.as_str()).or_insert_with(|| {
            order.push(tag.as_str());
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|tag| (tag.to_string(), counts[tag]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
