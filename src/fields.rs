// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lower-cased view of the searchable parts of a post.
//!
//! Matching and scoring both compare query terms against lower-cased title,
//! content and tags. Building the view once per post lets the search session
//! feed the same strings to both without lower-casing twice.

use crate::types::Post;

/// Title, content and tags of one post, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl PostText {
    pub fn new(post: &Post) -> Self {
        Self {
            title: post.title.to_lowercase(),
            content: post.content.to_lowercase(),
            tags: post.lowercase_tags(),
        }
    }
}

impl From<&Post> for PostText {
    fn from(post: &Post) -> Self {
        Self::new(post)
    }
}
