//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Post, User};

/// Create a post with the fields search looks at.
///
/// This is the canonical implementation used across all tests.
pub fn make_post(id: &str, title: &str, content: &str, tags: &[&str]) -> Post {
    Post {
        id: id.to_string(),
        author_id: "user_1".to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: "2024-01-01T00:00:00.000Z".to_string(),
        ..Default::default()
    }
}

/// Create an otherwise empty post with a given date.
pub fn make_dated_post(id: &str, date: &str) -> Post {
    Post {
        id: id.to_string(),
        date: date.to_string(),
        ..Default::default()
    }
}

/// Create a post by a given author.
pub fn make_authored_post(id: &str, author_id: &str, date: &str, tags: &[&str]) -> Post {
    Post {
        id: id.to_string(),
        author_id: author_id.to_string(),
        title: format!("Post {}", id),
        content: format!("Content of {}", id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: date.to_string(),
        ..Default::default()
    }
}

/// Create a user with just an id and a name.
pub fn make_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}
