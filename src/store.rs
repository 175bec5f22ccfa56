// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to a Blognote data folder.
//!
//! ```text
//! <data>/
//! ├── posts.json      [Post, ...]
//! ├── users.json      [User, ...]
//! └── bookmarks.json  ["post id", ...]
//! ```
//!
//! A missing file is an empty collection, the same as a fresh folder the app
//! has not written to yet. A file that exists but does not parse is an error:
//! silently showing an empty blog would hide a corrupted folder.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::types::{Post, User};

pub const POSTS_FILE: &str = "posts.json";
pub const USERS_FILE: &str = "users.json";
pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Everything loaded from one data folder.
#[derive(Debug, Clone, Default)]
pub struct BlogStore {
    root: PathBuf,
    posts: Vec<Post>,
    users: Vec<User>,
    bookmarks: Vec<String>,
}

impl BlogStore {
    /// Load all three files from `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        let meta = fs::metadata(&root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::MissingFolder(root.clone()),
            _ => StoreError::Io {
                path: root.clone(),
                source: e,
            },
        })?;
        if !meta.is_dir() {
            return Err(StoreError::NotADirectory(root));
        }

        let posts: Vec<Post> = read_collection(&root.join(POSTS_FILE))?;
        let users: Vec<User> = read_collection(&root.join(USERS_FILE))?;
        let bookmarks: Vec<String> = read_collection(&root.join(BOOKMARKS_FILE))?;

        debug!(
            root = %root.display(),
            posts = posts.len(),
            users = users.len(),
            bookmarks = bookmarks.len(),
            "loaded data folder"
        );

        for post in posts.iter().filter(|p| p.published_at().is_none()) {
            warn!(id = %post.id, date = %post.date, "post date does not parse; it will sort last");
        }

        Ok(Self {
            root,
            posts,
            users,
            bookmarks,
        })
    }

    /// Build a store from in-memory collections.
    pub fn from_parts(posts: Vec<Post>, users: Vec<User>, bookmarks: Vec<String>) -> Self {
        Self {
            root: PathBuf::new(),
            posts,
            users,
            bookmarks,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn bookmark_ids(&self) -> HashSet<String> {
        self.bookmarks.iter().cloned().collect()
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn author_of(&self, post: &Post) -> Option<&User> {
        self.user(&post.author_id)
    }

    /// Posts by `author_id`, in store order.
    pub fn posts_by(&self, author_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.author_id == author_id).collect()
    }

    /// Bookmarked posts, in store order. Bookmarks pointing at deleted posts
    /// are skipped.
    pub fn bookmarked_posts(&self) -> Vec<&Post> {
        let ids = self.bookmark_ids();
        self.posts.iter().filter(|p| ids.contains(&p.id)).collect()
    }
}

/// Read a JSON array from `path`. Missing file or `null` gives an empty list.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "file missing; treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let items: Option<Vec<T>> = serde_json::from_str(&raw).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(items.unwrap_or_default())
}
