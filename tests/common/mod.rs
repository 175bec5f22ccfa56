//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use blognote::{Post, SearchHit, User};
use tempfile::TempDir;

// Re-export canonical test utilities from blognote::testing
pub use blognote::testing::{make_authored_post, make_dated_post, make_post, make_user};

// ============================================================================
// CORPUS
// ============================================================================

/// A small mixed Russian/English blog.
///
/// Dates are distinct so ranking ties on score resolve deterministically.
pub fn blog_corpus() -> Vec<Post> {
    let mut posts = vec![
        make_post(
            "p1",
            "Основы программирования на Rust",
            "Владение и заимствование. Borrow checker следит за ссылками.",
            &["rust", "программирование"],
        ),
        make_post(
            "p2",
            "Поиск по блогу",
            "Нечёткий поиск прощает опечатки: search without exact spelling.",
            &["поиск"],
        ),
        make_post(
            "p3",
            "Рецепт борща",
            "Свёкла, капуста, картофель. Ничего про программирование.",
            &["еда", "рецепты"],
        ),
        make_post(
            "p4",
            "Hello world",
            "My first post. Say hello world to everyone.",
            &["news"],
        ),
        make_post("p5", "Ёжик в тумане", "Мультфильм про ёжика и лошадку.", &[]),
    ];
    let dates = [
        "2024-03-01T10:00:00.000Z",
        "2024-02-01T10:00:00.000Z",
        "2024-01-15T10:00:00.000Z",
        "2023-12-01T10:00:00.000Z",
        "2023-11-01T10:00:00.000Z",
    ];
    for (post, date) in posts.iter_mut().zip(dates) {
        post.date = date.to_string();
    }
    posts
}

/// Ids of hits, in rank order.
pub fn hit_ids(hits: &[SearchHit<'_>]) -> Vec<String> {
    hits.iter().map(|h| h.post.id.clone()).collect()
}

// ============================================================================
// DATA FOLDERS
// ============================================================================

/// Write a data folder with all three files into a fresh temp dir.
pub fn data_folder(posts: &[Post], users: &[User], bookmarks: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_json(dir.path(), "posts.json", &serde_json::to_string(posts).unwrap());
    write_json(dir.path(), "users.json", &serde_json::to_string(users).unwrap());
    write_json(dir.path(), "bookmarks.json", &serde_json::to_string(bookmarks).unwrap());
    dir
}

/// Write raw text to `dir/name`.
pub fn write_json(dir: &Path, name: &str, raw: &str) {
    fs::write(dir.join(name), raw).expect("Failed to write fixture file");
}
