// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers for showing posts to a person: plural forms, relative dates,
//! excerpts. Pure functions; terminal styling lives in the binary.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;

use crate::types::{parse_date, Post};

/// Characters of content used when a post has no stored excerpt.
pub const EXCERPT_CHARS: usize = 120;

const MONTHS_RU: [&str; 12] = [
    "янв", "фев", "мар", "апр", "мая", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

/// Markdown image: `![alt](path)`.
static MEDIA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap());

/// Pick the Russian plural form for `n`.
///
/// ```
/// use blognote::plural_ru;
/// assert_eq!(plural_ru(1, "пост", "поста", "постов"), "пост");
/// assert_eq!(plural_ru(3, "пост", "поста", "постов"), "поста");
/// assert_eq!(plural_ru(12, "пост", "поста", "постов"), "постов");
/// ```
pub fn plural_ru<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n = n % 100;
    if (11..=19).contains(&n) {
        return many;
    }
    match n % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

/// `"N постов"` style count.
pub fn count_posts(n: usize) -> String {
    format!("{} {}", n, plural_ru(n as u64, "пост", "поста", "постов"))
}

/// Human date for a stored post date, relative to `now` when recent.
pub fn relative_date(date: &str, now: DateTime<Utc>) -> String {
    let Some(at) = parse_date(date) else {
        return date.to_string();
    };
    let elapsed = now.signed_duration_since(at);
    if elapsed.num_seconds() < 0 {
        return absolute_date(at);
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if minutes < 1 {
        "только что".to_string()
    } else if minutes < 60 {
        format!("{} мин назад", minutes)
    } else if hours < 24 {
        format!("{} ч назад", hours)
    } else if days < 7 {
        format!("{} д назад", days)
    } else {
        absolute_date(at)
    }
}

fn absolute_date(at: DateTime<Utc>) -> String {
    format!("{} {} {}", at.day(), MONTHS_RU[at.month0() as usize], at.year())
}

/// Short text shown under a post title.
///
/// The stored excerpt wins when it is not blank. Otherwise the first
/// [`EXCERPT_CHARS`] characters of content, with images stripped, plus `...`.
pub fn excerpt(post: &Post) -> String {
    if let Some(stored) = post.excerpt.as_deref().map(str::trim) {
        if !stored.is_empty() {
            return stored.to_string();
        }
    }
    let text = MEDIA.replace_all(&post.content, "");
    let head: String = text.trim().chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head.trim_end())
}
