// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records search works over, and the query it works with.
//!
//! `Post` and `User` mirror the JSON files in a Blognote data folder
//! (`posts.json`, `users.json`). Search never mutates them. `ParsedQuery` is
//! built fresh for every search call and dropped afterwards.
//!
//! # Invariants
//!
//! - **Post**: absent or `null` tags deserialize to an empty list. Nothing
//!   downstream has to guard against a missing tag array.
//!
//! - **ParsedQuery**: every term is lower-cased and non-empty, and a fragment
//!   consumed as a phrase or tag never shows up again as a fuzzy term.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// STORED RECORDS
// =============================================================================

/// A blog post as stored in `posts.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub title: String,
    /// Hand-written summary. Falls back to the start of `content` for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// ISO-8601 timestamp. Only used for ordering.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
}

impl Post {
    /// Publication time, if `date` parses.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }

    /// Lower-cased tags, in stored order.
    pub fn lowercase_tags(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.to_lowercase()).collect()
    }
}

/// An author as stored in `users.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Path of the avatar image, relative to the data folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a stored post date.
///
/// Accepts RFC 3339 (what the editor writes via `toISOString()`), ISO-8601
/// date-times without an offset, and bare `YYYY-MM-DD` dates. Anything
/// without an offset is read as UTC; bare dates as midnight.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

// =============================================================================
// QUERY
// =============================================================================

/// A raw query string broken into its three kinds of terms.
///
/// All three lists behave as sets: lower-cased, non-empty, no duplicates,
/// first-seen order kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// Quoted fragments that must appear verbatim in title or content.
    pub exact_phrases: Vec<String>,
    /// `#tag` fragments, without the `#`.
    pub tag_terms: Vec<String>,
    /// Everything else, one entry per whitespace-separated word.
    pub fuzzy_terms: Vec<String>,
}

impl ParsedQuery {
    /// True when no category has a term. Such a query matches every post,
    /// but callers treat it as "nothing searched".
    pub fn is_empty(&self) -> bool {
        self.exact_phrases.is_empty() && self.tag_terms.is_empty() && self.fuzzy_terms.is_empty()
    }

    /// Total number of terms across all categories.
    pub fn term_count(&self) -> usize {
        self.exact_phrases.len() + self.tag_terms.len() + self.fuzzy_terms.len()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub post: &'a Post,
    pub score: u32,
}
