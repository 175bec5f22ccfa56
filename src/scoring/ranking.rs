// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order:
//! 1. **Score** - higher wins
//! 2. **Date** - newer wins; a post whose date does not parse sorts after
//!    every post whose date does
//! 3. **Input order** - the sort is stable, so posts equal on both keys keep
//!    the order the store had them in

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::types::SearchHit;

/// Newest first. `None` (unparseable date) sorts last.
pub fn compare_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort hits into display order, in place.
///
/// Dates are parsed once per hit rather than once per comparison.
pub fn rank(hits: &mut [SearchHit<'_>]) {
    hits.sort_by_cached_key(|hit| (std::cmp::Reverse(hit.score), DateKey(hit.post.published_at())));
}

/// Sort key wrapper giving [`compare_dates`] order.
#[derive(PartialEq, Eq)]
struct DateKey(Option<DateTime<Utc>>);

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_dates(self.0, other.0)
    }
}
