// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance, plus cheaper checks first.
//!
//! `levenshtein` has the raw distance and a bounded variant with early exits.
//! `matcher` layers containment and stem checks on top of it and answers the
//! only question search asks: do these two words count as the same word?

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
