// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: deciding which posts match, then putting them in order.
//!
//! `matcher` is the yes/no filter for one post. `session` runs a whole query
//! over a post collection: parse, filter, score, rank.

mod matcher;
mod session;

pub use matcher::*;
pub use session::*;
