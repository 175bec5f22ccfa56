// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns one (post, query) pair into an additive integer score.
//! `ranking` sorts scored posts: score first, newest first on ties.

mod core;
pub mod ranking;

pub use self::core::*;
