// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the blognote command-line interface.
//!
//! Three subcommands over one data folder: `search` runs the fuzzy search
//! engine, `feed` lists posts the way the feed, profile and bookmark pages
//! do, and `tags` shows the most used tags.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use blognote::FeedOrder;

#[derive(Parser)]
#[command(
    name = "blognote",
    about = "Search and browse a folder-backed Blognote blog",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the blog lives.
#[derive(Args, Clone, Debug)]
pub struct DataArgs {
    /// Data folder containing posts.json, users.json and bookmarks.json
    ///
    /// Defaults to the current directory.
    #[arg(short, long, env = "BLOGNOTE_DIR", default_value = ".")]
    pub data: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search posts: "exact phrase", #tag and fuzzy words
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        data: DataArgs,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only posts by this author id
        #[arg(long)]
        author: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List posts, newest first unless told otherwise
    Feed {
        #[command(flatten)]
        data: DataArgs,

        /// Only posts with exactly this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only posts by this author id
        #[arg(long)]
        author: Option<String>,

        /// Only bookmarked posts
        #[arg(long)]
        bookmarks: bool,

        /// Quick filter: substring of title, content or tags
        #[arg(short, long)]
        filter: Option<String>,

        /// newest, oldest or random
        #[arg(short, long, default_value = "newest")]
        order: FeedOrder,

        /// Maximum number of posts to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Most used tags with post counts
    Tags {
        #[command(flatten)]
        data: DataArgs,

        /// Maximum number of tags to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}
