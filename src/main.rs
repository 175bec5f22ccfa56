// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blognote::{feed, parse_query, search_parsed, tag_counts, BlogStore, FeedFilter, FeedOrder};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "blognote=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            query,
            data,
            limit,
            author,
            json,
        } => run_search(&data.data, &query, limit, author.as_deref(), json),
        Commands::Feed {
            data,
            tag,
            author,
            bookmarks,
            filter,
            order,
            limit,
            json,
        } => {
            let store = open_store(&data.data)?;
            let filter = FeedFilter {
                tag,
                author,
                bookmarks: bookmarks.then(|| store.bookmark_ids()),
                text: filter,
            };
            run_feed(&store, &filter, order, limit, json)
        }
        Commands::Tags { data, limit } => {
            let store = open_store(&data.data)?;
            display::print_tags(&tag_counts(store.posts(), limit));
            Ok(())
        }
    }
}

fn open_store(dir: &Path) -> Result<BlogStore> {
    let store = BlogStore::open(dir)
        .with_context(|| format!("cannot load blog from {}", dir.display()))?;
    info!(posts = store.posts().len(), users = store.users().len(), "store ready");
    Ok(store)
}

fn run_search(dir: &Path, raw: &str, limit: usize, author: Option<&str>, json: bool) -> Result<()> {
    let query = parse_query(raw);
    if query.is_empty() {
        if json {
            println!("[]");
        } else {
            display::print_query_hint();
        }
        return Ok(());
    }

    let store = open_store(dir)?;
    let mut hits = search_parsed(store.posts(), &query);
    if let Some(author) = author {
        hits.retain(|hit| hit.post.author_id == author);
    }
    let total = hits.len();
    hits.truncate(limit);
    debug!(total, shown = hits.len(), "search results");

    if json {
        return write_json(&hits);
    }

    println!("{}", display::found_line(total));
    println!();
    let now = Utc::now();
    for hit in &hits {
        display::print_post(hit.post, store.author_of(hit.post), Some(hit.score), now);
    }
    if total > hits.len() {
        println!("… и ещё {}", blognote::count_posts(total - hits.len()));
    }
    Ok(())
}

fn run_feed(store: &BlogStore, filter: &FeedFilter, order: FeedOrder, limit: usize, json: bool) -> Result<()> {
    let mut posts = feed(store.posts(), filter, order);
    let total = posts.len();
    posts.truncate(limit);

    if json {
        return write_json(&posts);
    }

    if posts.is_empty() {
        println!("Постов пока нет");
        return Ok(());
    }
    let now = Utc::now();
    for post in &posts {
        display::print_post(post, store.author_of(post), None, now);
    }
    if total > posts.len() {
        println!("… и ещё {}", blognote::count_posts(total - posts.len()));
    }
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}
