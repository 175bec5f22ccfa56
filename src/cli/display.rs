// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the blognote CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and turns colors off when stdout is not a TTY, so piping into `grep` or a
//! file gives plain text.
//!
//! # Theme detection order
//!
//! 1. `BLOGNOTE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use blognote::{count_posts, excerpt, relative_date, Post, User};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("BLOGNOTE_THEME").ok().and_then(|v| parse_theme(&v)) {
        return theme;
    }

    // COLORFGBG is "fg;bg"; xterm and rxvt set it
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(theme) = theme_from_colorfgbg(&colorfgbg) {
            return theme;
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background 0-6 and 8 are dark; 7 and 9-15 are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    if use_colors() {
        println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
    } else {
        println!("│{}{}│", content, " ".repeat(pad));
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    if use_colors() {
        let border = GRAY();
        println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
    } else {
        println!("┌{}{}┐", label_part, "─".repeat(remaining));
    }
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    if use_colors() {
        println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
    } else {
        println!("└{}┘", "─".repeat(BOX_WIDTH));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance score
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    let color: fn() -> String = if score >= 15 {
        BRIGHT_GREEN
    } else if score >= 7 {
        GREEN
    } else if score >= 3 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[BOLD], &text)
}

/// `#tag #other` in the tag color
pub fn tag_list(tags: &[String]) -> String {
    let joined = tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ");
    themed(MAGENTA, &[], &joined)
}

/// Author name, falling back to the stored id for unknown authors.
pub fn author_label(post: &Post, author: Option<&User>) -> String {
    let name = match author {
        Some(user) if !user.name.trim().is_empty() => user.name.as_str(),
        _ => post.author_id.as_str(),
    };
    themed(BLUE, &[], name)
}

/// Print one post: title line, meta line, excerpt, tags.
///
/// `score` is shown for search hits and left out for feeds.
pub fn print_post(post: &Post, author: Option<&User>, score: Option<u32>, now: DateTime<Utc>) {
    let title = if post.title.trim().is_empty() {
        "(без названия)".to_string()
    } else {
        truncate(post.title.trim(), BOX_WIDTH - 8)
    };
    let title = themed(CYAN, &[BOLD], &title);
    match score {
        Some(score) => println!("{} {}", score_value(score), title),
        None => println!("{}", title),
    }

    let date = relative_date(&post.date, now);
    println!(
        "     {} · {} · {} {}",
        author_label(post, author),
        themed(GRAY, &[], &date),
        themed(GRAY, &[DIM], "👁"),
        post.views
    );

    let text = excerpt(post).replace('\n', " ");
    println!("     {}", truncate(&text, BOX_WIDTH));
    if !post.tags.is_empty() {
        println!("     {}", tag_list(&post.tags));
    }
    println!();
}

/// `Найдено: N постов`
pub fn found_line(n: usize) -> String {
    format!("Найдено: {}", themed(GREEN, &[BOLD], &count_posts(n)))
}

/// Printed when a query parses to nothing.
pub fn print_query_hint() {
    println!("{}", themed(YELLOW, &[BOLD], "Пустой запрос"));
    println!("  {}  точная фраза", themed(CYAN, &[], "\"текст в кавычках\""));
    println!("  {}               фильтр по тегу", themed(MAGENTA, &[], "#тег"));
    println!("  {}          нечёткий поиск по словам", themed(GRAY, &[], "любые слова"));
}

/// Popular tags as a boxed table with bars.
pub fn print_tags(counts: &[(String, usize)]) {
    section_top("Популярные теги");
    let Some(max) = counts.iter().map(|(_, n)| *n).max() else {
        row(" нет тегов");
        section_bot();
        return;
    };
    let name_width = counts
        .iter()
        .map(|(tag, _)| tag.chars().count() + 1)
        .max()
        .unwrap_or(0)
        .min(30);
    let bar_width = BOX_WIDTH.saturating_sub(name_width + 20);
    for (tag, n) in counts {
        let name = truncate(&format!("#{}", tag), name_width);
        let pad = name_width.saturating_sub(name.chars().count());
        let filled = (n * bar_width).div_ceil(max);
        let line = format!(
            " {}{} {} {}",
            themed(MAGENTA, &[], &name),
            " ".repeat(pad),
            themed(GREEN, &[], &"█".repeat(filled)),
            themed(GRAY, &[], &count_posts(*n))
        );
        row(&line);
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
