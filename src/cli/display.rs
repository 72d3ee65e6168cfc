// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for `shakesearch search`.
//!
//! Snippets arrive with `<b>…</b>` markup meant for a browser. On a terminal
//! the markup becomes bold accent color; piped output gets the matches in
//! `*stars*` instead so it stays greppable. Respects `NO_COLOR` and non-TTY
//! detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `SHAKESEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use shakesearch::search::snippet::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use shakesearch::SearchResult;
use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHAKESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; colors 0-6 are typically dark, 7+ light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Accent used for highlighted matches
fn accent() -> String {
    match theme() {
        Theme::Dark => rgb((229, 192, 123)),  // #e5c07b
        Theme::Light => rgb((193, 132, 1)),   // #c18401
    }
}

/// Muted color for metadata lines
fn muted() -> String {
    match theme() {
        Theme::Dark => rgb((92, 99, 112)),    // #5c6370
        Theme::Light => rgb((160, 161, 167)), // #a0a1a7
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Replace highlight markup with terminal styling.
pub fn render_snippet(snippet: &str, colors: bool) -> String {
    let (open, close) = if colors {
        (format!("{}{}", BOLD, accent()), RESET.to_string())
    } else {
        ("*".to_string(), "*".to_string())
    };
    snippet
        .replace(HIGHLIGHT_OPEN, &open)
        .replace(HIGHLIGHT_CLOSE, &close)
        .replace(|c: char| c == '\r' || c == '\n', " ")
}

fn meta(text: &str, colors: bool) -> String {
    if colors {
        format!("{}{}{}", muted(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Print a search result: summary line, corrections, then numbered snippets.
pub fn print_results(query: &str, result: &SearchResult, limit: usize) {
    let colors = use_colors();

    let summary = format!(
        "{} result{} for \"{}\" in {:?}",
        result.snippets.len(),
        if result.snippets.len() == 1 { "" } else { "s" },
        query,
        result.elapsed
    );
    println!("{}", meta(&summary, colors));

    for (original, corrected) in &result.replaced {
        let line = format!("  corrected \"{}\" → \"{}\"", original, corrected);
        println!("{}", meta(&line, colors));
    }

    for (i, snippet) in result.snippets.iter().take(limit).enumerate() {
        println!();
        println!("{:>3}. {}", i + 1, render_snippet(snippet, colors));
    }

    if result.snippets.len() > limit {
        println!();
        let more = format!("  … {} more (raise --limit)", result.snippets.len() - limit);
        println!("{}{}", if colors { DIM } else { "" }, meta(&more, colors));
    }
}
