// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the cvmatch CLI.
//!
//! OneDark colors for dark terminals, One Light for light ones. Detection
//! tries `CVMATCH_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR`, and non-TTY stdout gets plain text so output can be
//! piped.

use cvmatch::{MatchKind, MatchStats, RankedResult, SearchStats};
use std::sync::OnceLock;
use std::time::Duration;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

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
    if let Ok(theme) = std::env::var("CVMATCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is light
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

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

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
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

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

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences
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

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(pad), s)
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Milliseconds with precision that suits the magnitude.
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_secs_f64() * 1000.0;
    if ms < 1.0 {
        format!("{:.0}µs", ms * 1000.0)
    } else if ms < 100.0 {
        format!("{:.2}ms", ms)
    } else {
        format!("{:.0}ms", ms)
    }
}

/// `python×3, phython~×1`. Fuzzy keys are marked with `~`.
pub fn format_tally(result: &RankedResult) -> String {
    result
        .tally
        .iter()
        .map(|(key, entry)| {
            let marker = match entry.kind {
                MatchKind::Exact => "",
                MatchKind::Fuzzy => "~",
            };
            format!("{}{}×{}", key, marker, entry.count)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_results(results: &[RankedResult]) {
    section_top("RESULTS");
    if results.is_empty() {
        row(&themed(GRAY, &[], " no matching documents"));
    }
    for (rank, result) in results.iter().enumerate() {
        let line = format!(
            " {} {} {} {}",
            pad_left(&format!("{}.", rank + 1), 4),
            pad_right(&themed(MAGENTA, &[BOLD], &result.document_id.to_string()), 10),
            pad_left(&themed(GREEN, &[], &result.total.to_string()), 6),
            truncate_visible(&format_tally(result), BOX_WIDTH - 24),
        );
        row(&line);
    }
    section_bot();
}

pub fn print_stats(stats: &SearchStats) {
    section_top("STATS");
    row(&format!(
        " algorithm {:<12} terms {:<6} elapsed {}",
        stats.algorithm.display_name(),
        stats.terms,
        themed(YELLOW, &[], &format_duration(stats.elapsed))
    ));
    row(&format!(
        " scanned {:<6} skipped {:<6} failed {:<6} matched {}",
        stats.documents_scanned,
        stats.documents_skipped,
        stats.documents_failed,
        stats.documents_matched
    ));
    row(&format!(
        " exact hits {:<6} ({})   fuzzy hits {:<6} ({})",
        stats.exact_hits,
        format_duration(stats.exact_time),
        stats.fuzzy_hits,
        format_duration(stats.fuzzy_time)
    ));
    section_bot();
}

pub fn print_positions(pattern: &str, stats: &MatchStats) {
    section_top(&format!("{} · {:?}", stats.algorithm.display_name(), pattern));
    row(&format!(
        " {} matches in {} chars ({})",
        themed(GREEN, &[BOLD], &stats.total_matches().to_string()),
        stats.text_len,
        format_duration(stats.elapsed)
    ));
    if !stats.positions.is_empty() {
        let listed: Vec<String> = stats.positions.iter().map(ToString::to_string).collect();
        row(&format!(" at {}", truncate_visible(&listed.join(", "), BOX_WIDTH - 5)));
    }
    section_bot();
}
