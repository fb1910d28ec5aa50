//! Formatting utilities for terminal output
//!
//! Everything here returns plain text; colour is applied in `display`.

use crate::core::{Misplaced, Placement};
use crate::solver::ScoredWord;

/// Inner width of a report panel, in characters
pub const PANEL_WIDTH: usize = 104;

/// Gap between clue entries on one line
const CLUE_GAP: &str = "    ";

/// `B = 1    R = 3`
#[must_use]
pub fn format_greens(greens: &[Placement]) -> String {
    greens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(CLUE_GAP)
}

/// `D != [2, 5]    S != [1]`
#[must_use]
pub fn format_yellows(yellows: &[Misplaced]) -> String {
    yellows
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(CLUE_GAP)
}

/// `Z, V, Q, N`
#[must_use]
pub fn format_greys(greys: &[u8]) -> String {
    greys
        .iter()
        .map(|&g| (g as char).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `WORD - score` line per entry
#[must_use]
pub fn format_scored(words: &[ScoredWord]) -> Vec<String> {
    words
        .iter()
        .map(|s| format!("{} - {}", s.word, s.score))
        .collect()
}

/// `╭─ Title ──────╮` spanning `width` inner characters
#[must_use]
pub fn top_border(title: &str, width: usize) -> String {
    let label = format!("─ {title} ");
    let fill = (width + 2).saturating_sub(label.chars().count());
    format!("╭{label}{}╮", "─".repeat(fill))
}

/// `╰──────╯` spanning `width` inner characters
#[must_use]
pub fn bottom_border(width: usize) -> String {
    format!("╰{}╯", "─".repeat(width + 2))
}

/// Right-pad `text` with spaces to `width` characters
#[must_use]
pub fn pad_line(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

/// Break `text` into lines of at most `width` characters
///
/// Breaks fall on spaces where possible; a single run longer than `width` is
/// split mid-run. Always returns at least one line.
#[must_use]
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for piece in text.split_inclusive(' ') {
        if !current.is_empty()
            && current.chars().count() + piece.trim_end().chars().count() > width
        {
            lines.push(current.trim_end().to_string());
            current.clear();
        }

        let mut piece = if current.is_empty() {
            piece.trim_start()
        } else {
            piece
        };
        while piece.trim_end().chars().count() > width {
            let split = piece.char_indices().nth(width).map_or(piece.len(), |(i, _)| i);
            lines.push(piece[..split].to_string());
            piece = &piece[split..];
        }
        current.push_str(piece);
    }

    if !current.trim_end().is_empty() {
        lines.push(current.trim_end().to_string());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Create a bar proportional to `value / max`
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (f64::from(value) / f64::from(max) * width as f64) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
