//! Formatting utilities for terminal output

use crate::core::{Feedback, Status, Word};
use colored::{ColoredString, Colorize};

/// Width of one big tile
const TILE_WIDTH: usize = 5;

/// Color `text` the way a tile with `status` looks
#[must_use]
pub fn paint(text: &str, status: Status) -> ColoredString {
    match status {
        Status::Unknown => text.normal(),
        Status::NotPresent => text.white().on_black(),
        Status::Present => text.black().on_yellow(),
        Status::Placed => text.black().on_green(),
    }
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// One colored cell per letter, e.g. ` S  A  L  E  T `
#[must_use]
pub fn inline_tiles(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| {
            paint(&format!(" {} ", letter.to_ascii_uppercase()), status).to_string()
        })
        .collect()
}

/// Rows of one big tile: blank, centered letter, blank
#[must_use]
pub fn tile_rows(letter: char) -> [String; 3] {
    let blank = " ".repeat(TILE_WIDTH);
    let pad = (TILE_WIDTH - 1) / 2;
    let middle = format!(
        "{}{}{}",
        " ".repeat(TILE_WIDTH - 1 - pad),
        letter.to_ascii_uppercase(),
        " ".repeat(pad)
    );
    [blank.clone(), middle, blank]
}

/// Numbered history line: `(1)  S  A  L  E  T `
#[must_use]
pub fn record_line(turn: usize, max_turns: usize, guess: &Word, feedback: &Feedback) -> String {
    let width = max_turns.to_string().len() + " () ".len();
    let number = format!("({}) ", turn + 1);
    format!(
        "{}{}",
        format!("{number:>width$}").dimmed(),
        inline_tiles(guess, feedback)
    )
}

/// Marker row under big tiles pointing at the selected letter
#[must_use]
pub fn cursor_line(cursor: usize, letters: usize) -> String {
    let mut line = " ".repeat(cursor * TILE_WIDTH);
    line.push_str(&"^".repeat(TILE_WIDTH));
    line.push_str(&" ".repeat(letters.saturating_sub(cursor + 1) * TILE_WIDTH));
    line
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
