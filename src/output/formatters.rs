//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};
use colored::{Color, Colorize};

/// Terminal colour for each symbol value, cycled for wide ranges
const SYMBOL_COLORS: [Color; 10] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
];

/// Colour assigned to a symbol value
#[must_use]
pub const fn symbol_color(value: u8) -> Color {
    SYMBOL_COLORS[value as usize % SYMBOL_COLORS.len()]
}

/// Format a code with one colour per symbol
///
/// Uses the same packing as `Code`'s `Display`: digits run together when
/// every value is a single digit, otherwise they are space separated.
#[must_use]
pub fn colored_code(code: &Code) -> String {
    let separator = if code.values().iter().all(|&v| v < 10) {
        ""
    } else {
        " "
    };

    code.values()
        .iter()
        .map(|&v| v.to_string().color(symbol_color(v)).bold().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Format feedback as key pegs: `●` exact in green, `○` partial in yellow
#[must_use]
pub fn colored_pegs(feedback: Feedback, code_length: usize) -> String {
    let exact = usize::from(feedback.exact_matches());
    let partial = usize::from(feedback.partial_matches());
    let empty = code_length.saturating_sub(exact + partial);

    format!(
        "{}{}{}",
        "●".repeat(exact).green(),
        "○".repeat(partial).yellow(),
        "·".repeat(empty).bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
