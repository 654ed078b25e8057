//! Formatting utilities for terminal output

use crate::engine::Tries;

/// Create a bar with one filled cell per try left
#[must_use]
pub fn tries_bar(tries: Tries) -> String {
    let filled = tries.remaining().min(tries.max()) as usize;
    let empty = tries.max() as usize - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// English ordinal for a try number: 1st, 2nd, 3rd, 4th, ..., 11th, 21st
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// ASCII gallows with one body part per wrong guess (0-6)
#[must_use]
pub fn gallows(wrong_guesses: u32) -> [String; 6] {
    let part = |index: u32, drawn: &'static str| {
        if wrong_guesses > index { drawn } else { " " }
    };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  |   {}", part(0, "O")),
        format!("  |  {}{}{}", part(2, "/"), part(1, "|"), part(3, "\\")),
        format!("  |  {} {}", part(4, "/"), part(5, "\\")),
        "=========".to_string(),
    ]
}
