//! Display functions for the console game

use super::formatters::{ordinal, tries_bar};
use crate::engine::{GuessOutcome, GuessOutcomeKind, MatchSnapshot};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_banner<W: Write>(out: &mut W, player: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "HANGMAN".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nGame started! Good luck, {}.",
        player.bright_yellow()
    )
}

/// Print the hint, the masked word and the tries left
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_match_state<W: Write>(out: &mut W, snapshot: &MatchSnapshot) -> io::Result<()> {
    writeln!(out, "\n  The hint is: {}", snapshot.hint.bright_white())?;
    writeln!(
        out,
        "\n    {}\n",
        snapshot.masked_word.to_string().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "  Tries left: [{}] {}/{}",
        tries_bar(snapshot.tries).red(),
        snapshot.tries.remaining(),
        snapshot.tries.max()
    )
}

/// Prompt for the next guess, naming the try number
///
/// # Errors
/// Returns any error from writing to or flushing `out`.
pub fn print_guess_prompt<W: Write>(out: &mut W, snapshot: &MatchSnapshot) -> io::Result<()> {
    write!(
        out,
        "Enter your {} guess: ",
        ordinal(snapshot.tries.current())
    )?;
    out.flush()
}

/// Print the message for a guess, colored by what it did
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(out: &mut W, outcome: &GuessOutcome) -> io::Result<()> {
    let message = outcome.message();
    let styled = match outcome.kind() {
        GuessOutcomeKind::Won => format!("🎉 {message}").green().bold(),
        GuessOutcomeKind::Lost => format!("💀 {message}").red().bold(),
        GuessOutcomeKind::CorrectLetter => message.green(),
        GuessOutcomeKind::WrongLetter => message.yellow(),
        GuessOutcomeKind::AlreadyGuessed | GuessOutcomeKind::Invalid => message.bright_black(),
    };
    writeln!(out, "\n{styled}")
}

/// Print the running total and the last finished match's points
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_score_board<W: Write>(out: &mut W, total: u32, last_match: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "  Total points:          {}",
        total.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "  Previous match points: {last_match}")?;
    writeln!(out, "{}", "─".repeat(40).cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchEngine;
    use crate::lexicon::LexiconEntry;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn match_state_shows_hint_and_mask() {
        let entry = LexiconEntry::new("bahia", "Axé - carnaval").unwrap();
        let engine = MatchEngine::new(entry);
        let text = render(|out| print_match_state(out, &engine.snapshot()));

        assert!(text.contains("The hint is: Axé - carnaval"));
        assert!(text.contains("_ _ _ _ _"));
        assert!(text.contains("6/6"));
    }

    #[test]
    fn prompt_names_the_try() {
        let mut engine = MatchEngine::new(LexiconEntry::new("bahia", "h").unwrap());
        engine.evaluate("z").unwrap();
        let text = render(|out| print_guess_prompt(out, &engine.snapshot()));
        assert_eq!(text, "Enter your 2nd guess: ");
    }

    #[test]
    fn score_board_lists_both_totals() {
        let text = render(|out| print_score_board(out, 270, 110));
        assert!(text.contains("Total points:          270"));
        assert!(text.contains("Previous match points: 110"));
    }
}
