//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI: guess until the match accepts the input, then
//! offer a menu. While the match is running the menu is continue / restart / quit;
//! once it is won or lost it is score / restart / quit.

use crate::engine::MatchOutcome;
use crate::output::{
    print_banner, print_guess_prompt, print_match_state, print_outcome, print_score_board,
};
use crate::session::GameSession;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// A menu answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Continue,
    Score,
    Restart,
    Quit,
}

impl MenuChoice {
    /// Menu shown while the match is running: anything except 2 or 3 continues
    #[must_use]
    pub fn from_playing_menu(input: &str) -> Self {
        match input.trim() {
            "2" => Self::Restart,
            "3" => Self::Quit,
            _ => Self::Continue,
        }
    }

    /// Menu shown after the match ended; `None` means ask again
    #[must_use]
    pub fn from_end_menu(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Score),
            "2" => Some(Self::Restart),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the game loop on any input/output pair
///
/// End of input is treated like choosing to quit.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the session rejects a guess.
pub fn play<R: Rng, I: BufRead, O: Write>(
    session: &mut GameSession<R>,
    input: &mut I,
    out: &mut O,
) -> Result<()> {
    let player = session.player().name().to_string();
    print_banner(out, &player)?;
    session.start();

    'game: loop {
        // Guess until the input is accepted
        loop {
            let Some(snapshot) = session.snapshot() else {
                break 'game;
            };
            print_match_state(out, &snapshot)?;
            print_guess_prompt(out, &snapshot)?;

            let Some(guess) = read_line(input)? else {
                break 'game;
            };

            let report = session.submit_guess(&guess)?;
            print_outcome(out, &report.outcome)?;
            if report.outcome.can_continue() {
                break;
            }
        }

        let still_playing = session
            .snapshot()
            .is_some_and(|s| s.outcome == MatchOutcome::InProgress);

        let choice = if still_playing {
            playing_menu(input, out)?
        } else {
            end_menu(session, input, out)?
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Continue | MenuChoice::Score => {}
            MenuChoice::Restart => {
                session.reset();
                writeln!(out, "\n🔄 New match started!")?;
            }
            MenuChoice::Quit => break,
        }
    }

    writeln!(out, "\nClosing game... 👋")?;
    Ok(())
}

fn playing_menu<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<MenuChoice> {
    writeln!(out, "\n  Choose an option:\n")?;
    writeln!(out, "  1 - Continue")?;
    writeln!(out, "  2 - Restart game")?;
    writeln!(out, "  3 - Quit game")?;
    out.flush()?;

    Ok(read_line(input)?.map_or(MenuChoice::Quit, |line| {
        MenuChoice::from_playing_menu(&line)
    }))
}

fn end_menu<R: Rng, I: BufRead, O: Write>(
    session: &GameSession<R>,
    input: &mut I,
    out: &mut O,
) -> Result<MenuChoice> {
    loop {
        writeln!(out, "\n  Choose an option:\n")?;
        writeln!(out, "  1 - Score")?;
        writeln!(out, "  2 - Restart game")?;
        writeln!(out, "  3 - Quit game")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(MenuChoice::Quit);
        };

        match MenuChoice::from_end_menu(&line) {
            Some(MenuChoice::Score) => print_score_board(
                out,
                session.current_player_total_points(),
                session.last_match_score(),
            )?,
            Some(choice) => return Ok(choice),
            None => {}
        }
    }
}

/// Read one line without its line ending; `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
