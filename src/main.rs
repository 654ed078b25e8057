//! Hangman - CLI
//!
//! Word-guessing game with TUI and plain console modes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    lexicon::Lexicon,
    logging::{self, LogTarget},
    session::{GameSession, Player},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time, or all at once",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player name shown on the score board
    #[arg(short, long, global = true, default_value = "Player")]
    name: String,

    /// Seed for word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (menu-driven console game without TUI)
    Simple,
}

/// The TUI draws over the whole terminal, so only the console mode may log to stderr
const fn log_target(command: Commands) -> LogTarget {
    match command {
        Commands::Play => LogTarget::Discard,
        Commands::Simple => LogTarget::Stderr,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(cli.verbose, log_target(command));

    let lexicon = Lexicon::embedded()?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    debug!(entries = lexicon.len(), seed = ?cli.seed, "word pool loaded");

    let mut session = GameSession::new(lexicon, Player::new(cli.name), rng);

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(&mut session),
    }
}
