//! TUI application state and logic

use crate::engine::{GuessOutcomeKind, MatchError, MatchOutcome, MatchSnapshot};
use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng> {
    pub session: GameSession<R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub guesses: Vec<String>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    MatchOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<R: Rng> App<R> {
    /// Wrap a session and start its first match
    #[must_use]
    pub fn new(mut session: GameSession<R>) -> Self {
        session.start();

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            guesses: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Welcome! Guess a letter or the whole word.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        self.session.snapshot()
    }

    /// The word as the player should see it: masked while the match runs, spelled
    /// out once it is won or lost
    #[must_use]
    pub fn word_display(&self) -> Option<String> {
        let engine = self.session.current_match()?;
        if !engine.outcome().is_terminal() {
            return Some(engine.masked_word().to_string());
        }

        let letters: Vec<String> = engine
            .secret()
            .chars()
            .iter()
            .map(|c| c.to_uppercase().to_string())
            .collect();
        Some(letters.join(" "))
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::MatchOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') | KeyCode::Enter => {
                    self.new_game();
                }
                _ => {
                    // Match is over, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Tab => {
                    // Give up on this word
                    self.new_game();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_guess();
                }
                _ => {}
            },
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&guess) {
            Ok(report) => {
                let style = match report.outcome.kind() {
                    GuessOutcomeKind::Won | GuessOutcomeKind::CorrectLetter => {
                        MessageStyle::Success
                    }
                    GuessOutcomeKind::Invalid
                    | GuessOutcomeKind::WrongLetter
                    | GuessOutcomeKind::Lost => MessageStyle::Error,
                    GuessOutcomeKind::AlreadyGuessed => MessageStyle::Info,
                };

                if report.outcome.kind() != GuessOutcomeKind::Invalid {
                    self.guesses.push(guess.trim().to_uppercase());
                }
                self.add_message(report.outcome.message(), style);

                match report.snapshot.outcome {
                    MatchOutcome::InProgress => {}
                    MatchOutcome::Won => self.finish_match(true),
                    MatchOutcome::Lost => self.finish_match(false),
                }
            }
            Err(MatchError::Finished(_) | MatchError::NotStarted) => {
                self.input_mode = InputMode::MatchOver;
                self.add_message("Press 'n' for a new match.", MessageStyle::Info);
            }
        }
    }

    fn finish_match(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
        }
        self.input_mode = InputMode::MatchOver;
        self.add_message(
            &format!(
                "Match points: {} | Total: {}",
                self.session.last_match_score(),
                self.session.current_player_total_points()
            ),
            MessageStyle::Info,
        );
        self.add_message(
            "Press 'n' for new match or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.guesses.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New match started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
