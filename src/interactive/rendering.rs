//! TUI rendering with ratatui
//!
//! Layout: header, the word and gallows on the left, tries and messages on the right,
//! input box and status bar at the bottom.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::MatchOutcome;
use crate::output::formatters::gallows;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and gallows
            Constraint::Percentage(40), // Tries and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Hint and word
            Constraint::Percentage(55), // Gallows and guesses
        ])
        .split(area);

    render_word(f, app, chunks[0]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_gallows(f, app, lower[0]);
    render_guesses(f, app, lower[1]);
}

fn render_word<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = if let (Some(snapshot), Some(word)) = (app.snapshot(), app.word_display()) {
        let word_color = match snapshot.outcome {
            MatchOutcome::InProgress => Color::Yellow,
            MatchOutcome::Won => Color::Green,
            MatchOutcome::Lost => Color::Red,
        };

        vec![
            Line::from(vec![
                Span::raw("Hint: "),
                Span::styled(snapshot.hint, Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                word,
                Style::default().fg(word_color).add_modifier(Modifier::BOLD),
            )),
        ]
    } else {
        vec![Line::from("No match in progress")]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_gallows<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let misses = app
        .snapshot()
        .map_or(0, |s| s.tries.max() - s.tries.remaining());

    let lines: Vec<Line> = gallows(misses).into_iter().map(Line::from).collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(paragraph, area);
}

fn render_guesses<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let items: Vec<ListItem> = app
        .guesses
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, guess)| ListItem::new(format!("{}: {guess}", app.guesses.len() - i)))
        .collect();

    let list = List::new(items).block(Block::default().title(" Guesses ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tries gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_tries<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (remaining, max) = app
        .snapshot()
        .map_or((0, 1), |s| (s.tries.remaining(), s.tries.max().max(1)));
    let percent = (remaining * 100 / max) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(percent)
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::MatchOver => (
            " Match over | Press 'n' for new match or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guessing => {
            let try_number = app.snapshot().map_or(1, |s| s.tries.current());
            (
                format!(" Guess #{try_number}: a letter or the whole word | TAB for a new word "),
                app.input_buffer.as_str(),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.session.player().name()))
        .alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let points_text = format!(
        "Points: {} | Last: {}",
        app.session.current_player_total_points(),
        app.session.last_match_score()
    );
    let points = Paragraph::new(points_text).alignment(Alignment::Center);
    f.render_widget(points, chunks[1]);

    let stats_text = format!(
        "Matches: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::MatchOver => "q: Quit | n: New Match",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | TAB: New Word",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::session::{GameSession, Player};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App<StdRng>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn bahia_app() -> App<StdRng> {
        let lexicon = Lexicon::from_pairs(&[("bahia", "carnaval")]).unwrap();
        App::new(GameSession::new(
            lexicon,
            Player::new("Davis"),
            StdRng::seed_from_u64(2),
        ))
    }

    #[test]
    fn renders_hint_and_masked_word() {
        let mut app = bahia_app();
        app.input_buffer = "a".to_string();
        app.submit_guess();

        let text = screen_text(&app);
        assert!(text.contains("carnaval"));
        assert!(text.contains("_ A _ _ A"));
        assert!(text.contains("Player: Davis"));
    }

    #[test]
    fn whole_word_win_shows_the_word() {
        let mut app = bahia_app();
        app.input_buffer = "bahia".to_string();
        app.submit_guess();

        let text = screen_text(&app);
        assert!(text.contains("B A H I A"));
        assert!(!text.contains("_ _ _ _ _"));
    }
}
