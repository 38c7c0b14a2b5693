//! TUI rendering with ratatui
//!
//! Board, messages, and statistics for the Mathler interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::MatchState;
use crate::game::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.puzzle();
    let header = Paragraph::new(Line::from(vec![
        Span::raw("🧮 MATHLER | Find the equation that equals "),
        Span::styled(
            puzzle.target_value.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
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

const fn tile_style(state: MatchState) -> Style {
    let (fg, bg) = match state {
        MatchState::Correct => (Color::Black, Color::Green),
        MatchState::Present => (Color::Black, Color::Yellow),
        MatchState::Absent => (Color::White, Color::DarkGray),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile_row(chars: &[char], states: &[MatchState]) -> Line<'static> {
    let mut spans = Vec::with_capacity(chars.len() * 2);
    for (&ch, &state) in chars.iter().zip(states) {
        spans.push(Span::styled(format!(" {ch} "), tile_style(state)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_row(len: usize, typed: &str) -> Line<'static> {
    let mut chars = typed.chars();
    let mut spans = Vec::with_capacity(len * 2);
    for _ in 0..len {
        let text = chars.next().map_or_else(|| " · ".to_string(), |c| format!(" {c} "));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::White).bg(Color::Black),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let len = app.equation_length();
    let attempts = app.session.attempts();

    let mut lines = Vec::with_capacity(app.session.max_attempts() * 2);
    for attempt in attempts {
        lines.push(tile_row(attempt.guess.chars(), attempt.result.states()));
        lines.push(Line::from(""));
    }

    if app.session.status() == SessionStatus::Playing {
        lines.push(empty_row(len, &app.input_buffer));
        lines.push(Line::from(""));
        for _ in attempts.len() + 1..app.session.max_attempts() {
            lines.push(empty_row(len, ""));
            lines.push(Line::from(""));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Attempts gauge
            Constraint::Percentage(50), // Distribution
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts().len();
    let max = app.session.max_attempts().max(1);
    let percent = u16::try_from(used * 100 / max).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let peak = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let lines: Vec<Line> = (1..=6)
        .map(|guesses| {
            let count = app.stats.guess_distribution[guesses];
            let width = count * 16 / peak;
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.input_mode.clone(), app.session.status()) {
        (InputMode::GameOver, SessionStatus::Won) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Out of attempts | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Enter Equation (digits, + - * /, x for ×) | Enter to submit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let puzzle = app.session.puzzle();
    let target = Paragraph::new(format!(
        "Target: {} | Difficulty: {}",
        puzzle.target_value, puzzle.difficulty
    ))
    .alignment(Alignment::Center);
    f.render_widget(target, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining = Paragraph::new(format!("Attempts left: {}", app.session.remaining()))
        .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
