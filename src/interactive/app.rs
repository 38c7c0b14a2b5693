//! TUI application state and logic

use crate::core::Guess;
use crate::game::{Checker, Session, SessionError, SessionStatus};
use crate::output::formatters::format_value;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub checker: Checker<'a>,
    pub difficulty: Option<u8>,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(checker: Checker<'a>, difficulty: Option<u8>) -> Self {
        let session = Session::new(crate::commands::draw_puzzle(&checker, difficulty));

        let mut app = Self {
            checker,
            difficulty,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Welcome! Find the equation that equals the target.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type digits and + - * / then press Enter",
            MessageStyle::Info,
        );
        app
    }

    /// Capacity of the input line
    #[must_use]
    pub const fn equation_length(&self) -> usize {
        self.session.puzzle().equation_length
    }

    /// Append a typed character if it can appear in an equation
    pub fn push_char(&mut self, c: char) {
        let c = match c {
            'x' | 'X' | '×' => '*',
            other => other,
        };

        if matches!(c, '0'..='9' | '+' | '-' | '*' | '/')
            && self.input_buffer.chars().count() < self.equation_length()
        {
            self.input_buffer.push(c);
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = Guess::from_str(&self.input_buffer);
        if guess.len() != self.equation_length() {
            self.add_message(
                &format!("Equation must be {} characters!", self.equation_length()),
                MessageStyle::Error,
            );
            return;
        }

        let result = match self.session.submit(&self.checker, guess) {
            Ok(result) => result,
            Err(SessionError::Finished) => return,
            Err(SessionError::Check(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if !result.valid {
            let message = result.message.unwrap_or_default();
            let text = match result.calculated_value {
                Some(value) => format!("{message} ({})", format_value(value)),
                None => message,
            };
            self.add_message(&text, MessageStyle::Error);
            return;
        }

        self.input_buffer.clear();
        debug!("Accepted guess, {} attempts left", self.session.remaining());

        match self.session.status() {
            SessionStatus::Playing => {
                self.add_message(
                    &format!(
                        "{} correct, {} present | {} attempts left",
                        result.states.count_correct(),
                        result.states.count_present(),
                        self.session.remaining()
                    ),
                    MessageStyle::Info,
                );
            }
            SessionStatus::Won => {
                let guess_count = self.session.attempts().len();
                self.stats.games_won += 1;
                self.stats.total_games += 1;
                if guess_count <= 6 {
                    self.stats.guess_distribution[guess_count] += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message("Out of attempts!", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = Session::new(crate::commands::draw_puzzle(&self.checker, self.difficulty));
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "New game started! Target: {}",
                self.session.puzzle().target_value
            ),
            MessageStyle::Info,
        );
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
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') => {
                    app.new_game();
                }
                KeyCode::Char(c) if app.input_mode == InputMode::Guessing => {
                    app.push_char(c);
                }
                KeyCode::Backspace if app.input_mode == InputMode::Guessing => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter if app.input_mode == InputMode::Guessing => {
                    app.submit_guess();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
