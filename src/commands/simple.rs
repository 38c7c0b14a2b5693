//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::Guess;
use crate::game::{Checker, Session, SessionError, SessionStatus};
use crate::output::formatters::{format_value, tiles};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(checker: &Checker, difficulty: Option<u8>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Mathler - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the hidden equation that equals the target.");
    println!("Use digits and + - * / (× also works). Normal precedence applies.\n");
    println!("  {} right character, right place", " C ".black().on_green());
    println!("  {} in the equation, wrong place", " P ".black().on_yellow());
    println!("  {} not in the equation", " - ".white().on_bright_black());
    println!("\nCommands: 'quit' to exit, 'new' for a new puzzle\n");

    let mut session = Session::new(super::draw_puzzle(checker, difficulty));
    announce(&session);

    loop {
        let input = get_user_input(&format!(
            "Guess {}/{}",
            session.attempts().len() + 1,
            session.max_attempts()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = Session::new(super::draw_puzzle(checker, difficulty));
                println!("\n🔄 New game started!\n");
                announce(&session);
                continue;
            }
            _ => {}
        }

        let guess = Guess::from_str(&input);
        match session.submit(checker, guess.clone()) {
            Ok(result) if result.valid => {
                println!("  {}\n", tiles(&guess, &result.states));
            }
            Ok(result) => {
                let message = result.message.unwrap_or_default();
                println!("❌ {message}");
                if let Some(value) = result.calculated_value {
                    println!("   ({} = {})\n", guess.text(), format_value(value));
                } else {
                    println!();
                }
                continue;
            }
            Err(SessionError::Check(e)) => {
                println!("❌ {e}\n");
                continue;
            }
            Err(SessionError::Finished) => {}
        }

        match session.status() {
            SessionStatus::Playing => continue,
            SessionStatus::Won => celebrate(&session),
            SessionStatus::Lost => {
                println!(
                    "{}",
                    "😞 Out of attempts! Better luck next time.".red().bold()
                );
            }
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session = Session::new(super::draw_puzzle(checker, difficulty));
                println!("\n🔄 New game started!\n");
                announce(&session);
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn announce(session: &Session) {
    let puzzle = session.puzzle();
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Target: {}   ({} characters, difficulty {})",
        puzzle.target_value.to_string().bright_yellow().bold(),
        puzzle.equation_length,
        puzzle.difficulty
    );
    println!("────────────────────────────────────────────────────────────\n");
}

fn celebrate(session: &Session) {
    let turn = session.attempts().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  M A T H L E R   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Phew!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess.text().bright_white().bold(),
            attempt.result.states.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}
