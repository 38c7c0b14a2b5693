//! Display functions for command results

use super::formatters::{create_progress_bar, format_value, tiles};
use crate::commands::AuditReport;
use crate::core::Guess;
use crate::game::{CheckResult, PuzzleResponse};
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(guess: &Guess, target_value: i64, result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}",
        target_value.to_string().bright_yellow().bold(),
        guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}  {}", tiles(guess, &result.states), result.states.to_emoji());

    if let Some(value) = result.calculated_value {
        println!("\n  Calculated value: {}", format_value(value).bright_cyan());
    }

    println!();
    if result.solved {
        println!("{}", "✅ Puzzle solved!".green().bold());
    } else if result.valid {
        println!(
            "{}",
            format!(
                "✓ Valid equation: {} correct, {} present",
                result.states.count_correct(),
                result.states.count_present()
            )
            .yellow()
        );
    } else {
        let message = result.message.as_deref().unwrap_or("Invalid guess");
        println!("{}", format!("❌ {message}").red().bold());
    }
}

/// Print a puzzle description
pub fn print_puzzle(puzzle: &PuzzleResponse) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MATHLER PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Find the equation that equals {}",
        puzzle.target_value.to_string().bright_yellow().bold()
    );
    println!("  Equation length:  {}", puzzle.equation_length);
    println!("  Difficulty:       {}", puzzle.difficulty);
}

/// Print the result of a puzzle audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Puzzles checked:  {}", report.total);
    println!(
        "   Passed:           {}",
        report.passed().to_string().green()
    );
    println!(
        "   Failed:           {}",
        if report.is_clean() {
            "0".green()
        } else {
            report.failures.len().to_string().red().bold()
        }
    );
    println!("   Time taken:       {:.3}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Difficulty:".bright_cyan().bold());
    let mut difficulties: Vec<_> = report.by_difficulty.iter().collect();
    difficulties.sort_unstable();
    for (difficulty, &count) in difficulties {
        let bar = create_progress_bar(count as f64, report.total as f64, 40);
        println!("   {difficulty}: {} {count:4}", bar.green());
    }

    if !report.is_clean() {
        println!("\n❌ {}", "Failures:".red().bold());
        for failure in &report.failures {
            println!(
                "   {} {} {}",
                failure.target_value.to_string().bright_yellow(),
                failure.solution.bright_white(),
                failure.reason.red()
            );
        }
    }
}
