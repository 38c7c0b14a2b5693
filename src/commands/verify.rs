//! Puzzle audit
//!
//! Every configured solution must evaluate to its target and check as solved
//! against itself. Puzzles are audited in parallel.

use crate::core::Guess;
use crate::expression::evaluate;
use crate::game::check_guess;
use crate::puzzles::{Puzzle, PuzzleBook};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A puzzle that failed the audit
#[derive(Debug, Clone, PartialEq)]
pub struct AuditFailure {
    pub target_value: i64,
    pub solution: String,
    pub reason: String,
}

/// Outcome of auditing a puzzle book
#[derive(Debug)]
pub struct AuditReport {
    pub total: usize,
    pub failures: Vec<AuditFailure>,
    pub by_difficulty: FxHashMap<u8, usize>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Audit one puzzle, describing the first problem found
///
/// # Errors
///
/// Returns the reason the puzzle is unplayable.
pub fn audit_puzzle(puzzle: &Puzzle) -> Result<(), String> {
    let solution = puzzle.solution();
    let target = puzzle.target_value();

    let value = evaluate(solution.chars()).map_err(|e| format!("does not evaluate: {e}"))?;

    #[allow(clippy::float_cmp)]
    if value != target as f64 {
        return Err(format!("evaluates to {value}, not {target}"));
    }

    let guess = Guess::from_chars(solution.chars().iter().copied());
    let result = check_guess(&guess, target, solution).map_err(|e| e.to_string())?;
    if !result.solved {
        return Err("does not solve itself".to_string());
    }

    Ok(())
}

/// Audit every puzzle in the book, reporting progress on `pb`
#[must_use]
pub fn audit_book(book: &PuzzleBook, pb: &ProgressBar) -> AuditReport {
    let start = Instant::now();

    let mut failures: Vec<AuditFailure> = book
        .all_puzzles()
        .par_iter()
        .filter_map(|puzzle| {
            let outcome = audit_puzzle(puzzle);
            pb.inc(1);

            outcome.err().map(|reason| {
                warn!("Puzzle {} failed audit: {reason}", puzzle.target_value());
                AuditFailure {
                    target_value: puzzle.target_value(),
                    solution: puzzle.solution().text(),
                    reason,
                }
            })
        })
        .collect();
    failures.sort_by_key(|f| f.target_value);

    let mut by_difficulty = FxHashMap::default();
    for puzzle in book.all_puzzles() {
        *by_difficulty.entry(puzzle.difficulty()).or_insert(0) += 1;
    }

    AuditReport {
        total: book.len(),
        failures,
        by_difficulty,
        duration: start.elapsed(),
    }
}

/// Audit the book with a progress bar on the terminal
#[must_use]
pub fn run_verify(book: &PuzzleBook) -> AuditReport {
    println!("🔍 Auditing {} puzzles...", book.len());

    let pb = ProgressBar::new(book.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let report = audit_book(book, &pb);
    pb.finish_with_message("Complete!");
    report
}
