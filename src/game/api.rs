//! Request/response contract for transports
//!
//! Field names are camelCase on the wire. A request whose `guess` is not a
//! sequence of single characters fails to deserialize, which a transport
//! reports as a client error before the checker is ever called.

use serde::{Deserialize, Serialize};

use crate::core::{Feedback, Guess, MatchState};
use crate::puzzles::Puzzle;

/// A guess submitted for checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub guess: Vec<char>,
    pub target_value: i64,
}

impl GuessRequest {
    #[must_use]
    pub fn new(guess: &Guess, target_value: i64) -> Self {
        Self {
            guess: guess.chars().to_vec(),
            target_value,
        }
    }

    /// The request's characters as a `Guess`
    #[must_use]
    pub fn to_guess(&self) -> Guess {
        Guess::from_chars(self.guess.iter().copied())
    }
}

/// Outcome of checking one guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub states: Feedback,
    pub valid: bool,
    pub solved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    /// A rejected guess: every position absent
    #[must_use]
    pub fn rejected(len: usize, calculated_value: Option<f64>, message: String) -> Self {
        Self {
            states: Feedback::all_absent(len),
            valid: false,
            solved: false,
            calculated_value,
            message: Some(message),
        }
    }

    #[must_use]
    pub fn states(&self) -> &[MatchState] {
        self.states.states()
    }
}

/// Public description of a puzzle; never carries the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    pub target_value: i64,
    pub difficulty: u8,
    pub equation_length: usize,
}

impl PuzzleResponse {
    #[must_use]
    pub const fn describe(puzzle: &Puzzle, equation_length: usize) -> Self {
        Self {
            target_value: puzzle.target_value(),
            difficulty: puzzle.difficulty(),
            equation_length,
        }
    }
}
