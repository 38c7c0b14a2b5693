//! Guess checking
//!
//! Evaluation first, comparison second: a guess is only compared against the
//! solution once it is a well-formed expression equal to the target.

use log::debug;

use super::api::{CheckResult, GuessRequest, PuzzleResponse};
use super::errors::CheckError;
use crate::core::{Feedback, Guess, Solution};
use crate::expression::evaluate;
use crate::puzzles::PuzzleBook;

/// Message attached to a solved guess
pub const SOLVED_MESSAGE: &str = "Puzzle solved!";

/// Message attached to a guess that does not evaluate
pub const INVALID_MESSAGE: &str = "Invalid or incomputable equation";

/// Check one guess against a target value and its known solution
///
/// Pure and re-entrant.
///
/// # Errors
///
/// Returns `CheckError::LengthMismatch` if the guess and solution lengths
/// differ. The length is checked before anything is evaluated.
///
/// # Examples
/// ```
/// use mathler::core::{Guess, Solution};
/// use mathler::game::check_guess;
///
/// let solution = Solution::new("12+34+54").unwrap();
///
/// let result = check_guess(&Guess::from_str("12+34+54"), 100, &solution).unwrap();
/// assert!(result.valid && result.solved);
///
/// let result = check_guess(&Guess::from_str("10+20+30"), 100, &solution).unwrap();
/// assert!(!result.valid);
/// assert_eq!(result.calculated_value, Some(60.0));
/// ```
pub fn check_guess(
    guess: &Guess,
    target_value: i64,
    solution: &Solution,
) -> Result<CheckResult, CheckError> {
    if guess.len() != solution.len() {
        return Err(CheckError::LengthMismatch {
            expected: solution.len(),
            found: guess.len(),
        });
    }

    let value = match evaluate(guess.chars()) {
        Ok(value) => value,
        Err(e) => {
            debug!("Rejected guess '{guess}': {e}");
            return Ok(CheckResult::rejected(
                guess.len(),
                None,
                INVALID_MESSAGE.to_string(),
            ));
        }
    };

    // Exact match: the value must be the target itself, not merely close
    #[allow(clippy::float_cmp)]
    if value != target_value as f64 {
        debug!("Guess '{guess}' gives {value}, target is {target_value}");
        return Ok(CheckResult::rejected(
            guess.len(),
            Some(value),
            format!("The equation gives {value}, not {target_value}"),
        ));
    }

    let states = Feedback::compare(guess, solution)?;
    let solved = states.is_solved();
    debug!("Guess '{guess}' feedback: {states}");

    Ok(CheckResult {
        states,
        valid: true,
        solved,
        calculated_value: Some(value),
        message: solved.then(|| SOLVED_MESSAGE.to_string()),
    })
}

/// Checks guesses against a configured puzzle book
///
/// Holds no per-request state, so one checker can serve concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    puzzles: &'a PuzzleBook,
}

impl<'a> Checker<'a> {
    #[must_use]
    pub const fn new(puzzles: &'a PuzzleBook) -> Self {
        Self { puzzles }
    }

    /// Check a guess for the puzzle keyed by `target_value`
    ///
    /// # Errors
    ///
    /// Returns `CheckError::UnknownTarget` if no puzzle is configured for the
    /// target, or `CheckError::LengthMismatch` if the guess has the wrong
    /// number of characters.
    pub fn check(&self, guess: &Guess, target_value: i64) -> Result<CheckResult, CheckError> {
        let puzzle = self.puzzles.solution_for(target_value)?;
        check_guess(guess, target_value, puzzle.solution())
    }

    /// Check a transport request
    ///
    /// # Errors
    ///
    /// See [`Checker::check`].
    pub fn check_request(&self, request: &GuessRequest) -> Result<CheckResult, CheckError> {
        self.check(&request.to_guess(), request.target_value)
    }

    /// Pick a random puzzle to present to a player
    #[must_use]
    pub fn random_puzzle(&self) -> PuzzleResponse {
        PuzzleResponse::describe(self.puzzles.random(), self.puzzles.equation_length())
    }

    /// Pick a random puzzle of the given difficulty, or any puzzle if none match
    #[must_use]
    pub fn puzzle_by_difficulty(&self, difficulty: u8) -> PuzzleResponse {
        PuzzleResponse::describe(
            self.puzzles.random_with_difficulty(difficulty),
            self.puzzles.equation_length(),
        )
    }
}
