//! A single round of play
//!
//! Only valid guesses (well-formed and equal to the target) use up an
//! attempt. Rejected guesses are reported back to the player and discarded.

use thiserror::Error;

use super::api::{CheckResult, PuzzleResponse};
use super::engine::Checker;
use super::errors::CheckError;
use crate::core::Guess;

/// Attempts allowed per round
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("The round is over")]
    Finished,
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub guess: Guess,
    pub result: CheckResult,
}

#[derive(Debug, Clone)]
pub struct Session {
    puzzle: PuzzleResponse,
    attempts: Vec<Attempt>,
    max_attempts: usize,
}

impl Session {
    #[must_use]
    pub fn new(puzzle: PuzzleResponse) -> Self {
        Self::with_max_attempts(puzzle, MAX_ATTEMPTS)
    }

    #[must_use]
    pub fn with_max_attempts(puzzle: PuzzleResponse, max_attempts: usize) -> Self {
        Self {
            puzzle,
            attempts: Vec::with_capacity(max_attempts),
            max_attempts,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &PuzzleResponse {
        &self.puzzle
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.attempts.iter().any(|a| a.result.solved) {
            SessionStatus::Won
        } else if self.attempts.len() >= self.max_attempts {
            SessionStatus::Lost
        } else {
            SessionStatus::Playing
        }
    }

    /// Check a guess and record it if it was valid
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` once the round is won or lost, and
    /// passes through checker errors such as a wrong-length guess.
    pub fn submit(&mut self, checker: &Checker, guess: Guess) -> Result<CheckResult, SessionError> {
        if self.status() != SessionStatus::Playing {
            return Err(SessionError::Finished);
        }

        let result = checker.check(&guess, self.puzzle.target_value)?;
        if result.valid {
            self.attempts.push(Attempt {
                guess,
                result: result.clone(),
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Solution;
    use crate::puzzles::{Puzzle, PuzzleBook};

    fn book() -> PuzzleBook {
        PuzzleBook::new(vec![Puzzle::new(100, Solution::new("12+34+54").unwrap(), 1)], 8).unwrap()
    }

    fn session(book: &PuzzleBook) -> Session {
        Session::new(Checker::new(book).random_puzzle())
    }

    #[test]
    fn solving_wins_the_round() {
        let book = book();
        let checker = Checker::new(&book);
        let mut session = session(&book);

        session.submit(&checker, Guess::from_str("44+44+12")).unwrap();
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.remaining(), 5);

        let result = session.submit(&checker, Guess::from_str("12+34+54")).unwrap();
        assert!(result.solved);
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(
            session.submit(&checker, Guess::from_str("12+34+54")),
            Err(SessionError::Finished)
        );
    }

    #[test]
    fn rejected_guesses_do_not_use_attempts() {
        let book = book();
        let checker = Checker::new(&book);
        let mut session = session(&book);

        let result = session.submit(&checker, Guess::from_str("10+20+30")).unwrap();
        assert!(!result.valid);
        let result = session.submit(&checker, Guess::from_str("100+0+0+")).unwrap();
        assert!(!result.valid);

        assert!(session.attempts().is_empty());
        assert_eq!(session.remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let book = book();
        let checker = Checker::new(&book);
        let mut session = Session::with_max_attempts(checker.random_puzzle(), 2);

        session.submit(&checker, Guess::from_str("44+44+12")).unwrap();
        session.submit(&checker, Guess::from_str("50+50+0 ")).unwrap();

        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn wrong_length_is_passed_through() {
        let book = book();
        let checker = Checker::new(&book);
        let mut session = session(&book);

        assert_eq!(
            session.submit(&checker, Guess::from_str("1+2")),
            Err(SessionError::Check(CheckError::LengthMismatch {
                expected: 8,
                found: 3
            }))
        );
    }
}
