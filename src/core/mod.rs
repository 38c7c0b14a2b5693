//! Core domain types for Mathler
//!
//! Guesses, solutions and per-character feedback. Everything here is pure:
//! no I/O and no shared state.

mod feedback;
mod guess;

pub use feedback::{Feedback, LengthMismatch, MatchState};
pub use guess::{Guess, MULTIPLICATION_GLYPH, Solution, SolutionError};
