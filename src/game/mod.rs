//! Guess checking service
//!
//! [`check_guess`] is the pure core. [`Checker`] binds it to a
//! [`PuzzleBook`](crate::puzzles::PuzzleBook) so callers only need a target
//! value, [`Session`] tracks one round of play, and [`api`] holds the
//! serializable request/response shapes.

pub mod api;
mod engine;
mod errors;
mod session;

pub use api::{CheckResult, GuessRequest, PuzzleResponse};
pub use engine::{Checker, INVALID_MESSAGE, SOLVED_MESSAGE, check_guess};
pub use errors::CheckError;
pub use session::{Attempt, MAX_ATTEMPTS, Session, SessionError, SessionStatus};
