//! Mathler
//!
//! Guess checking for Mathler, the equation-guessing game: evaluate a guessed
//! arithmetic expression safely, then grade it position by position against
//! the hidden solution.
//!
//! # Quick Start
//!
//! ```rust
//! use mathler::core::{Guess, MatchState};
//! use mathler::game::Checker;
//! use mathler::puzzles::PuzzleBook;
//!
//! let book = PuzzleBook::embedded(8).unwrap();
//! let checker = Checker::new(&book);
//!
//! // 44+44+12 = 100, so it is graded against the solution 12+34+54
//! let result = checker.check(&Guess::from_str("44+44+12"), 100).unwrap();
//! assert!(result.valid);
//! assert_eq!(result.states()[2], MatchState::Correct);
//! println!("{}", result.states.to_emoji());
//! ```

// Core domain types
pub mod core;

// Safe arithmetic evaluation
pub mod expression;

// Puzzle table
pub mod puzzles;

// Guess checking service
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
