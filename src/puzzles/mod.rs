//! Puzzle table for Mathler
//!
//! Maps each target value to its known solution. The table is configuration:
//! puzzles are never generated here, and looking up an unmapped target is the
//! caller's error to report.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT};

use crate::core::Solution;
use crate::game::CheckError;
use log::{info, warn};
use rand::Rng;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Default number of slots in an equation
pub const DEFAULT_EQUATION_LENGTH: usize = 8;

/// Errors raised while building a puzzle book
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("No puzzles configured")]
    NoPuzzles,
    #[error("Invalid puzzle entry '{entry}': {reason}")]
    InvalidEntry { entry: String, reason: String },
    #[error("Failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
}

/// A configured puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target_value: i64,
    solution: Solution,
    difficulty: u8,
}

impl Puzzle {
    #[must_use]
    pub const fn new(target_value: i64, solution: Solution, difficulty: u8) -> Self {
        Self {
            target_value,
            solution,
            difficulty,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target_value(&self) -> i64 {
        self.target_value
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

/// The set of playable puzzles, indexed by target value
#[derive(Debug, Clone)]
pub struct PuzzleBook {
    puzzles: Vec<Puzzle>,
    by_target: FxHashMap<i64, usize>,
    equation_length: usize,
}

impl PuzzleBook {
    /// Build a book from puzzles, keeping only usable ones
    ///
    /// Puzzles whose solution length differs from `equation_length` are
    /// skipped, as are later puzzles repeating an earlier target value.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::NoPuzzles` if nothing usable remains.
    pub fn new(puzzles: Vec<Puzzle>, equation_length: usize) -> Result<Self, PuzzleError> {
        let mut kept = Vec::with_capacity(puzzles.len());
        let mut by_target = FxHashMap::default();

        for puzzle in puzzles {
            if puzzle.solution.len() != equation_length {
                warn!(
                    "Skipping puzzle for {}: solution has {} characters, expected {equation_length}",
                    puzzle.target_value,
                    puzzle.solution.len()
                );
                continue;
            }

            if by_target.contains_key(&puzzle.target_value) {
                warn!(
                    "Skipping duplicate puzzle for target {}",
                    puzzle.target_value
                );
                continue;
            }

            by_target.insert(puzzle.target_value, kept.len());
            kept.push(puzzle);
        }

        if kept.is_empty() {
            return Err(PuzzleError::NoPuzzles);
        }

        Ok(Self {
            puzzles: kept,
            by_target,
            equation_length,
        })
    }

    /// The puzzle table compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::NoPuzzles` if no embedded puzzle has
    /// `equation_length` characters.
    pub fn embedded(equation_length: usize) -> Result<Self, PuzzleError> {
        loader::book_from_slice(PUZZLES, equation_length)
    }

    /// Look up the puzzle for a target value
    #[must_use]
    pub fn get(&self, target_value: i64) -> Option<&Puzzle> {
        self.by_target.get(&target_value).map(|&i| &self.puzzles[i])
    }

    /// Look up the puzzle for a target value, failing if none is configured
    ///
    /// # Errors
    ///
    /// Returns `CheckError::UnknownTarget` for an unmapped target.
    pub fn solution_for(&self, target_value: i64) -> Result<&Puzzle, CheckError> {
        self.get(target_value)
            .ok_or(CheckError::UnknownTarget(target_value))
    }

    /// Draw a random puzzle
    #[must_use]
    pub fn random(&self) -> &Puzzle {
        self.random_with(&mut rand::rng())
    }

    /// Draw a random puzzle using the given generator
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Puzzle {
        let puzzle = &self.puzzles[rng.random_range(0..self.puzzles.len())];
        info!("Selected puzzle with target {}", puzzle.target_value);
        puzzle
    }

    /// Draw a random puzzle of the given difficulty
    ///
    /// Falls back to any puzzle when none has that difficulty.
    #[must_use]
    pub fn random_with_difficulty(&self, difficulty: u8) -> &Puzzle {
        self.random_with_difficulty_using(difficulty, &mut rand::rng())
    }

    /// [`PuzzleBook::random_with_difficulty`] using the given generator
    pub fn random_with_difficulty_using<R: Rng + ?Sized>(
        &self,
        difficulty: u8,
        rng: &mut R,
    ) -> &Puzzle {
        let matching: Vec<&Puzzle> = self
            .puzzles
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect();

        if matching.is_empty() {
            info!("No puzzle with difficulty {difficulty}, drawing from all puzzles");
            return self.random_with(rng);
        }

        let puzzle = matching[rng.random_range(0..matching.len())];
        info!(
            "Selected puzzle with target {} (difficulty {difficulty})",
            puzzle.target_value
        );
        puzzle
    }

    #[inline]
    #[must_use]
    pub fn all_puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false: an empty book cannot be built
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn equation_length(&self) -> usize {
        self.equation_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle(target: i64, solution: &str, difficulty: u8) -> Puzzle {
        Puzzle::new(target, Solution::new(solution).unwrap(), difficulty)
    }

    fn sample_book() -> PuzzleBook {
        PuzzleBook::new(
            vec![
                puzzle(100, "12+34+54", 1),
                puzzle(20, "10+5+2+3", 1),
                puzzle(42, "21*2+0*9", 2),
            ],
            8,
        )
        .unwrap()
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(PUZZLES.len(), PUZZLES_COUNT);
    }

    #[test]
    fn embedded_book_loads() {
        let book = PuzzleBook::embedded(DEFAULT_EQUATION_LENGTH).unwrap();
        assert_eq!(book.len(), PUZZLES_COUNT);
        assert_eq!(book.equation_length(), 8);
        assert!(book.get(100).is_some());
    }

    #[test]
    fn embedded_book_with_other_length_is_empty() {
        assert!(matches!(
            PuzzleBook::embedded(6),
            Err(PuzzleError::NoPuzzles)
        ));
    }

    #[test]
    fn get_known_and_unknown_targets() {
        let book = sample_book();
        assert_eq!(book.get(100).unwrap().solution().text(), "12+34+54");
        assert_eq!(book.get(42).unwrap().difficulty(), 2);
        assert!(book.get(7).is_none());
    }

    #[test]
    fn solution_for_unknown_target_is_an_error() {
        let book = sample_book();
        assert_eq!(book.solution_for(20).unwrap().target_value(), 20);
        assert_eq!(book.solution_for(7), Err(CheckError::UnknownTarget(7)));
    }

    #[test]
    fn wrong_length_solutions_are_skipped() {
        let book = PuzzleBook::new(
            vec![puzzle(100, "12+34+54", 1), puzzle(3, "1+2", 1)],
            8,
        )
        .unwrap();

        assert_eq!(book.len(), 1);
        assert!(book.get(3).is_none());
    }

    #[test]
    fn duplicate_targets_keep_first() {
        let book = PuzzleBook::new(
            vec![puzzle(100, "12+34+54", 1), puzzle(100, "50+50+0*", 3)],
            8,
        )
        .unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.get(100).unwrap().solution().text(), "12+34+54");
    }

    #[test]
    fn empty_book_is_an_error() {
        assert!(matches!(
            PuzzleBook::new(Vec::new(), 8),
            Err(PuzzleError::NoPuzzles)
        ));
    }

    #[test]
    fn random_puzzle_comes_from_the_book() {
        let book = sample_book();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let drawn = book.random_with(&mut rng);
            assert!(book.get(drawn.target_value()).is_some());
        }
    }

    #[test]
    fn random_with_difficulty_filters() {
        let book = sample_book();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            assert_eq!(
                book.random_with_difficulty_using(2, &mut rng).target_value(),
                42
            );
            assert_eq!(
                book.random_with_difficulty_using(1, &mut rng).difficulty(),
                1
            );
        }
    }

    #[test]
    fn random_with_unknown_difficulty_falls_back() {
        let book = sample_book();
        let mut rng = StdRng::seed_from_u64(3);

        let drawn = book.random_with_difficulty_using(9, &mut rng);
        assert!(book.get(drawn.target_value()).is_some());
    }
}
