//! Puzzle drawing

use crate::game::{Checker, PuzzleResponse};

/// Draw a puzzle, optionally of a given difficulty
#[must_use]
pub fn draw_puzzle(checker: &Checker, difficulty: Option<u8>) -> PuzzleResponse {
    match difficulty {
        Some(d) => checker.puzzle_by_difficulty(d),
        None => checker.random_puzzle(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::PuzzleBook;

    #[test]
    fn draw_with_difficulty() {
        let book = PuzzleBook::embedded(8).unwrap();
        let checker = Checker::new(&book);

        for _ in 0..10 {
            assert_eq!(draw_puzzle(&checker, Some(3)).difficulty, 3);
        }
    }

    #[test]
    fn draw_any() {
        let book = PuzzleBook::embedded(8).unwrap();
        let checker = Checker::new(&book);

        let response = draw_puzzle(&checker, None);
        assert!(book.get(response.target_value).is_some());
        assert_eq!(response.equation_length, 8);
    }
}
