//! Puzzle table loading utilities
//!
//! Entries look like `target:solution:difficulty`, e.g. `100:12+34+54:1`.
//! Blank lines and `#` comments are ignored.

use super::{Puzzle, PuzzleBook, PuzzleError};
use crate::core::Solution;
use log::warn;
use std::fs;
use std::path::Path;

/// Parse a single `target:solution:difficulty` entry
///
/// # Errors
///
/// Returns a `PuzzleError::InvalidEntry` describing why the entry was rejected.
///
/// # Examples
/// ```
/// use mathler::puzzles::loader::parse_entry;
///
/// let puzzle = parse_entry("100:12+34+54:1").unwrap();
/// assert_eq!(puzzle.target_value(), 100);
/// assert_eq!(puzzle.difficulty(), 1);
/// assert!(parse_entry("100:12+34+54").is_err());
/// ```
pub fn parse_entry(entry: &str) -> Result<Puzzle, PuzzleError> {
    let invalid = |reason: &str| PuzzleError::InvalidEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = entry.trim().split(':').collect();
    let [target, solution, difficulty] = parts.as_slice() else {
        return Err(invalid("expected target:solution:difficulty"));
    };

    let target_value = target
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(&format!("bad target value: {e}")))?;
    let solution = Solution::new(solution.trim()).map_err(|e| invalid(&e.to_string()))?;
    let difficulty = difficulty
        .trim()
        .parse::<u8>()
        .map_err(|e| invalid(&format!("bad difficulty: {e}")))?;

    Ok(Puzzle::new(target_value, solution, difficulty))
}

/// Parse every entry, skipping invalid ones with a warning
#[must_use]
pub fn parse_entries<'a, I>(entries: I) -> Vec<Puzzle>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match parse_entry(line) {
            Ok(puzzle) => Some(puzzle),
            Err(e) => {
                warn!("Skipping puzzle entry: {e}");
                None
            }
        })
        .collect()
}

/// Load a puzzle book from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// `PuzzleError::NoPuzzles` if no usable puzzle remains.
///
/// # Examples
/// ```no_run
/// use mathler::puzzles::loader::load_from_file;
///
/// let book = load_from_file("data/puzzles.txt", 8).unwrap();
/// println!("Loaded {} puzzles", book.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    equation_length: usize,
) -> Result<PuzzleBook, PuzzleError> {
    let content = fs::read_to_string(path)?;
    PuzzleBook::new(parse_entries(content.lines()), equation_length)
}

/// Build a puzzle book from embedded string entries
///
/// # Errors
///
/// Returns `PuzzleError::NoPuzzles` if no usable puzzle remains.
pub fn book_from_slice(slice: &[&str], equation_length: usize) -> Result<PuzzleBook, PuzzleError> {
    PuzzleBook::new(parse_entries(slice.iter().copied()), equation_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_valid() {
        let puzzle = parse_entry("42:21*2+0*9:2").unwrap();
        assert_eq!(puzzle.target_value(), 42);
        assert_eq!(puzzle.solution().text(), "21*2+0*9");
        assert_eq!(puzzle.difficulty(), 2);
    }

    #[test]
    fn parse_entry_negative_target() {
        let puzzle = parse_entry("-5:1-2*3+0:3").unwrap();
        assert_eq!(puzzle.target_value(), -5);
    }

    #[test]
    fn parse_entry_invalid() {
        assert!(parse_entry("").is_err());
        assert!(parse_entry("100").is_err());
        assert!(parse_entry("100:12+34+54").is_err());
        assert!(parse_entry("100:12+34+54:1:extra").is_err());
        assert!(parse_entry("abc:12+34+54:1").is_err());
        assert!(parse_entry("100::1").is_err());
        assert!(parse_entry("100:12+34+54:hard").is_err());
    }

    #[test]
    fn parse_entries_skips_comments_and_invalid() {
        let input = ["# header", "", "100:12+34+54:1", "garbage", "20:10+5+2+3:1"];
        let puzzles = parse_entries(input);

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].target_value(), 100);
        assert_eq!(puzzles[1].target_value(), 20);
    }

    #[test]
    fn parse_entries_empty() {
        let puzzles = parse_entries(std::iter::empty());
        assert!(puzzles.is_empty());
    }

    #[test]
    fn book_from_embedded_puzzles() {
        use crate::puzzles::PUZZLES;

        let book = book_from_slice(PUZZLES, 8).unwrap();
        assert_eq!(book.len(), PUZZLES.len());
    }

    #[test]
    fn book_from_slice_without_usable_entries() {
        let result = book_from_slice(&["nonsense"], 8);
        assert!(matches!(result, Err(PuzzleError::NoPuzzles)));
    }
}
