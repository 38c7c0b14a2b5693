//! Guess and solution representations
//!
//! Both are ordered, fixed-length character sequences. The multiplication glyph
//! `×` is normalised to `*` on construction so that evaluation and positional
//! comparison see the same symbol.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Multiplication glyph accepted from on-screen keypads
pub const MULTIPLICATION_GLYPH: char = '×';

#[inline]
const fn normalize(ch: char) -> char {
    if ch == MULTIPLICATION_GLYPH { '*' } else { ch }
}

/// A player-submitted equation, one character per slot
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    chars: Vec<char>,
}

impl Guess {
    /// Build a guess from individual slot characters
    ///
    /// # Examples
    /// ```
    /// use mathler::core::Guess;
    ///
    /// let guess = Guess::from_chars(['7', '×', '6']);
    /// assert_eq!(guess.text(), "7*6");
    /// assert_eq!(guess.len(), 3);
    /// ```
    #[must_use]
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().map(normalize).collect(),
        }
    }

    /// Build a guess from a string, one slot per `char`
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Infallible; `FromStr` is also implemented below
    pub fn from_str(s: &str) -> Self {
        Self::from_chars(s.chars())
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The guess joined into a single string
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl std::str::FromStr for Guess {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_chars(s.chars()))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Error type for invalid solutions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    #[error("Solution must not be empty")]
    Empty,
}

/// A known-correct equation used only for positional feedback
///
/// Never shown to the player.
#[derive(Clone, PartialEq, Eq)]
pub struct Solution {
    chars: Vec<char>,
}

impl Solution {
    /// Create a solution from its text
    ///
    /// # Errors
    /// Returns `SolutionError::Empty` for an empty string.
    ///
    /// # Examples
    /// ```
    /// use mathler::core::Solution;
    ///
    /// let solution = Solution::new("12+34+54").unwrap();
    /// assert_eq!(solution.len(), 8);
    /// assert!(Solution::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SolutionError> {
        if text.is_empty() {
            return Err(SolutionError::Empty);
        }

        Ok(Self {
            chars: text.chars().map(normalize).collect(),
        })
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The solution as a string
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Count of each character in the solution
    ///
    /// Bounds how many guess positions one character can claim.
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

// Keep the solution text out of debug logs
impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solution")
            .field("len", &self.chars.len())
            .finish_non_exhaustive()
    }
}
