//! Per-character feedback for a guess
//!
//! Each guess position receives one [`MatchState`]:
//! - `Correct`: same character at the same position in the solution
//! - `Present`: character appears at another, still unclaimed, solution position
//! - `Absent`: no unclaimed occurrence remains
//!
//! Duplicate characters never claim more solution positions than the solution
//! actually holds.

use super::{Guess, Solution};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Feedback state of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchState {
    Correct,
    Present,
    Absent,
}

impl MatchState {
    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code used by [`Feedback::from_str`]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' | '🟩' => Some(Self::Correct),
            'P' | 'p' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Guess and solution lengths differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Guess has {found} characters but the solution has {expected}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub found: usize,
}

/// Ordered match states, one per guess position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<MatchState>);

impl Feedback {
    /// Feedback of `len` absent states, used when a guess is rejected
    #[must_use]
    pub fn all_absent(len: usize) -> Self {
        Self(vec![MatchState::Absent; len])
    }

    /// Compare `guess` against `solution` position by position
    ///
    /// # Algorithm
    /// 1. First pass: every exact positional match is `Correct` and claims
    ///    that solution position
    /// 2. Second pass: each remaining guess position, in ascending order, claims
    ///    the first unclaimed solution position holding the same character
    ///    (`Present`), or is `Absent` when none is left
    ///
    /// # Errors
    /// Returns `LengthMismatch` when the guess and solution lengths differ.
    ///
    /// # Examples
    /// ```
    /// use mathler::core::{Feedback, Guess, MatchState, Solution};
    ///
    /// let solution = Solution::new("12+34+54").unwrap();
    /// let guess = Guess::from_str("44+44+12");
    /// let feedback = Feedback::compare(&guess, &solution).unwrap();
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨⬜🟩⬜🟩🟩🟨🟨");
    /// assert!(!feedback.is_solved());
    /// ```
    pub fn compare(guess: &Guess, solution: &Solution) -> Result<Self, LengthMismatch> {
        let guess = guess.chars();
        let answer = solution.chars();

        if guess.len() != answer.len() {
            return Err(LengthMismatch {
                expected: answer.len(),
                found: guess.len(),
            });
        }

        let mut states: Vec<Option<MatchState>> = vec![None; guess.len()];
        let mut claimed = vec![false; answer.len()];

        // First pass: exact positions
        for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                states[i] = Some(MatchState::Correct);
                claimed[i] = true;
            }
        }

        // Second pass: leftovers claim the first unclaimed match
        for (i, &g) in guess.iter().enumerate() {
            if states[i].is_some() {
                continue;
            }

            let found = answer
                .iter()
                .enumerate()
                .position(|(j, &a)| !claimed[j] && a == g);

            states[i] = Some(if let Some(j) = found {
                claimed[j] = true;
                MatchState::Present
            } else {
                MatchState::Absent
            });
        }

        Ok(Self(
            states
                .into_iter()
                .map(|state| state.unwrap_or(MatchState::Absent))
                .collect(),
        ))
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &[MatchState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff every position is `Correct`
    ///
    /// Empty feedback is never solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == MatchState::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(MatchState::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(MatchState::Present)
    }

    fn count(&self, state: MatchState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Parse feedback from a string like "CP-C" or "🟩🟨⬜🟩"
    ///
    /// Accepts:
    /// - 'C'/'c'/🟩 for correct
    /// - 'P'/'p'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use mathler::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("CP-").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        s.chars()
            .map(MatchState::from_code)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl From<Vec<MatchState>> for Feedback {
    fn from(states: Vec<MatchState>) -> Self {
        Self(states)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.code())?;
        }
        Ok(())
    }
}
