use thiserror::Error;

use crate::core::LengthMismatch;

/// Contract violations that reject a check outright
///
/// Invalid expressions and wrong values are not errors: they come back as a
/// `CheckResult` with `valid == false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("No puzzle configured for target value {0}")]
    UnknownTarget(i64),
    #[error("Guess has {found} characters, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

impl From<LengthMismatch> for CheckError {
    fn from(e: LengthMismatch) -> Self {
        CheckError::LengthMismatch {
            expected: e.expected,
            found: e.found,
        }
    }
}
