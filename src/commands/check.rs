//! One-shot guess checking

use crate::core::Guess;
use crate::game::{CheckError, CheckResult, Checker, GuessRequest};
use thiserror::Error;

/// What to check: a typed expression or a raw JSON request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInput {
    Expression { text: String, target_value: i64 },
    Request(String),
}

#[derive(Debug, Error)]
pub enum CheckCommandError {
    #[error("Malformed guess request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl CheckInput {
    /// Resolve the input to a request
    ///
    /// # Errors
    ///
    /// Returns `CheckCommandError::MalformedRequest` if a JSON request does
    /// not match the request shape.
    pub fn to_request(&self) -> Result<GuessRequest, CheckCommandError> {
        match self {
            Self::Expression { text, target_value } => {
                Ok(GuessRequest::new(&Guess::from_str(text), *target_value))
            }
            Self::Request(json) => Ok(serde_json::from_str(json)?),
        }
    }
}

/// Check a single guess
///
/// # Errors
///
/// Returns an error for a malformed request, an unknown target, or a guess of
/// the wrong length.
pub fn run_check(
    checker: &Checker,
    input: &CheckInput,
) -> Result<(GuessRequest, CheckResult), CheckCommandError> {
    let request = input.to_request()?;
    let result = checker.check_request(&request)?;
    Ok((request, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::PuzzleBook;

    #[test]
    fn check_expression() {
        let book = PuzzleBook::embedded(8).unwrap();
        let checker = Checker::new(&book);
        let input = CheckInput::Expression {
            text: "12+34+54".to_string(),
            target_value: 100,
        };

        let (request, result) = run_check(&checker, &input).unwrap();
        assert_eq!(request.target_value, 100);
        assert!(result.solved);
    }

    #[test]
    fn check_json_request() {
        let book = PuzzleBook::embedded(8).unwrap();
        let checker = Checker::new(&book);
        let input = CheckInput::Request(
            r#"{"guess":["1","0","+","2","0","+","3","0"],"targetValue":100}"#.to_string(),
        );

        let (_, result) = run_check(&checker, &input).unwrap();
        assert!(!result.valid);
        assert_eq!(result.calculated_value, Some(60.0));
    }

    #[test]
    fn malformed_request_is_rejected() {
        let book = PuzzleBook::embedded(8).unwrap();
        let checker = Checker::new(&book);
        let input = CheckInput::Request(r#"{"guess":"12+34+54","targetValue":100}"#.to_string());

        assert!(matches!(
            run_check(&checker, &input),
            Err(CheckCommandError::MalformedRequest(_))
        ));
    }

    #[test]
    fn unknown_target_is_reported() {
        let book = PuzzleBook::embedded(8).unwrap();
        let checker = Checker::new(&book);
        let input = CheckInput::Expression {
            text: "12+34+54".to_string(),
            target_value: 101,
        };

        assert!(matches!(
            run_check(&checker, &input),
            Err(CheckCommandError::Check(CheckError::UnknownTarget(101)))
        ));
    }
}
