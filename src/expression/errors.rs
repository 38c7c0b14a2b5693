use thiserror::Error;

use crate::expression::lexer::TokenKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    Empty,
    #[error("Character '{character}' at position {index} is not allowed")]
    DisallowedCharacter { character: char, index: usize },
    #[error("Unexpected {found} at position {index}")]
    UnexpectedToken { found: TokenKind, index: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEndOfInput,
    #[error("Number at position {index} has a leading zero")]
    LeadingZero { index: usize },
    #[error("Expression has {found} characters, at most {max} are allowed")]
    TooLong { max: usize, found: usize },
    #[error("Increment or decrement operator at position {index}")]
    IncrementOperator { index: usize },
    #[error("Expression does not evaluate to a finite number (got {0})")]
    NonFinite(f64),
}
