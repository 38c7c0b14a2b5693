//! Restricted arithmetic expressions
//!
//! Guesses are evaluated by a dedicated tokenizer and recursive descent
//! parser that only know numeric literals and `+ - * /`. Nothing else is
//! ever executed.
//!
//! Evaluation runs in a fixed order:
//! 1. `×` is normalised to `*`
//! 2. the whole input must pass the character whitelist (digits, operators,
//!    whitespace)
//! 3. the input, at most [`MAX_EXPRESSION_LENGTH`] characters, is parsed with
//!    conventional precedence and left associativity
//! 4. the tree is evaluated; non-finite results are rejected

mod ast;
mod errors;
mod eval;
mod lexer;
mod parser;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use lexer::{TokenKind, check_whitelist, is_allowed_char};
pub use parser::{MAX_EXPRESSION_LENGTH, parse};

use log::debug;

/// Evaluate a sequence of guess characters as an arithmetic expression
///
/// # Errors
///
/// Returns an `ExpressionError` if the input contains a character outside
/// the whitelist, is longer than [`MAX_EXPRESSION_LENGTH`], does not parse,
/// or evaluates to infinity or NaN.
///
/// # Examples
/// ```
/// use mathler::expression::evaluate;
///
/// let chars: Vec<char> = "12+34+54".chars().collect();
/// assert_eq!(evaluate(&chars).unwrap(), 100.0);
///
/// let trailing: Vec<char> = "100+0+0+".chars().collect();
/// assert!(evaluate(&trailing).is_err());
/// ```
pub fn evaluate(chars: &[char]) -> Result<f64, ExpressionError> {
    let normalized = lexer::normalize(chars);
    check_whitelist(&normalized)?;

    let expression = parse(&normalized).inspect_err(|e| debug!("Parse failed: {e}"))?;
    expression.evaluate_finite()
}

/// Convenience wrapper around [`evaluate`] for string input
///
/// # Errors
///
/// See [`evaluate`].
pub fn evaluate_str(src: &str) -> Result<f64, ExpressionError> {
    let chars: Vec<char> = src.chars().collect();
    evaluate(&chars)
}

#[cfg(test)]
mod tests;
