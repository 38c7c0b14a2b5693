use std::iter::Peekable;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::lexer::{Token, TokenKind, Tokens};

/// Longest input the parser accepts, whitespace included.
///
/// Keeps the tree shallow enough to evaluate and drop without exhausting
/// the stack.
pub const MAX_EXPRESSION_LENGTH: usize = 1024;

/// Parse an [`Expression`] tree from a character slice.
///
/// # Errors
///
/// Returns an error for input longer than [`MAX_EXPRESSION_LENGTH`] and for
/// malformed input: a dangling operator, two numbers in a row, or anything
/// the lexer rejects.
pub fn parse(src: &[char]) -> Result<Expression, ExpressionError> {
    if src.len() > MAX_EXPRESSION_LENGTH {
        return Err(ExpressionError::TooLong {
            max: MAX_EXPRESSION_LENGTH,
            found: src.len(),
        });
    }

    Parser::new(src).parse()
}

/// A recursive descent parser for the four-operator grammar.
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := unary (("*" | "/") unary)*
/// unary      := ("+" | "-") unary
///             | NUMBER
/// ```
///
/// Same-precedence operators associate to the left.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    tokens: Peekable<Tokens<'a>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a [char]) -> Self {
        Parser {
            tokens: Tokens::new(src).peekable(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Expression, ExpressionError> {
        if self.tokens.peek().is_none() {
            return Err(ExpressionError::Empty);
        }

        let expr = self.expression()?;

        match self.tokens.next() {
            None => Ok(expr),
            Some(Ok(token)) => Err(ExpressionError::UnexpectedToken {
                found: token.kind,
                index: token.span.start,
            }),
            Some(Err(e)) => Err(e),
        }
    }

    /// Peek at the next token kind, surfacing lexer errors immediately.
    fn peek(&mut self) -> Result<Option<TokenKind>, ExpressionError> {
        match self.tokens.peek() {
            None => Ok(None),
            Some(Ok(token)) => Ok(Some(token.kind)),
            Some(Err(e)) => Err(e.clone()),
        }
    }

    fn advance(&mut self) -> Result<Token, ExpressionError> {
        match self.tokens.next() {
            Some(result) => result,
            None => Err(ExpressionError::UnexpectedEndOfInput),
        }
    }

    fn expression(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.term()?;

        while let Some(kind @ (TokenKind::Plus | TokenKind::Minus)) = self.peek()? {
            self.advance()?;
            let right = self.term()?;
            left = match kind {
                TokenKind::Plus => Expression::Add(Box::new(left), Box::new(right)),
                _ => Expression::Sub(Box::new(left), Box::new(right)),
            };
        }

        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.unary()?;

        while let Some(kind @ (TokenKind::Times | TokenKind::Divide)) = self.peek()? {
            self.advance()?;
            let right = self.unary()?;
            left = match kind {
                TokenKind::Times => Expression::Mul(Box::new(left), Box::new(right)),
                _ => Expression::Div(Box::new(left), Box::new(right)),
            };
        }

        Ok(left)
    }

    /// Signs are folded as they are read, so `- + - 5` becomes `5`.
    fn unary(&mut self) -> Result<Expression, ExpressionError> {
        let mut negated = false;

        loop {
            let token = self.advance()?;

            match token.kind {
                TokenKind::Plus => {}
                TokenKind::Minus => negated = !negated,
                TokenKind::Number => {
                    let number = Expression::Number(token.value);
                    return Ok(if negated {
                        Expression::Neg(Box::new(number))
                    } else {
                        number
                    });
                }
                found => {
                    return Err(ExpressionError::UnexpectedToken {
                        found,
                        index: token.span.start,
                    });
                }
            }
        }
    }
}
