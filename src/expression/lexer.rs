use std::fmt;
use std::ops::Range;

use log::debug;

use crate::core::MULTIPLICATION_GLYPH;
use crate::expression::errors::ExpressionError;

/// Characters an expression may contain: digits, the four operators and
/// whitespace.
#[inline]
#[must_use]
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '+' | '-' | '*' | '/') || ch.is_whitespace()
}

/// Full-string whitelist check, run before any parsing
///
/// # Errors
///
/// Returns `ExpressionError::Empty` for empty input and
/// `ExpressionError::DisallowedCharacter` for the first character outside
/// the whitelist.
pub fn check_whitelist(src: &[char]) -> Result<(), ExpressionError> {
    if src.is_empty() {
        return Err(ExpressionError::Empty);
    }

    if let Some((index, &character)) = src.iter().enumerate().find(|(_, c)| !is_allowed_char(**c))
    {
        debug!("Rejected character {character:?} at position {index}");
        return Err(ExpressionError::DisallowedCharacter { character, index });
    }

    Ok(())
}

/// Replace the multiplication glyph with `*`
#[must_use]
pub fn normalize(src: &[char]) -> Vec<char> {
    src.iter()
        .map(|&c| if c == MULTIPLICATION_GLYPH { '*' } else { c })
        .collect()
}

/// The kinds of token an arithmetic expression is made of.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Times,
    Divide,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Times => "'*'",
            TokenKind::Divide => "'/'",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
    /// Only set for `TokenKind::Number`
    pub value: f64,
}

/// Iterator over the tokens of a character slice.
///
/// Positions are character indices, so they line up with guess slots.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    src: &'a [char],
    cursor: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(src: &'a [char]) -> Self {
        Tokens { src, cursor: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.cursor).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.src.get(self.cursor + 1).copied()
    }

    fn chomp(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor;
        self.cursor += 1;
        Token {
            kind,
            span: start..self.cursor,
            value: 0.0,
        }
    }

    /// `+`/`-` immediately followed by the same sign is an increment or
    /// decrement operator, which arithmetic on literals never accepts.
    fn chomp_sign(&mut self, sign: char, kind: TokenKind) -> Result<Token, ExpressionError> {
        if self.peek_next() == Some(sign) {
            return Err(ExpressionError::IncrementOperator { index: self.cursor });
        }
        Ok(self.chomp(kind))
    }

    fn chomp_number(&mut self) -> Result<Token, ExpressionError> {
        let start = self.cursor;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor += 1;
        }
        let end = self.cursor;

        let digits = &self.src[start..end];
        if digits.len() > 1 && digits[0] == '0' {
            return Err(ExpressionError::LeadingZero { index: start });
        }

        // ASCII digits always parse; too many of them saturate to infinity
        let text: String = digits.iter().collect();
        let value = text.parse::<f64>().unwrap_or(f64::INFINITY);

        Ok(Token {
            kind: TokenKind::Number,
            span: start..end,
            value,
        })
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ExpressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.peek()? {
                space if space.is_whitespace() => {
                    self.cursor += 1;
                    continue;
                }
                '+' => Some(self.chomp_sign('+', TokenKind::Plus)),
                '-' => Some(self.chomp_sign('-', TokenKind::Minus)),
                '*' => Some(Ok(self.chomp(TokenKind::Times))),
                '/' => Some(Ok(self.chomp(TokenKind::Divide))),
                '0'..='9' => Some(self.chomp_number()),
                other => {
                    let index = self.cursor;
                    // Skip it so a caller that keeps iterating still terminates
                    self.cursor += 1;
                    Some(Err(ExpressionError::DisallowedCharacter {
                        character: other,
                        index,
                    }))
                }
            };
        }
    }
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let chars: Vec<char> = src.chars().collect();
        Tokens::new(&chars)
            .map(|t| t.map(|t| t.kind))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn first_error(src: &str) -> ExpressionError {
        let chars: Vec<char> = src.chars().collect();
        Tokens::new(&chars)
            .find_map(Result::err)
            .unwrap()
    }

    #[test]
    fn tokenize_simple_sum() {
        assert_eq!(
            kinds("12+34"),
            vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]
        );
    }

    #[test]
    fn tokenize_all_operators_with_whitespace() {
        assert_eq!(
            kinds(" 1 - 2 * 3 / 4 "),
            vec![
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::Times,
                TokenKind::Number,
                TokenKind::Divide,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn tokenize_number_value_and_span() {
        let chars: Vec<char> = "7+123".chars().collect();
        let tokens: Vec<Token> = Tokens::new(&chars).collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens[2].span, 2..5);
        assert!((tokens[2].value - 123.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tokenize_lone_zero() {
        assert_eq!(kinds("0"), vec![TokenKind::Number]);
    }

    #[test]
    fn tokenize_rejects_leading_zero() {
        assert_eq!(first_error("1+012"), ExpressionError::LeadingZero { index: 2 });
    }

    #[test]
    fn tokenize_rejects_increment_and_decrement() {
        assert_eq!(
            first_error("5++3"),
            ExpressionError::IncrementOperator { index: 1 }
        );
        assert_eq!(
            first_error("5--3"),
            ExpressionError::IncrementOperator { index: 1 }
        );
    }

    #[test]
    fn tokenize_separated_signs_are_fine() {
        assert_eq!(
            kinds("5- -3"),
            vec![
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Number
            ]
        );
    }

    #[test]
    fn tokenize_rejects_unknown_character() {
        assert_eq!(
            first_error("1+(2)"),
            ExpressionError::DisallowedCharacter {
                character: '(',
                index: 2
            }
        );
    }

    #[test]
    fn whitelist_accepts_arithmetic() {
        let chars: Vec<char> = "12 + 34 * 5 / 6 - 7".chars().collect();
        assert!(check_whitelist(&chars).is_ok());
    }

    #[test]
    fn whitelist_rejects_empty() {
        assert_eq!(check_whitelist(&[]), Err(ExpressionError::Empty));
    }

    #[test]
    fn whitelist_rejects_anywhere_in_string() {
        for (src, bad, index) in [
            ("a+1", 'a', 0),
            ("1+2.5", '.', 3),
            ("2e3", 'e', 1),
            ("1+1)", ')', 3),
            ("12×3", '×', 2),
        ] {
            let chars: Vec<char> = src.chars().collect();
            assert_eq!(
                check_whitelist(&chars),
                Err(ExpressionError::DisallowedCharacter {
                    character: bad,
                    index
                }),
                "{src}"
            );
        }
    }

    #[test]
    fn normalize_replaces_glyph() {
        let chars: Vec<char> = "7×6".chars().collect();
        assert_eq!(normalize(&chars), vec!['7', '*', '6']);
    }
}
