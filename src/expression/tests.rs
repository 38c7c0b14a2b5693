use crate::expression::errors::ExpressionError;
use crate::expression::{MAX_EXPRESSION_LENGTH, TokenKind, evaluate, evaluate_str};

fn assert_value(src: &str, expected: f64) {
    let result = evaluate_str(src);
    assert!(result.is_ok(), "{src} should evaluate, got {result:?}");
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "{src} = {value}, expected {expected}"
        );
    }
}

#[test]
fn test_evaluate_sum() {
    assert_value("12+34+54", 100.0);
    assert_value("10+5+2+3", 20.0);
}

#[test]
fn test_evaluate_from_char_slots() {
    let guess = ['1', '2', '+', '3', '4', '+', '5', '4'];
    assert_eq!(evaluate(&guess), Ok(100.0));
}

#[test]
fn test_evaluate_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("20-6/2", 17.0);
    assert_value("21*2+0*9", 42.0);
    assert_value("60+8/2*1", 64.0);
}

#[test]
fn test_evaluate_left_associativity() {
    assert_value("10-4-3", 3.0);
    assert_value("8/4/2", 1.0);
    assert_value("100/10*2", 20.0);
}

#[test]
fn test_evaluate_fractional_result() {
    assert_value("7/2", 3.5);
    assert_value("1/3*3", 1.0);
}

#[test]
fn test_evaluate_multiplication_glyph() {
    assert_value("7×6", 42.0);
    let slots = ['2', '1', '×', '2'];
    assert_eq!(evaluate(&slots), Ok(42.0));
}

#[test]
fn test_evaluate_whitespace_is_ignored() {
    assert_value(" 12 + 34\t+ 54 ", 100.0);
}

#[test]
fn test_evaluate_unary_signs() {
    assert_value("-5+10", 5.0);
    assert_value("+5", 5.0);
    assert_value("5- -3", 8.0);
    assert_value("5-+3", 2.0);
    assert_value("2*-3", -6.0);
}

#[test]
fn test_evaluate_lone_zero() {
    assert_value("0", 0.0);
    assert_value("100+0+0", 100.0);
}

#[test]
fn test_division_by_zero_is_infinite_and_rejected() {
    // IEEE-754: 1/0 is +Infinity
    let result = evaluate_str("1/0");
    assert_eq!(result, Err(ExpressionError::NonFinite(f64::INFINITY)));

    let result = evaluate_str("5-1/0");
    assert_eq!(result, Err(ExpressionError::NonFinite(f64::NEG_INFINITY)));
}

#[test]
fn test_zero_over_zero_is_nan_and_rejected() {
    let result = evaluate_str("0/0");
    assert!(matches!(result, Err(ExpressionError::NonFinite(v)) if v.is_nan()));

    let result = evaluate_str("1/0*0");
    assert!(matches!(result, Err(ExpressionError::NonFinite(v)) if v.is_nan()));
}

#[test]
fn test_empty_expression() {
    assert_eq!(evaluate_str(""), Err(ExpressionError::Empty));
    assert_eq!(evaluate(&[]), Err(ExpressionError::Empty));
    assert_eq!(evaluate_str("    "), Err(ExpressionError::Empty));
}

#[test]
fn test_operator_only_expressions() {
    assert!(evaluate_str("++").is_err());
    assert!(evaluate_str("+").is_err());
    assert!(evaluate_str("*/").is_err());
    assert!(evaluate_str("+-*/").is_err());
}

#[test]
fn test_trailing_operator() {
    let slots = ['1', '0', '0', '+', '0', '+', '0', '+'];
    assert_eq!(evaluate(&slots), Err(ExpressionError::UnexpectedEndOfInput));
}

#[test]
fn test_leading_binary_operator() {
    assert_eq!(
        evaluate_str("*12+3"),
        Err(ExpressionError::UnexpectedToken {
            found: TokenKind::Times,
            index: 0
        })
    );
}

#[test]
fn test_increment_operators_rejected() {
    assert_eq!(
        evaluate_str("5++3"),
        Err(ExpressionError::IncrementOperator { index: 1 })
    );
    assert_eq!(
        evaluate_str("10--2"),
        Err(ExpressionError::IncrementOperator { index: 2 })
    );
}

#[test]
fn test_leading_zero_rejected() {
    assert_eq!(
        evaluate_str("012+88"),
        Err(ExpressionError::LeadingZero { index: 0 })
    );
}

#[test]
fn test_disallowed_characters() {
    assert_eq!(
        evaluate_str("2.5*4"),
        Err(ExpressionError::DisallowedCharacter {
            character: '.',
            index: 1
        })
    );
    assert_eq!(
        evaluate_str("(1+2)*3"),
        Err(ExpressionError::DisallowedCharacter {
            character: '(',
            index: 0
        })
    );
    assert_eq!(
        evaluate_str("1e3"),
        Err(ExpressionError::DisallowedCharacter {
            character: 'e',
            index: 1
        })
    );
    assert!(evaluate_str("2**3").is_err());
}

#[test]
fn test_injection_attempts_never_reach_the_parser() {
    // The whitelist reports the first bad character, which proves the input
    // was rejected before tokenizing (the lexer would have failed elsewhere)
    for (src, character, index) in [
        ("process.exit(1)", 'p', 0),
        ("1+alert(1)", 'a', 2),
        ("1;2", ';', 1),
        ("100//comment", 'c', 5),
        ("0x64", 'x', 1),
        ("1+1\u{0}", '\u{0}', 3),
    ] {
        assert_eq!(
            evaluate_str(src),
            Err(ExpressionError::DisallowedCharacter { character, index }),
            "{src}"
        );
    }
}

#[test]
fn test_whitelist_runs_before_parsing() {
    // A parse error early in the string must not mask a bad character later
    assert_eq!(
        evaluate_str("++1a"),
        Err(ExpressionError::DisallowedCharacter {
            character: 'a',
            index: 3
        })
    );
}

#[test]
fn test_adjacent_numbers_rejected() {
    assert!(evaluate_str("1 2").is_err());
    assert!(evaluate_str("12 +3 4").is_err());
}

#[test]
fn test_evaluation_is_pure() {
    let slots = ['9', '9', '/', '9', '+', '1', '*', '1'];
    let first = evaluate(&slots);
    let second = evaluate(&slots);
    assert_eq!(first, second);
    assert_eq!(first, Ok(12.0));
}

#[test]
fn test_long_sign_runs_evaluate() {
    // 200 minus signs cancel out
    let src = format!("{}1", "+-".repeat(200));
    assert_value(&src, 1.0);
}

#[test]
fn test_longest_allowed_expression() {
    // 511 additions, 1023 characters
    let src = format!("{}1", "1+".repeat(511));
    assert_eq!(src.len(), MAX_EXPRESSION_LENGTH - 1);
    assert_value(&src, 512.0);
}

#[test]
fn test_overlong_expressions_are_rejected_not_evaluated() {
    let signs = format!("{}1", "+-".repeat(200_000));
    assert_eq!(
        evaluate_str(&signs),
        Err(ExpressionError::TooLong {
            max: MAX_EXPRESSION_LENGTH,
            found: 400_001
        })
    );

    let sum = format!("{}1", "1+".repeat(300_000));
    assert_eq!(
        evaluate_str(&sum),
        Err(ExpressionError::TooLong {
            max: MAX_EXPRESSION_LENGTH,
            found: 600_001
        })
    );
}

#[test]
fn test_whitelist_still_reported_before_length() {
    let src = format!("{}a", "1".repeat(2 * MAX_EXPRESSION_LENGTH));
    assert_eq!(
        evaluate_str(&src),
        Err(ExpressionError::DisallowedCharacter {
            character: 'a',
            index: 2 * MAX_EXPRESSION_LENGTH
        })
    );
}

#[test]
fn test_huge_literal_is_non_finite() {
    let src = format!("1{}", "0".repeat(400));
    assert_eq!(evaluate_str(&src), Err(ExpressionError::NonFinite(f64::INFINITY)));
}
