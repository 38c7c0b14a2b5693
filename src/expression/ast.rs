use std::fmt;

/// Parsed arithmetic expression over numeric literals
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

impl Expression {
    fn precedence(&self) -> u8 {
        match self {
            Expression::Add(_, _) | Expression::Sub(_, _) => 1,
            Expression::Mul(_, _) | Expression::Div(_, _) => 2,
            Expression::Neg(_) => 3,
            Expression::Number(_) => 4,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expression, need_parens: bool) -> fmt::Result {
    if need_parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

// Parentheses only appear for trees the parser itself cannot produce; the
// output is meant for logs.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, op, r) = match self {
            Expression::Number(n) => return write!(f, "{n}"),
            Expression::Neg(inner) => {
                write!(f, "-")?;
                return write_operand(f, inner, inner.precedence() < 3);
            }
            Expression::Add(l, r) => (l, "+", r),
            Expression::Sub(l, r) => (l, "-", r),
            Expression::Mul(l, r) => (l, "*", r),
            Expression::Div(l, r) => (l, "/", r),
        };

        let own = self.precedence();
        write_operand(f, l, l.precedence() < own)?;
        write!(f, " {op} ")?;
        // Right operands of equal precedence need grouping: a - (b - c)
        write_operand(f, r, r.precedence() <= own)
    }
}
