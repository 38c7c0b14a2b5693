use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluate with IEEE-754 `f64` arithmetic.
    ///
    /// Division by zero is not special-cased: `1/0` yields infinity and
    /// `0/0` yields NaN. Use [`Expression::evaluate_finite`] to reject those.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Add(l, r) => l.evaluate() + r.evaluate(),
            Expression::Sub(l, r) => l.evaluate() - r.evaluate(),
            Expression::Mul(l, r) => l.evaluate() * r.evaluate(),
            Expression::Div(l, r) => l.evaluate() / r.evaluate(),
            Expression::Neg(e) => -e.evaluate(),
        }
    }

    /// # Errors
    ///
    /// Returns `ExpressionError::NonFinite` when the result is infinite or NaN.
    pub fn evaluate_finite(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {self}");

        let value = self.evaluate();
        if value.is_finite() {
            debug!("Expression evaluated to: {value}");
            Ok(value)
        } else {
            debug!("Expression evaluated to non-finite value: {value}");
            Err(ExpressionError::NonFinite(value))
        }
    }
}
