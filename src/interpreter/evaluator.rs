use log::trace;

use crate::{error::SolveError, interpreter::parser::operator::Operator};

/// Applies a binary operator to two operands.
///
/// `+`, `-` and `*` are total. Division fails when the right-hand operand is
/// exactly zero (either sign). The sentinel is not an arithmetic operator and
/// yields `0.0`.
///
/// # Errors
/// Returns `SolveError::DivideByZero` for `x / 0`.
///
/// # Example
/// ```
/// use yac::{
///     error::SolveError,
///     interpreter::{evaluator::apply, parser::operator::Operator},
/// };
///
/// assert_eq!(apply(7.0, 2.0, Operator::Div), Ok(3.5));
/// assert_eq!(apply(1.0, 0.0, Operator::Div), Err(SolveError::DivideByZero));
/// ```
pub fn apply(lhs: f64, rhs: f64, operator: Operator) -> Result<f64, SolveError> {
    trace!("reducing {lhs} {operator} {rhs}");

    match operator {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => {
            if rhs == 0.0 {
                return Err(SolveError::DivideByZero);
            }
            Ok(lhs / rhs)
        },
        Operator::Sentinel => Ok(0.0),
    }
}
