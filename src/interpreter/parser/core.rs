use log::trace;

use crate::{
    error::SolveError,
    interpreter::{
        cursor::Cursor,
        evaluator::apply,
        parser::{
            operator::{Operator, OperatorToken, parse_operator},
            value::{OperandPosition, parse_value},
        },
    },
};

pub type ParseResult<T> = Result<T, SolveError>;

/// Parses and evaluates one expression: the whole input, or the inside of a
/// parenthesized group.
///
/// Operators are resolved with an explicit stack. A sentinel is pushed first;
/// every newly read operator reduces all pending operators of greater or
/// equal priority (left-associativity), then waits on the stack for its
/// right-hand operand. Reading no operator at all reduces everything down to
/// the sentinel, which ends this expression and leaves the cursor on the
/// first token that does not belong to it.
///
/// Grammar: `expression := value (operator value)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first operand.
///
/// # Returns
/// The value of the expression, not yet rounded.
///
/// # Errors
/// Propagates the first error raised by an operand or a reduction.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut stack = vec![OperatorToken::SENTINEL];
    let mut value = parse_value(cursor, OperandPosition::Leading)?;

    while !stack.is_empty() {
        let operator = parse_operator(cursor);

        while let Some(&top) = stack.last() {
            if top.priority() < operator.priority() {
                break;
            }
            stack.pop();
            if top.operator == Operator::Sentinel {
                return Ok(value);
            }
            value = apply(top.pending, value, top.operator)?;
        }

        trace!("pushing {operator} with pending {value}");
        stack.push(OperatorToken { operator,
                                   pending: value });
        value = parse_value(cursor, OperandPosition::Following)?;
    }

    Ok(value)
}
