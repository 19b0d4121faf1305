use log::trace;

use crate::{
    error::SolveError,
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Where an operand sits within its expression.
///
/// A unary sign is legal only on the very first operand of an expression or
/// parenthesized group, and only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    /// First operand of the expression, no sign consumed yet.
    Leading,
    /// Operand directly after a unary sign.
    Signed,
    /// Operand directly after a binary operator.
    Following,
}

impl OperandPosition {
    const fn allows_sign(self) -> bool {
        matches!(self, Self::Leading)
    }
}

/// Parses exactly one operand.
///
/// Grammar:
/// ```text
///     value := sign? (number | "(" expression ")")
///     sign  := "+" | "-"
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the operand.
/// - `position`: Whether this is the first operand, or follows a sign or an
///   operator.
///
/// # Returns
/// The numeric value of the operand.
///
/// # Errors
/// - `TooManySign` for a sign anywhere but the start of an expression, or a
///   second sign.
/// - `EndBracket` if a group is not closed.
/// - `FloatingPointStartDot` for a literal beginning with `.`.
/// - `WrongToken` at end of input or on any other token.
/// - Errors of the number literal or the nested expression, unchanged.
pub fn parse_value(cursor: &mut Cursor<'_>, position: OperandPosition) -> ParseResult<f64> {
    let token = cursor.advance().ok_or(SolveError::WrongToken)??;

    match token {
        Token::Number(value) => Ok(value),
        Token::Minus | Token::Plus if !position.allows_sign() => Err(SolveError::TooManySign),
        Token::Minus => Ok(-parse_value(cursor, OperandPosition::Signed)?),
        Token::Plus => parse_value(cursor, OperandPosition::Signed),
        Token::LParen => parse_group(cursor),
        Token::FractionMarker => Err(SolveError::FloatingPointStartDot),
        Token::RParen | Token::Star | Token::Slash => Err(SolveError::WrongToken),
    }
}

/// Parses the rest of a parenthesized group after its `(`.
///
/// # Errors
/// - `NestingTooDeep` if the group exceeds the configured depth.
/// - `EndBracket` if the next token after the inner expression is not `)`.
fn parse_group(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    cursor.enter_group()?;
    trace!("entering group at depth {}", cursor.depth());

    let value = parse_expression(cursor)?;

    match cursor.advance() {
        Some(Ok(Token::RParen)) => {
            trace!("leaving group at depth {} with {value}", cursor.depth());
            cursor.leave_group();
            Ok(value)
        },
        _ => Err(SolveError::EndBracket),
    }
}
