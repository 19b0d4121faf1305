use logos::{Lexer, Logos};

use crate::{error::SolveError, util::num::u64_to_f64_checked};

/// Represents a lexical token in an arithmetic expression.
///
/// Whitespace between tokens is skipped. Characters outside the alphabet
/// below are reported as `Err(SolveError::WrongToken)` by the lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = SolveError)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2,5`.
    ///
    /// The whole run of digits and fraction-point markers is taken, then
    /// validated by [`lex_number`].
    #[regex(r"[0-9][0-9.,]*", lex_number)]
    Number(f64),
    /// A `.` with no digit in front of it, e.g. `.5`. A lone `,` is not a
    /// token and lexes as an unknown character.
    #[token(".")]
    FractionMarker,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Returns `true` for the characters accepted as a decimal point.
const fn is_fraction_marker(c: char) -> bool {
    matches!(c, '.' | ',')
}

/// Validates and converts a numeric literal.
///
/// The literal starts with a digit and may contain at most one
/// fraction-point marker, which must be neither its first nor its last
/// character. Integer literals must fit an `f64` exactly; decimal literals
/// must be finite.
///
/// # Errors
/// - `FloatingPointManyDot` if a second marker is present.
/// - `FloatingPointStartDot` / `FloatingPointEndDot` for a misplaced marker.
/// - `LiteralTooLarge` if the value cannot be represented.
fn lex_number(lex: &Lexer<Token>) -> Result<f64, SolveError> {
    parse_literal(lex.slice())
}

/// Converts the text of one numeric literal, see [`lex_number`].
///
/// # Example
/// ```
/// use yac::{error::SolveError, interpreter::lexer::parse_literal};
///
/// assert_eq!(parse_literal("2,5"), Ok(2.5));
/// assert_eq!(parse_literal("1.0.0"), Err(SolveError::FloatingPointManyDot));
/// assert_eq!(parse_literal("7."), Err(SolveError::FloatingPointEndDot));
/// ```
pub fn parse_literal(literal: &str) -> Result<f64, SolveError> {
    let mut markers = literal.char_indices()
                             .filter(|&(_, c)| is_fraction_marker(c))
                             .map(|(index, _)| index);
    let marker = markers.next();
    if markers.next().is_some() {
        return Err(SolveError::FloatingPointManyDot);
    }

    match marker {
        None => {
            let integer = literal.parse::<u64>()
                                 .map_err(|_| SolveError::LiteralTooLarge)?;
            u64_to_f64_checked(integer)
        },
        Some(0) => Err(SolveError::FloatingPointStartDot),
        Some(index) if index + 1 == literal.len() => Err(SolveError::FloatingPointEndDot),
        Some(index) => {
            let normalized = format!("{}.{}", &literal[..index], &literal[index + 1..]);
            let value = normalized.parse::<f64>()
                                  .map_err(|_| SolveError::WrongValue)?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(SolveError::LiteralTooLarge)
            }
        },
    }
}
