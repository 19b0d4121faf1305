use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Default)]
/// Represents all errors that can occur while solving an expression.
///
/// The variants form a stable taxonomy: callers may match on them and the
/// `Display` messages do not change between releases.
pub enum SolveError {
    /// An operand was expected but some other character (or the end of input)
    /// was found.
    #[default]
    #[error("parser error, wrong token")]
    WrongToken,
    /// Input remains after a structurally complete expression.
    #[error("expression is not complete")]
    NotCompleteExpression,
    /// Reserved for operators outside `+ - * /`; the grammar never produces
    /// it.
    #[error("contains a not supported operator")]
    NotSupportedOperator,
    /// Reserved for malformed operand values.
    #[error("value is wrong")]
    WrongValue,
    /// The right-hand side of `/` evaluated to zero.
    #[error("division by zero")]
    DivideByZero,
    /// A sign appeared somewhere other than the first token of its
    /// (sub)expression, or twice in a row.
    #[error("too many sign before number")]
    TooManySign,
    /// A numeric literal carries more than one fraction-point marker.
    #[error("floating point contains too many dots")]
    FloatingPointManyDot,
    /// A numeric literal begins with a fraction-point marker.
    #[error("floating point couldn't start with dot")]
    FloatingPointStartDot,
    /// A numeric literal ends with a fraction-point marker.
    #[error("floating point couldn't end with dot")]
    FloatingPointEndDot,
    /// A parenthesized group is not closed with `)`.
    #[error("couldn't find end bracket")]
    EndBracket,
    /// An integer literal exceeds the safe-integer limit `2^53 - 1`, or a
    /// decimal literal is too large to be finite. Decimal literals are
    /// otherwise rounded to the nearest `f64`.
    #[error("numeric literal is too large")]
    LiteralTooLarge,
    /// Parentheses are nested deeper than the configured limit.
    #[error("parentheses are nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The maximum nesting depth that was allowed.
        limit: usize,
    },
}
