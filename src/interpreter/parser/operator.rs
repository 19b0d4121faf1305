use std::fmt;

use crate::interpreter::{cursor::Cursor, lexer::Token};

/// The binary operator alphabet, plus the sentinel that marks the bottom of
/// one expression's operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// No operator. Delimits one expression or parenthesized group, and is
    /// what the operator parser returns when no operator follows.
    Sentinel,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Binding strength: multiplicative operators bind tighter than additive
    /// ones, and the sentinel binds loosest of all.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Sentinel => 0,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div => 10,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Sentinel => "<none>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// One entry of the operator stack: an operator waiting for its right-hand
/// operand, together with the left-hand operand already computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorToken {
    /// The pending operator.
    pub operator: Operator,
    /// The left-hand operand accumulated before the operator was read.
    pub pending:  f64,
}

impl OperatorToken {
    /// The stack-bottom marker pushed on entry to every expression.
    pub const SENTINEL: Self = Self { operator: Operator::Sentinel,
                                      pending:  0.0, };

    /// Priority of the pending operator.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.operator.priority()
    }
}

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        _ => None,
    }
}

/// Reads the next binary operator.
///
/// An operator token is consumed and returned. Anything else, including a
/// lexical error or the end of input, is left in place and reported as
/// [`Operator::Sentinel`]: a missing operator means "stop", not failure.
pub fn parse_operator(cursor: &mut Cursor<'_>) -> Operator {
    let operator = match cursor.peek() {
        Some(Ok(token)) => token_to_operator(token),
        _ => None,
    };

    match operator {
        Some(operator) => {
            cursor.advance();
            operator
        },
        None => Operator::Sentinel,
    }
}
