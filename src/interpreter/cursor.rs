use std::ops::Range;

use logos::{Logos, SpannedIter};

use crate::{error::SolveError, interpreter::lexer::Token};

type Lexeme = (Result<Token, SolveError>, Range<usize>);

/// Read position over a single expression.
///
/// Wraps the lazy token stream with one token of lookahead and tracks how
/// many parenthesized groups are currently open. Lexical errors stay in the
/// stream as `Err` items, so they only fail the evaluation once a parser
/// actually consumes them.
pub struct Cursor<'src> {
    tokens:    SpannedIter<'src, Token>,
    peeked:    Option<Option<Lexeme>>,
    depth:     usize,
    max_depth: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str, max_depth: usize) -> Self {
        Self { tokens: Token::lexer(source).spanned(),
               peeked: None,
               depth: 0,
               max_depth }
    }

    /// Returns the next token without consuming it, or `None` at end of input.
    pub fn peek(&mut self) -> Option<&Result<Token, SolveError>> {
        let tokens = &mut self.tokens;
        self.peeked
            .get_or_insert_with(|| tokens.next())
            .as_ref()
            .map(|(token, _)| token)
    }

    /// Consumes the next token.
    pub fn advance(&mut self) -> Option<Result<Token, SolveError>> {
        let lexeme = match self.peeked.take() {
            Some(lexeme) => lexeme,
            None => self.tokens.next(),
        };
        lexeme.map(|(token, _)| token)
    }

    /// Byte offset of the next unread token, or of the end of input.
    pub fn position(&mut self) -> usize {
        self.peek();
        match &self.peeked {
            Some(Some((_, span))) => span.start,
            _ => self.tokens.source().len(),
        }
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Records entry into a parenthesized group.
    ///
    /// # Errors
    /// Returns `SolveError::NestingTooDeep` if the group would exceed the
    /// configured limit.
    pub const fn enter_group(&mut self) -> Result<(), SolveError> {
        if self.depth >= self.max_depth {
            return Err(SolveError::NestingTooDeep { limit: self.max_depth });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records exit from a parenthesized group.
    pub const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of parenthesized groups currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
