//! # yac
//!
//! yac evaluates a single infix arithmetic expression written with `+`, `-`,
//! `*`, `/`, parentheses, and signed integer or decimal numbers. The result
//! is an `f64` rounded to two decimal places, or a precise error telling why
//! the expression was rejected.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    interpreter::{cursor::Cursor, parser::core::parse_expression},
    util::num::round_to_places,
};

/// Provides the error type returned by every evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// computing an expression. Each variant carries a stable, human-readable
/// message.
///
/// # Responsibilities
/// - Defines one variant per failure mode.
/// - Integrates with the standard `Error` and `Display` traits.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together the lexer, the cursor, the parser and the
/// arithmetic evaluator.
///
/// # Responsibilities
/// - Turns expression text into tokens.
/// - Resolves operands and operators with correct priority.
/// - Computes the result and reports the first error encountered.
pub mod interpreter;
/// Evaluation limits and output precision.
pub mod options;
/// General numeric helpers shared by the lexer and the entry points.
///
/// # Responsibilities
/// - Safely convert integer literals to `f64` without silent data loss.
/// - Round results to a fixed number of decimal places.
pub mod util;

pub use error::SolveError;
pub use options::Options;

/// Evaluates `expression` with the default [`Options`].
///
/// The result is rounded to two decimal places. The whole input must form a
/// single expression; whitespace between tokens is ignored.
///
/// # Errors
/// Returns the first [`SolveError`] encountered. No partial result is
/// produced.
///
/// # Examples
/// ```
/// use yac::{SolveError, solve};
///
/// assert_eq!(solve("1/2 + 3 + 3 * (23) + 3"), Ok(75.5));
/// assert_eq!(solve("-12340"), Ok(-12340.0));
/// assert_eq!(solve("1 - -1"), Err(SolveError::TooManySign));
/// assert_eq!(solve("1/(2 - 2)"), Err(SolveError::DivideByZero));
/// ```
pub fn solve(expression: &str) -> Result<f64, SolveError> {
    solve_with(expression, &Options::default())
}

/// Evaluates `expression` with explicit [`Options`].
///
/// # Errors
/// Returns the first [`SolveError`] encountered, including
/// [`SolveError::NestingTooDeep`] once more than `options.max_depth`
/// parentheses are open at the same time.
pub fn solve_with(expression: &str, options: &Options) -> Result<f64, SolveError> {
    debug!("solving {expression:?}");

    let mut cursor = Cursor::new(expression, options.max_depth);
    let outcome = parse_expression(&mut cursor).and_then(|value| {
                                                   if cursor.is_exhausted() {
                                                       Ok(value)
                                                   } else {
                                                       debug!("unconsumed input at byte {}",
                                                              cursor.position());
                                                       Err(SolveError::NotCompleteExpression)
                                                   }
                                               });

    match outcome {
        Ok(value) => {
            let rounded = round_to_places(value, options.decimal_places);
            debug!("solved {expression:?} = {rounded}");
            Ok(rounded)
        },
        Err(e) => {
            debug!("failed to solve {expression:?}: {e}");
            Err(e)
        },
    }
}

/// Evaluates `expression` and reports the outcome as a value/error pair.
///
/// The value is `0.0` whenever an error is present.
///
/// # Examples
/// ```
/// use yac::{SolveError, solve_pair};
///
/// assert_eq!(solve_pair("5 +    5"), (10.0, None));
/// assert_eq!(solve_pair("(-1.24"), (0.0, Some(SolveError::EndBracket)));
/// ```
#[must_use]
pub fn solve_pair(expression: &str) -> (f64, Option<SolveError>) {
    match solve(expression) {
        Ok(value) => (value, None),
        Err(e) => (0.0, Some(e)),
    }
}
