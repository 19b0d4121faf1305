/// Expression parsing.
///
/// Drives the evaluation of one expression with an explicit operator stack,
/// reducing pending operators by priority as new ones are read.
pub mod core;

/// Binary operator parsing.
///
/// Defines the operator alphabet with its priorities and reads the next
/// operator from the cursor.
pub mod operator;

/// Operand parsing.
///
/// Resolves numbers, signed operands and parenthesized groups, recursing into
/// [`core::parse_expression`] for the latter.
pub mod value;
