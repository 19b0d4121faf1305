/// Evaluation errors.
///
/// Defines every way a single expression can fail: malformed literals,
/// misplaced signs, unbalanced brackets, trailing input and division by zero.
pub mod solve_error;

pub use solve_error::SolveError;
