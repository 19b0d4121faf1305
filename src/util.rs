/// Numeric conversion and rounding helpers.
///
/// This module provides the lossless integer-to-float conversion used when a
/// literal is read, and the decimal rounding applied to every final result.
/// Conversions return a `Result`, which is `Ok` only if no precision is lost.
pub mod num;
