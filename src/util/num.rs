use crate::{error::SolveError, options::clamp_decimal_places};

/// Largest safe integer for an `f64` (`2^53 - 1`): every integer up to it is
/// exactly representable and distinct from its neighbours.
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a `u64` to `f64` if it lies within the safe-integer range.
///
/// Larger values are rejected even when they happen to be representable
/// (such as `10^16`), so every accepted integer literal keeps its neighbours
/// distinct.
///
/// ## Errors
/// Returns `SolveError::LiteralTooLarge` if the value exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use yac::{
///     error::SolveError,
///     util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked},
/// };
///
/// assert_eq!(u64_to_f64_checked(1234), Ok(1234.0));
/// assert_eq!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1),
///            Err(SolveError::LiteralTooLarge));
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64) -> Result<f64, SolveError> {
    if value > MAX_SAFE_U64_INT {
        return Err(SolveError::LiteralTooLarge);
    }

    Ok(value as f64)
}

/// Rounds `value` to `places` decimal places, halves away from zero.
///
/// `places` is clamped to `0..=MAX_DECIMAL_PLACES` so the scale stays finite.
/// This is `round(value * 10^places) / 10^places`, so the result carries the
/// usual binary floating-point representation error of the scaled value.
///
/// ## Example
/// ```
/// use yac::util::num::round_to_places;
///
/// assert_eq!(round_to_places(1.246, 2), 1.25);
/// assert_eq!(round_to_places(1.243, 2), 1.24);
/// assert_eq!(round_to_places(-2.5, 0), -3.0);
/// assert_eq!(round_to_places(1.0, 400), 1.0);
/// ```
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(clamp_decimal_places(places));
    (value * scale).round() / scale
}
