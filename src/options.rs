/// Default maximum parenthesis nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default number of decimal places kept in a result.
pub const DEFAULT_DECIMAL_PLACES: i32 = 2;
/// Largest number of decimal places a result can be rounded to.
pub const MAX_DECIMAL_PLACES: i32 = 15;

/// Tunable limits for a single evaluation.
///
/// The defaults reproduce the classic behaviour: results rounded to two
/// decimal places and parentheses nested at most [`DEFAULT_MAX_DEPTH`] deep.
///
/// # Example
/// ```
/// use yac::{Options, solve_with};
///
/// let options = Options::default().with_decimal_places(3);
/// assert_eq!(solve_with("1/8", &options), Ok(0.125));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of simultaneously open parentheses.
    pub max_depth:      usize,
    /// Decimal places the final result is rounded to, within
    /// `0..=MAX_DECIMAL_PLACES`.
    pub decimal_places: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth:      DEFAULT_MAX_DEPTH,
               decimal_places: DEFAULT_DECIMAL_PLACES, }
    }
}

impl Options {
    /// Returns a copy with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy that rounds results to `decimal_places`, clamped to
    /// `0..=MAX_DECIMAL_PLACES`.
    #[must_use]
    pub const fn with_decimal_places(mut self, decimal_places: i32) -> Self {
        self.decimal_places = clamp_decimal_places(decimal_places);
        self
    }
}

/// Limits a decimal place count to `0..=MAX_DECIMAL_PLACES`.
#[must_use]
pub const fn clamp_decimal_places(places: i32) -> i32 {
    if places < 0 {
        0
    } else if places > MAX_DECIMAL_PLACES {
        MAX_DECIMAL_PLACES
    } else {
        places
    }
}
