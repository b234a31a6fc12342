//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

use crate::constants::MAX_CURRENCY;

/// Round a currency amount to whole units, clamping into `0..=MAX_CURRENCY`.
///
/// Non-finite and negative values collapse to zero.
#[must_use]
pub fn round_currency(value: f64) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = value.clamp(0.0, MAX_CURRENCY).round();
    cast::<f64, u64>(clamped).unwrap_or(0)
}

/// Convert a currency amount to f64 while allowing precision loss in a single location.
#[must_use]
pub fn currency_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Convert a count to f64 for ratio math.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Parse trimmed user text into a finite number.
///
/// Returns `None` for empty, unparseable, or non-finite text.
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
