//! Unsigned-integer validation with a typed error.

use outcome::{Outcome, make_failure, make_success};
use thiserror::Error;

/// Why a number is not an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UintError {
    /// The number is at or below -1.
    #[error("`x` cannot be negative")]
    Negative,
    /// The number has a fractional part or is not finite.
    #[error("`x` must be an integer")]
    NotInteger,
    /// The number is a whole number that does not fit in `u64`.
    #[error("`x` is too large")]
    TooLarge,
}

/// Checks whether `x` is an unsigned integer.
///
/// Values in `(-1, 0)` are reported as non-integers rather than negatives.
/// Whole numbers from 2^64 upwards are integers but do not fit in `u64`.
///
/// # Examples
///
/// ```
/// use outcome_demo::workflows::{UintError, is_uint};
///
/// assert_eq!(is_uint(3.0).unwrap_or(0), 3);
/// assert_eq!(is_uint(-1.0).unwrap_error(), UintError::Negative);
/// assert_eq!(is_uint(0.5).unwrap_error(), UintError::NotInteger);
/// assert_eq!(is_uint(1e20).unwrap_error(), UintError::TooLarge);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "the value is a finite, non-negative whole number at this point"
)]
pub fn is_uint(x: f64) -> Outcome<u64, UintError> {
    if x <= -1.0 {
        make_failure(UintError::Negative)
    } else if !x.is_finite() || x.fract() != 0.0 {
        make_failure(UintError::NotInteger)
    } else if x >= u64::MAX as f64 {
        make_failure(UintError::TooLarge)
    } else {
        make_success(x.abs() as u64)
    }
}

/// Renders the verdict for `x` without unwrapping.
#[must_use]
pub fn describe_uint(x: f64) -> String {
    is_uint(x).match_with(
        |value| format!("{value} is an unsigned integer"),
        |err| format!("error: {err}"),
    )
}
