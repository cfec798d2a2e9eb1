//! Free constructors for [`Outcome`] values.

use crate::Outcome;

/// Wraps `data` in a succeeded outcome.
///
/// The error type is left to inference, so the same call site can feed any
/// `Outcome<T, E>` slot.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, make_success};
///
/// let outcome: Outcome<u32, String> = make_success(7);
/// assert!(outcome.is_success());
/// ```
pub const fn make_success<T, E>(data: T) -> Outcome<T, E> {
    Outcome::Succeeded(data)
}

/// Wraps `error` in a failed outcome.
///
/// The error payload may be any type; it need not implement
/// [`std::error::Error`].
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, make_failure};
///
/// let outcome: Outcome<u32, &str> = make_failure("no such user");
/// assert!(outcome.is_failure());
/// ```
pub const fn make_failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failed(error)
}
