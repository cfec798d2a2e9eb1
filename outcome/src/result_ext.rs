//! Extensions for lifting a [`Result`] into an [`Outcome`] concisely.
//!
//! These helpers replace `Outcome::from(result)` and
//! `.map_err(Into::into)` chains at call sites that receive `Result`s from
//! the standard library or other crates.
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, OutcomeResultExt};
//!
//! let parsed: Outcome<u8, _> = "42".parse::<u8>().into_outcome();
//! assert_eq!(parsed.unwrap_or(0), 42);
//! ```

use crate::Outcome;

/// Lifts a `Result<T, E>` into an `Outcome`.
pub trait OutcomeResultExt<T, E> {
    /// Convert `Ok` into [`Outcome::Succeeded`] and `Err` into
    /// [`Outcome::Failed`].
    fn into_outcome(self) -> Outcome<T, E>;

    /// Like [`OutcomeResultExt::into_outcome`], converting the error with
    /// `Into`.
    fn into_outcome_as<F>(self) -> Outcome<T, F>
    where
        E: Into<F>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }

    fn into_outcome_as<F>(self) -> Outcome<T, F>
    where
        E: Into<F>,
    {
        match self {
            Ok(data) => Outcome::Succeeded(data),
            Err(error) => Outcome::Failed(error.into()),
        }
    }
}
