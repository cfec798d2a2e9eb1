//! Variant-preserving transformations and two-armed dispatch.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Replaces the success payload with `data`.
    ///
    /// A failure keeps its error and only changes its data type; `data` is
    /// dropped.
    pub fn to<U>(self, data: U) -> Outcome<U, E> {
        match self {
            Self::Succeeded(_) => Outcome::Succeeded(data),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Applies `f` to the success payload.
    ///
    /// `f` runs exactly once for a success and never for a failure, whose
    /// error passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, make_success};
    ///
    /// let outcome: Outcome<i32, String> = make_success(42);
    /// assert_eq!(outcome.map(|v| v * 2), make_success(84));
    /// ```
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Succeeded(data) => Outcome::Succeeded(f(data)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Runs `on_success` or `on_failure`, whichever matches the variant.
    ///
    /// Exactly one of the callbacks runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, make_failure};
    ///
    /// let outcome: Outcome<i32, &str> = make_failure("bad input");
    /// let rendered = outcome.match_with(|d| format!("ok:{d}"), |e| format!("err:{e}"));
    /// assert_eq!(rendered, "err:bad input");
    /// ```
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Succeeded(data) => on_success(data),
            Self::Failed(error) => on_failure(error),
        }
    }
}
