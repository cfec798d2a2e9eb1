//! Borrowing inspection of an [`Outcome`].

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Returns `true` when the outcome is [`Outcome::Succeeded`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, make_success};
    ///
    /// let outcome: Outcome<i32, ()> = make_success(1);
    /// assert!(outcome.is_success());
    /// ```
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` when the outcome is [`Outcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `predicate(&data)` for a success and `false` for a failure.
    ///
    /// The predicate is not invoked on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, make_success};
    ///
    /// let outcome: Outcome<i32, ()> = make_success(5);
    /// assert!(outcome.is_success_and(|v| *v > 3));
    /// assert!(!outcome.is_success_and(|v| *v > 10));
    /// ```
    #[must_use]
    pub fn is_success_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Succeeded(data) => predicate(data),
            Self::Failed(_) => false,
        }
    }

    /// Returns `predicate(&error)` for a failure and `false` for a success.
    ///
    /// The predicate is not invoked on a success.
    #[must_use]
    pub fn is_failure_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Self::Succeeded(_) => false,
            Self::Failed(error) => predicate(error),
        }
    }

    /// Borrows the success payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Succeeded(data) => Some(data),
            Self::Failed(_) => None,
        }
    }

    /// Borrows the error payload, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Succeeded(data) => Outcome::Succeeded(data),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }
}
