//! Extracting payloads from an [`Outcome`].
//!
//! `unwrap`, `expect` and `unwrap_error` assert the variant and raise a
//! [`Fault`](crate::Fault) when the assertion does not hold. The defaulting
//! variants never raise.

use std::fmt;

use super::Outcome;
use crate::fault::{self, FaultKind, RESULT_IS_SUCCESSFUL};

impl<T, E> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics when the outcome failed. The panic payload is a
    /// [`Fault`](crate::Fault) of kind [`FaultKind::Unwrap`] that carries the
    /// original error value unchanged.
    ///
    /// The default panic hook prints a [`Fault`](crate::Fault) payload as
    /// `Box<dyn Any>`; call [`fault::install_hook`](crate::fault::install_hook)
    /// to have faults that reach it logged with their kind and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, make_success};
    ///
    /// let outcome: Outcome<i32, String> = make_success(42);
    /// assert_eq!(outcome.unwrap(), 42);
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Succeeded(data) => data,
            Self::Failed(error) => fault::raise(FaultKind::Unwrap, error),
        }
    }

    /// Returns the success payload or `default` for a failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Succeeded(data) => data,
            Self::Failed(_) => default,
        }
    }

    /// Returns the success payload or computes one from the error.
    ///
    /// `fallback` runs only for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, make_failure};
    ///
    /// let outcome: Outcome<usize, &str> = make_failure("four");
    /// assert_eq!(outcome.unwrap_or_else(str::len), 4);
    /// ```
    pub fn unwrap_or_else(self, fallback: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Succeeded(data) => data,
            Self::Failed(error) => fallback(error),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics when the outcome succeeded, with a [`Fault`](crate::Fault) of
    /// kind [`FaultKind::UnwrapError`] whose message is
    /// `"result is successful"`.
    ///
    /// The default panic hook prints a [`Fault`](crate::Fault) payload as
    /// `Box<dyn Any>`; call [`fault::install_hook`](crate::fault::install_hook)
    /// to have faults that reach it logged with their kind and payload.
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Succeeded(_) => {
                fault::raise_message(FaultKind::UnwrapError, RESULT_IS_SUCCESSFUL)
            }
            Self::Failed(error) => error,
        }
    }

    /// Returns the success payload, raising `custom` for a failure.
    ///
    /// On a success `custom` is dropped unused; it is not a log message.
    ///
    /// # Panics
    ///
    /// Panics when the outcome failed. The panic payload is a
    /// [`Fault`](crate::Fault) of kind [`FaultKind::Expect`] that carries
    /// exactly `custom`; the original error is discarded.
    ///
    /// The default panic hook prints a [`Fault`](crate::Fault) payload as
    /// `Box<dyn Any>`; call [`fault::install_hook`](crate::fault::install_hook)
    /// to have faults that reach it logged with their kind and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{catch_fault, make_failure};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ConfigMissing;
    ///
    /// let fault = catch_fault(|| make_failure::<u16, _>("no port").expect(ConfigMissing))
    ///     .expect_err("expect on a failure faults");
    /// assert_eq!(fault.payload::<ConfigMissing>(), Some(&ConfigMissing));
    /// ```
    #[track_caller]
    pub fn expect<C>(self, custom: C) -> T
    where
        C: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Succeeded(data) => data,
            Self::Failed(_) => fault::raise(FaultKind::Expect, custom),
        }
    }
}
