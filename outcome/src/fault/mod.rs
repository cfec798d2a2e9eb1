//! Faults raised when an [`Outcome`](crate::Outcome) is unwrapped against its
//! variant.
//!
//! A fault is a contract violation, not an expected failure. It travels as a
//! panic whose payload is a [`Fault`]. The fault keeps the value that caused it
//! (the original error for `unwrap`, the caller's replacement for `expect`)
//! with its concrete type, so an outer handler can recover it through
//! [`Fault::payload`] or [`Fault::into_payload`].
//!
//! The standard panic hook cannot render a [`Fault`] and prints `Box<dyn Any>`
//! instead. [`install_hook`] replaces that line with a `tracing` event naming
//! the kind, the rendered payload and the panic location.

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use thiserror::Error;

mod hook;

pub use hook::install_hook;

/// Message carried by a fault raised from `unwrap_error` on a success.
pub const RESULT_IS_SUCCESSFUL: &str = "result is successful";

/// The unwrap-family operation that raised a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// `unwrap` was called on a failed outcome.
    Unwrap,
    /// `expect` was called on a failed outcome.
    Expect,
    /// `unwrap_error` was called on a succeeded outcome.
    UnwrapError,
}

impl FaultKind {
    /// Describes the violated contract.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Unwrap => "called `Outcome::unwrap` on a failed outcome",
            Self::Expect => "called `Outcome::expect` on a failed outcome",
            Self::UnwrapError => "called `Outcome::unwrap_error` on a succeeded outcome",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Panic payload raised by the unwrap family of [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
#[error("{kind}: {rendered}")]
pub struct Fault {
    kind: FaultKind,
    rendered: String,
    payload: Box<dyn Any + Send>,
}

impl Fault {
    /// Returns the operation that raised the fault.
    #[must_use]
    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns the payload rendered with its `Debug` implementation.
    ///
    /// Faults raised by `unwrap_error` render as [`RESULT_IS_SUCCESSFUL`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.rendered
    }

    /// Borrows the payload when it has type `P`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{catch_fault, make_failure};
    ///
    /// let fault = catch_fault(|| make_failure::<(), _>(404_u16).unwrap())
    ///     .expect_err("unwrap on a failure faults");
    /// assert_eq!(fault.payload::<u16>(), Some(&404));
    /// assert_eq!(fault.payload::<u32>(), None);
    /// ```
    #[must_use]
    pub fn payload<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Takes the payload out of the fault when it has type `P`.
    ///
    /// # Errors
    ///
    /// Returns the fault unchanged when the payload is not a `P`.
    pub fn into_payload<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload, ..self }),
        }
    }
}

/// Runs `operation`, converting a raised [`Fault`] into `Err`.
///
/// Panics whose payload is not a [`Fault`] are resumed untouched, so ordinary
/// bugs keep unwinding past this boundary.
///
/// # Errors
///
/// Returns the [`Fault`] raised by an unwrap-family call inside `operation`.
///
/// # Examples
///
/// ```
/// use outcome::{FaultKind, catch_fault, make_success};
///
/// let fault = catch_fault(|| make_success::<_, String>(42).unwrap_error())
///     .expect_err("unwrap_error on a success faults");
/// assert_eq!(fault.kind(), FaultKind::UnwrapError);
/// assert_eq!(fault.message(), "result is successful");
/// ```
pub fn catch_fault<F, R>(operation: F) -> Result<R, Fault>
where
    F: FnOnce() -> R + UnwindSafe,
{
    panic::catch_unwind(operation).map_err(|payload| match payload.downcast::<Fault>() {
        Ok(fault) => *fault,
        Err(other) => panic::resume_unwind(other),
    })
}

/// Raises a fault carrying `payload` verbatim.
#[track_caller]
pub(crate) fn raise<P>(kind: FaultKind, payload: P) -> !
where
    P: fmt::Debug + Send + 'static,
{
    let rendered = format!("{payload:?}");
    panic::panic_any(Fault {
        kind,
        rendered,
        payload: Box::new(payload),
    })
}

/// Raises a fault whose payload is a static message.
#[track_caller]
pub(crate) fn raise_message(kind: FaultKind, message: &'static str) -> ! {
    panic::panic_any(Fault {
        kind,
        rendered: message.to_owned(),
        payload: Box::new(message),
    })
}
