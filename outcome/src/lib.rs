//! An explicit two-variant outcome type for composing fallible operations.
//!
//! [`Outcome`] is either [`Outcome::Succeeded`] with a data payload or
//! [`Outcome::Failed`] with an error payload. Expected failures travel as
//! values; only the unwrap family ([`Outcome::unwrap`], [`Outcome::expect`]
//! and [`Outcome::unwrap_error`]) turns a mismatched variant into a panic,
//! carrying a [`Fault`] that keeps the original payload intact.
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, make_failure, make_success};
//!
//! let doubled: Outcome<i32, String> = make_success(42).map(|v| v * 2);
//! assert_eq!(doubled.unwrap(), 84);
//!
//! let failed: Outcome<i32, &str> = make_failure("bad input");
//! assert_eq!(failed.unwrap_or(0), 0);
//!
//! let rendered = make_failure::<i32, _>("bad input")
//!     .match_with(|d| format!("ok:{d}"), |e| format!("err:{e}"));
//! assert_eq!(rendered, "err:bad input");
//! ```
//!
//! Contract violations are recoverable at an outer boundary:
//!
//! ```
//! use outcome::{FaultKind, catch_fault, make_failure};
//!
//! let fault = catch_fault(|| make_failure::<u8, _>("x").unwrap())
//!     .expect_err("unwrapping a failure raises a fault");
//! assert_eq!(fault.kind(), FaultKind::Unwrap);
//! assert_eq!(fault.payload::<&str>(), Some(&"x"));
//! ```
//!
//! A fault that escapes to the default panic hook is reported only as
//! `Box<dyn Any>`, since its payload is a [`Fault`] rather than a string.
//! Binaries that let faults reach the top level should call
//! [`fault::install_hook`] early, which logs each fault's kind, rendered
//! payload and location through `tracing`. The same text is available from a
//! caught fault's `Display`:
//!
//! ```
//! use outcome::{catch_fault, make_failure};
//!
//! outcome::fault::install_hook();
//! let fault = catch_fault(|| make_failure::<u8, _>("disk full").unwrap())
//!     .expect_err("unwrapping a failure raises a fault");
//! assert_eq!(
//!     fault.to_string(),
//!     "called `Outcome::unwrap` on a failed outcome: \"disk full\""
//! );
//! ```

mod construct;
mod deferred;
pub mod fault;
mod outcome;
mod result_ext;

pub use construct::{make_failure, make_success};
pub use deferred::{DeferOutcome, FutureOutcome, defer, settled};
pub use fault::{Fault, FaultKind, catch_fault};
pub use outcome::Outcome;
pub use result_ext::OutcomeResultExt;
