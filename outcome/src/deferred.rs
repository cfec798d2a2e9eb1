//! Outcomes produced by asynchronous computations.
//!
//! [`FutureOutcome`] is a plain boxed [`Future`]. Whatever executor polls it
//! owns scheduling, ordering and cancellation; once it settles it yields
//! exactly one [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome::{FutureOutcome, defer, make_failure, make_success};
//!
//! fn lookup(id: u32) -> FutureOutcome<'static, String, String> {
//!     defer(async move {
//!         if id == 3 {
//!             make_success(String::from("Universe 9 by Samsung"))
//!         } else {
//!             make_failure(format!("product {id} not found"))
//!         }
//!     })
//! }
//!
//! let _pending = lookup(3);
//! ```

use std::future::{self, Future};
use std::pin::Pin;

use crate::Outcome;

/// A boxed, sendable future that settles into one [`Outcome`].
pub type FutureOutcome<'a, T, E> = Pin<Box<dyn Future<Output = Outcome<T, E>> + Send + 'a>>;

/// Boxes `future` as a [`FutureOutcome`].
#[must_use = "futures do nothing unless polled"]
pub fn defer<'a, T, E, F>(future: F) -> FutureOutcome<'a, T, E>
where
    F: Future<Output = Outcome<T, E>> + Send + 'a,
{
    Box::pin(future)
}

/// Returns a [`FutureOutcome`] that is already settled with `outcome`.
#[must_use = "futures do nothing unless polled"]
pub fn settled<'a, T, E>(outcome: Outcome<T, E>) -> FutureOutcome<'a, T, E>
where
    T: Send + 'a,
    E: Send + 'a,
{
    Box::pin(future::ready(outcome))
}

/// Boxes any sendable future that produces an [`Outcome`].
pub trait DeferOutcome<'a, T, E> {
    /// Erases the concrete future type into a [`FutureOutcome`].
    #[must_use = "futures do nothing unless polled"]
    fn deferred(self) -> FutureOutcome<'a, T, E>;
}

impl<'a, T, E, F> DeferOutcome<'a, T, E> for F
where
    F: Future<Output = Outcome<T, E>> + Send + 'a,
{
    fn deferred(self) -> FutureOutcome<'a, T, E> {
        defer(self)
    }
}
