//! Capturing panic payloads without leaking them into the test harness.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Result, anyhow};

/// Runs `operation` and returns the payload it panicked with.
///
/// The closure is treated as unwind safe; callers only inspect the payload.
///
/// # Errors
///
/// Returns an error when `operation` completes without panicking.
///
/// # Examples
///
/// ```
/// use outcome_test_helpers::panic::panic_payload;
///
/// let payload =
///     panic_payload::<_, ()>(|| std::panic::panic_any(7_u8)).expect("closure panics");
/// assert_eq!(payload.downcast_ref::<u8>(), Some(&7));
/// ```
pub fn panic_payload<F, R>(operation: F) -> Result<Box<dyn Any + Send>>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(_) => Err(anyhow!("expected the operation to panic")),
        Err(payload) => Ok(payload),
    }
}

/// Runs `operation` and returns its panic payload downcast to `P`.
///
/// # Errors
///
/// Returns an error when `operation` does not panic or panics with a payload
/// of another type.
pub fn panic_payload_as<P, F, R>(operation: F) -> Result<P>
where
    P: Any,
    F: FnOnce() -> R,
{
    panic_payload(operation)?
        .downcast::<P>()
        .map(|payload| *payload)
        .map_err(|_| anyhow!("panic payload has an unexpected type"))
}
