//! Records which callbacks ran, so tests can assert exclusivity.
//!
//! A [`CallLog`] is a cheap, cloneable handle to a shared list of callback
//! names. Wrap each callback handed to the code under test with
//! [`CallLog::track`] and inspect the log afterwards.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::calls::CallLog;
//!
//! let log = CallLog::new();
//! let double = log.track("double", |v: i32| v * 2);
//! assert_eq!(double(21), 42);
//! assert_eq!(log.names(), vec!["double"]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared, ordered record of callback invocations.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` to the log.
    pub fn record(&self, name: &'static str) {
        self.calls.lock().push(name);
    }

    /// Wraps `callback` so every invocation is recorded under `name`.
    pub fn track<A, R>(
        &self,
        name: &'static str,
        callback: impl FnOnce(A) -> R,
    ) -> impl FnOnce(A) -> R {
        let log = self.clone();
        move |arg| {
            log.record(name);
            callback(arg)
        }
    }

    /// Returns how many times `name` was recorded.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|call| **call == name).count()
    }

    /// Returns every recorded name in invocation order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}
