//! Opt-in panic hook that reports faults as `tracing` events.

use std::any::Any;
use std::panic::{self, PanicHookInfo};

use super::Fault;

/// Installs a panic hook that logs [`Fault`] panics with `tracing::error!`.
///
/// Panics with any other payload go to the hook that was installed before this
/// call. Faults are reported with structured `kind`, `payload` and `location`
/// fields instead of the default hook's opaque `Box<dyn Any>` line.
///
/// Nothing is logged unless this function has been called.
pub fn install_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| match as_fault(info.payload()) {
        Some(fault) => report(fault, info),
        None => previous(info),
    }));
}

pub(super) fn as_fault(payload: &(dyn Any + Send)) -> Option<&Fault> {
    payload.downcast_ref::<Fault>()
}

fn report(fault: &Fault, info: &PanicHookInfo<'_>) {
    let location = info
        .location()
        .map_or_else(|| String::from("<unknown>"), ToString::to_string);
    tracing::error!(
        kind = ?fault.kind(),
        payload = %fault.message(),
        %location,
        "{}",
        fault.kind()
    );
}
