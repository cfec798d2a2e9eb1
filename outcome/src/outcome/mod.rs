//! The [`Outcome`] type and its operation set.
//!
//! The operations are split by concern: inspection borrows the outcome,
//! unwrapping and transformation consume it, and the conversions bridge to
//! [`Result`].

mod conversions;
mod inspect;
mod transform;
mod unwrap;

/// Either a successful computation carrying `T` or a failed one carrying `E`.
///
/// The variant is the discriminant: there is no separate flag that could
/// disagree with the payload. `T` and `E` are unconstrained and independent.
///
/// Payloads are never mutated in place. Every transformation consumes the
/// receiver and returns a new outcome with the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an outcome may be a failure that should be handled"]
pub enum Outcome<T, E> {
    /// The computation succeeded with `data`.
    Succeeded(T),
    /// The computation failed with `error`.
    Failed(E),
}
