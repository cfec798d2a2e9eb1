//! Transformation and rendering of hand-built outcomes.

use outcome::{Outcome, make_failure, make_success};

use crate::cli::RenderVariant;

/// Doubles `value` through [`Outcome::map`], saturating at the `i64` bounds.
#[must_use]
pub fn double(value: i64) -> i64 {
    make_success::<i64, ()>(value)
        .map(|number| number.saturating_mul(2))
        .unwrap_or(value)
}

/// Builds an outcome of `variant` around `value` and renders both arms.
#[must_use]
pub fn render(variant: RenderVariant, value: &str) -> String {
    let outcome: Outcome<&str, &str> = match variant {
        RenderVariant::Ok => make_success(value),
        RenderVariant::Err => make_failure(value),
    };
    outcome.match_with(|data| format!("MyData:{data}"), |err| format!("ERROR: {err}"))
}
