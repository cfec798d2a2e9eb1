//! Test helpers shared across crates.
//!
//! This crate provides callback call logs, panic payload capture, and scalar
//! parsing for behavioural step placeholders.

pub mod calls;
pub mod panic;
pub mod text;
