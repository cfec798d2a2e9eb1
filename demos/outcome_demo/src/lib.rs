//! Library facade for the `outcome-demo` binary so integration tests can reuse
//! the configuration types and workflows.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
