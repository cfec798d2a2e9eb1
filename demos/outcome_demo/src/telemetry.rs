//! Tracing subscriber set-up for the demo binary.

use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

/// Parses a configured log level into a filter.
///
/// # Errors
///
/// Returns [`DemoError::LogFilter`] when `level` is not a valid directive.
pub fn parse_level(level: &str) -> Result<EnvFilter, DemoError> {
    EnvFilter::try_new(level).map_err(|source| DemoError::LogFilter {
        filter: level.to_owned(),
        source,
    })
}

/// Installs a formatting subscriber that writes to standard error.
///
/// `RUST_LOG` wins over `level` whenever it holds a valid filter.
///
/// # Errors
///
/// Returns [`DemoError::LogFilter`] for an invalid level and
/// [`DemoError::Subscriber`] when a global subscriber is already set.
pub fn init(level: &str) -> Result<(), DemoError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| parse_level(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| DemoError::Subscriber(err.to_string()))
}
