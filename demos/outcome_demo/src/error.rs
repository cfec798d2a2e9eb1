//! Error type surfaced by the demo binary.

use std::path::PathBuf;

use outcome::{Fault, FaultKind};
use thiserror::Error;

/// Failures that abort a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Layered configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Configuration(Box<figment::Error>),
    /// An explicitly requested configuration file is absent.
    #[error("configuration file {} does not exist", .0.display())]
    MissingConfigFile(PathBuf),
    /// The configured log filter does not parse.
    #[error("invalid log filter `{filter}`: {source}")]
    LogFilter {
        /// Filter text as configured.
        filter: String,
        /// Parser diagnostic.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// A global subscriber was already installed.
    #[error("failed to install the tracing subscriber: {0}")]
    Subscriber(String),
    /// The async runtime could not be built.
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// A strict workflow unwrapped a failed outcome.
    #[error("{message}")]
    Fault {
        /// Kind of the fault raised by the outcome.
        kind: FaultKind,
        /// Rendered fault text.
        message: String,
    },
}

impl From<figment::Error> for DemoError {
    fn from(err: figment::Error) -> Self {
        Self::Configuration(Box::new(err))
    }
}

impl From<Fault> for DemoError {
    fn from(fault: Fault) -> Self {
        Self::Fault {
            kind: fault.kind(),
            message: fault.to_string(),
        }
    }
}
