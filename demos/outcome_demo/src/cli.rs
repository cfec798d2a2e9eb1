//! Command-line surface of the demo.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Walks through the outcome API against small, self-contained workflows.
#[derive(Debug, Parser)]
#[command(
    name = "outcome-demo",
    bin_name = "outcome-demo",
    about = "Explicit success and failure handling with outcome",
    version
)]
pub struct CommandLine {
    /// Overrides configuration discovery with an explicit file path.
    #[arg(long = "config", short = 'c', value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    /// Number the guessing game is looking for.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub target: Option<i64>,
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, value_name = "FILTER", global = true)]
    pub log_level: Option<String>,
    /// Selected workflow to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Workflows exposed by the demo.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Guesses the configured target number.
    Guess {
        /// Guesses to try, in order.
        #[arg(required = true, allow_negative_numbers = true)]
        guesses: Vec<i64>,
    },
    /// Checks whether a number is an unsigned integer.
    CheckUint {
        /// Number to check.
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Unwraps the outcome, faulting on invalid input.
        #[arg(long)]
        strict: bool,
    },
    /// Doubles a number through `map`.
    Double {
        /// Number to double.
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Renders a hand-built outcome through `match_with`.
    Render {
        /// Variant to build.
        #[arg(value_enum)]
        variant: RenderVariant,
        /// Payload of the outcome.
        value: String,
    },
    /// Looks a product up in the configured catalogue asynchronously.
    Product {
        /// Catalogue identifier.
        id: u32,
        /// Unwraps the outcome, faulting when the lookup fails.
        #[arg(long)]
        strict: bool,
    },
}

/// Variant selected by the `render` workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderVariant {
    /// A succeeded outcome.
    Ok,
    /// A failed outcome.
    Err,
}
