//! Dispatches a parsed command to its workflow and writes the report.

use std::io::Write;
use std::sync::Arc;

use outcome::{Outcome, catch_fault};

use crate::cli::Commands;
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::workflows::{
    ProductError, describe_uint, double, guess_lines, is_uint, product_identifier, render,
};

/// Runs `command` against `config`, writing its report to `out`.
///
/// # Errors
///
/// Returns [`DemoError::Fault`] when a strict workflow unwraps a failed
/// outcome, [`DemoError::Runtime`] when the async runtime cannot start and
/// [`DemoError::Output`] when writing fails.
pub fn run<W: Write>(
    command: &Commands,
    config: &DemoConfig,
    out: &mut W,
) -> Result<(), DemoError> {
    tracing::info!(?command, "running workflow");
    tracing::debug!(
        guess_target = config.target,
        products = config.catalogue.len(),
        "resolved configuration"
    );
    match command {
        Commands::Guess { guesses } => {
            for line in guess_lines(config.target, guesses) {
                writeln!(out, "{line}")?;
            }
        }
        Commands::CheckUint { value, strict } => {
            if *strict {
                let checked = is_uint(*value);
                let number = catch_fault(move || checked.unwrap())?;
                writeln!(out, "{number} is an unsigned integer")?;
            } else {
                writeln!(out, "{}", describe_uint(*value))?;
            }
        }
        Commands::Double { value } => writeln!(out, "{}", double(*value))?,
        Commands::Render { variant, value } => writeln!(out, "{}", render(*variant, value))?,
        Commands::Product { id, strict } => {
            let looked_up = lookup_product(config, *id)?;
            if let Some(err) = looked_up.error() {
                tracing::warn!(id, %err, "product lookup failed");
            }
            if *strict {
                let identifier = catch_fault(move || looked_up.unwrap())?;
                writeln!(out, "{identifier}")?;
            } else {
                let line =
                    looked_up.match_with(|identifier| identifier, |err| format!("error: {err}"));
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

fn lookup_product(
    config: &DemoConfig,
    id: u32,
) -> Result<Outcome<String, ProductError>, DemoError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(DemoError::Runtime)?;
    let catalogue = Arc::new(config.catalogue.clone());
    Ok(runtime.block_on(product_identifier(catalogue, id)))
}
