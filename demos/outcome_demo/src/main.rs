//! Demo entry-point: load layered config, install logging, run one workflow.

use std::io;

use clap::Parser;

use outcome_demo::app;
use outcome_demo::cli::CommandLine;
use outcome_demo::config::load_for;
use outcome_demo::error::DemoError;
use outcome_demo::telemetry;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<(), DemoError> {
    let cli = CommandLine::parse();
    let config = load_for(&cli)?;
    telemetry::init(&config.log_level)?;
    // Chains onto the color-eyre hook so foreign panics keep their report.
    outcome::fault::install_hook();
    let mut stdout = io::stdout().lock();
    app::run(&cli.command, &config, &mut stdout)
}
