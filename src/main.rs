// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use robotict::{app, cli, logging};

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let config = cli::build_config(args)?;
    let outcome = app::run(&config)?;
    if let Some(saved) = outcome.saved {
        eprintln!("Saved {}", saved.delivered.location);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.verbosity.verbose, args.verbosity.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
