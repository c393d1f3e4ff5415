// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::args_groups::{DivisorOptions, OutputOptions, RangeOptions, VerbosityOptions};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "robotict",
    version = crate::VERSION,
    about = "Classify a range of integers by two divisors (Robot / ICT / RobotICT)",
    after_help = "Settings are layered: built-in defaults, then --config, then explicit flags.\nRUST_LOG overrides -v/-q."
)]
pub struct Args {
    #[command(flatten)]
    pub range: RangeOptions,

    #[command(flatten)]
    pub divisors: DivisorOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Settings file (.json, .yaml or .yml); flags override its values
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: VerbosityOptions,
}
