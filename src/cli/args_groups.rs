// src/cli/args_groups.rs
//! Sub-structures for organizing CLI arguments into logical groups.

use std::path::PathBuf;

use clap::Args;

use super::{
    parsers,
    value_enum::{CliExportFormat, CliOutputFormat},
};

/// Range and probe options
#[derive(Args, Debug)]
pub struct RangeOptions {
    /// Lower bound of the range (inclusive) [default: 1]
    #[arg(long, allow_negative_numbers = true, help_heading = "Range")]
    pub min: Option<i64>,

    /// Upper bound of the range (inclusive) [default: 100]
    #[arg(long, allow_negative_numbers = true, help_heading = "Range")]
    pub max: Option<i64>,

    /// Single number to classify against the range [default: 15]
    #[arg(long, allow_negative_numbers = true, help_heading = "Range")]
    pub probe: Option<i64>,

    /// Skip the probe line
    #[arg(long, conflicts_with = "probe", help_heading = "Range")]
    pub no_probe: bool,
}

/// Divisor options
#[derive(Args, Debug)]
pub struct DivisorOptions {
    /// First divisor; multiples are labelled "Robot" [default: 3]
    #[arg(short = 'a', long, allow_negative_numbers = true, help_heading = "Divisors")]
    pub first: Option<i64>,

    /// Second divisor; multiples are labelled "ICT" [default: 5]
    #[arg(short = 'b', long, allow_negative_numbers = true, help_heading = "Divisors")]
    pub second: Option<i64>,
}

/// Output-related options
#[derive(Args, Debug)]
pub struct OutputOptions {
    /// What to write to stdout (or to --output)
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Also save the export document in this format to --out-dir
    #[arg(long, value_enum, help_heading = "Output")]
    pub save: Option<CliExportFormat>,

    /// Directory for --save
    #[arg(long, value_hint = clap::ValueHint::DirPath, default_value = ".", help_heading = "Output")]
    pub out_dir: PathBuf,

    /// Write the stdout document to this file instead
    #[arg(long, value_hint = clap::ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Largest range (count of numbers) accepted [default: 1000000]
    #[arg(long, value_parser = parsers::parse_positive_u64, help_heading = "Output")]
    pub max_len: Option<u64>,
}

/// Log verbosity options
#[derive(Args, Debug)]
pub struct VerbosityOptions {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
