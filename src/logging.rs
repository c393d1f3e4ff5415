// src/logging.rs
use env_logger::{Env, Target};
use log::LevelFilter;

/// Map `-q` / `-v` counts onto a default filter level.
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet).as_str().to_ascii_lowercase();
    let initialised = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .target(Target::Stderr)
        .try_init();
    if initialised.is_err() {
        log::debug!("logger already installed");
    }
}
