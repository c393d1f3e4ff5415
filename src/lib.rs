//! # robotict
//!
//! Command-line front end for the RobotICT validator: classifies every integer
//! of a range by two divisors, prints a probe decision with statistics, and
//! exports the classified list as text, CSV or JSON.
//!
//! The work itself lives in the workspace crates; this crate only parses
//! arguments, layers configuration and wires sinks to the use cases.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
