//! # Domain
//!
//! The RobotICT rules: bounds and divisors, the sequence generator, the
//! classifier, label statistics and the report handed to exporters.
//! Everything here is pure and free of I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classify;
pub mod config;
pub mod model;
pub mod options;
pub mod probe;
pub mod sequence;

pub use analytics::Statistics;
pub use classify::{Category, Label, classify};
pub use config::{DivisorPair, NumberRange};
pub use model::{ClassifiedNumber, Report};
pub use options::ExportFormat;
pub use probe::ProbeOutcome;
pub use sequence::generate;
