//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: classify a range (with an optional probe number) and
//!   export the resulting report through the render/delivery ports
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{ClassificationOutput, ClassificationPlan, ExportOutput};
pub use orchestrator::{ClassifyRange, ExportReport};
