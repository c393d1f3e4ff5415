//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`render`]: turning a classified report into an export document
//! - [`delivery`]: handing a finished document to its destination
//!
//! The use cases depend on these traits only, never on the concrete
//! renderers or sinks in the infrastructure crate.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod delivery;
pub mod render;
