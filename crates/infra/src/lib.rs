// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod export;
pub mod persistence;
pub mod settings;
pub mod sinks;
