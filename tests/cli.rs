//! Black-box tests of the `robotict` binary.

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
