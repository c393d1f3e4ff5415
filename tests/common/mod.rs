// tests/common/mod.rs
//! Shared fixtures for the integration suites.

use robotict_domain::{DivisorPair, ExportFormat, NumberRange, Report};
use robotict_infra::export::renderer_for;

pub fn report(min: i64, max: i64, first: i64, second: i64) -> Report {
    let range = NumberRange::new(min, max).expect("valid range");
    let divisors = DivisorPair::new(first, second).expect("valid divisors");
    Report::build(range, divisors)
}

#[allow(dead_code)]
pub fn render(format: ExportFormat, report: &Report) -> String {
    let bytes = renderer_for(format).render_to_vec(report).expect("render succeeds");
    String::from_utf8(bytes).expect("utf-8 document")
}
