use robotict_domain::{ProbeOutcome, Report};
use robotict_ports::delivery::Delivered;

/// Raw inputs of one classification run, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationPlan {
    pub min: i64,
    pub max: i64,
    pub first: i64,
    pub second: i64,
    pub probe: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ClassificationOutput {
    pub report: Report,
    pub probe: Option<ProbeOutcome>,
}

#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub file_name: String,
    pub delivered: Delivered,
}
