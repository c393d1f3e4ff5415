use robotict_domain::{DivisorPair, NumberRange, ProbeOutcome, Report};
use robotict_ports::{delivery::DocumentSink, render::ReportRenderer};
use robotict_shared_kernel::{ApplicationError, Result, RobotIctError};

use crate::dto::{ClassificationOutput, ClassificationPlan, ExportOutput};

/// Classifies a whole range, refusing ranges longer than `max_len`.
pub struct ClassifyRange {
    max_len: u64,
}

impl ClassifyRange {
    pub const DEFAULT_MAX_LEN: u64 = 1_000_000;

    pub fn new(max_len: u64) -> Self {
        Self { max_len }
    }

    pub fn run(&self, plan: &ClassificationPlan) -> Result<ClassificationOutput> {
        let range = NumberRange::new(plan.min, plan.max)?;
        let divisors = DivisorPair::new(plan.first, plan.second)?;
        self.check_len(range)?;

        let report = Report::build(range, divisors);
        log::debug!(
            "classified {} numbers in {range} with divisors {}/{}",
            report.len(),
            divisors.first(),
            divisors.second()
        );

        let probe = plan.probe.map(|n| ProbeOutcome::check(n, range, divisors));
        Ok(ClassificationOutput { report, probe })
    }

    fn check_len(&self, range: NumberRange) -> Result<()> {
        let len = range.len();
        if len > u128::from(self.max_len) {
            return Err(ApplicationError::RangeTooLarge {
                min: range.min(),
                max: range.max(),
                len,
                limit: self.max_len,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ClassifyRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LEN)
    }
}

/// Renders a report and hands it to a sink under its suggested file name.
pub struct ExportReport<'a> {
    renderer: &'a dyn ReportRenderer,
    sink: &'a dyn DocumentSink,
}

impl<'a> ExportReport<'a> {
    pub fn new(renderer: &'a dyn ReportRenderer, sink: &'a dyn DocumentSink) -> Self {
        Self { renderer, sink }
    }

    pub fn run(&self, report: &Report) -> Result<ExportOutput> {
        let format = self.renderer.format();
        let file_name = format.file_name(report.range);

        let contents = self.renderer.render_to_vec(report).map_err(|e| ApplicationError::RenderFailed {
            format: format.to_string(),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;

        let delivered = self.sink.deliver(&file_name, &contents).map_err(|e| delivery_failed(&file_name, e))?;
        log::info!("exported {file_name} ({} bytes) to {}", delivered.bytes, delivered.location);

        Ok(ExportOutput { file_name, delivered })
    }
}

fn delivery_failed(name: &str, err: RobotIctError) -> RobotIctError {
    ApplicationError::DeliveryFailed {
        name: name.to_string(),
        reason: err.to_string(),
        source: Some(Box::new(err)),
    }
    .into()
}
