// crates/ports/src/render.rs
use std::io::Write;

use robotict_domain::{ExportFormat, Report};
use robotict_shared_kernel::Result;

/// Port for serialising a report into one export format.
pub trait ReportRenderer: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()>;

    /// Render into an in-memory buffer.
    fn render_to_vec(&self, report: &Report) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render(report, &mut buf)?;
        Ok(buf)
    }
}
