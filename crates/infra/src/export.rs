// crates/infra/src/export.rs
pub mod formatters;

use std::io::Write;

use formatters::{output_delimited, output_json, output_text};
use robotict_domain::{ExportFormat, Report};
use robotict_ports::render::ReportRenderer;
use robotict_shared_kernel::Result;

pub struct TextRenderer;
pub struct CsvRenderer;
pub struct JsonRenderer;

impl ReportRenderer for TextRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn render(&self, report: &Report, mut out: &mut dyn Write) -> Result<()> {
        output_text(report, &mut out)
    }
}

impl ReportRenderer for CsvRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, report: &Report, mut out: &mut dyn Write) -> Result<()> {
        output_delimited(report, ',', &mut out)
    }
}

impl ReportRenderer for JsonRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, report: &Report, mut out: &mut dyn Write) -> Result<()> {
        output_json(report, &mut out)
    }
}

static TEXT: TextRenderer = TextRenderer;
static CSV: CsvRenderer = CsvRenderer;
static JSON: JsonRenderer = JsonRenderer;

/// Renderer for the requested export format.
pub fn renderer_for(format: ExportFormat) -> &'static dyn ReportRenderer {
    match format {
        ExportFormat::Text => &TEXT,
        ExportFormat::Csv => &CSV,
        ExportFormat::Json => &JSON,
    }
}
