use clap::ValueEnum;
use robotict_domain::ExportFormat;

use crate::options::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// Probe decision, statistics and the aligned number list
    Table,
    /// Plain-text export document
    #[value(alias = "txt")]
    Text,
    /// CSV export document
    Csv,
    /// JSON export document
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliExportFormat {
    #[value(alias = "txt")]
    Text,
    Csv,
    Json,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(value: CliExportFormat) -> Self {
        match value {
            CliExportFormat::Text => ExportFormat::Text,
            CliExportFormat::Csv => ExportFormat::Csv,
            CliExportFormat::Json => ExportFormat::Json,
        }
    }
}
