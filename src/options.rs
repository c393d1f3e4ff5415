// src/options.rs
use robotict_domain::ExportFormat;

/// What the binary writes to stdout (or to `--output`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    /// The export document behind this format; `None` for the terminal table.
    pub const fn export(self) -> Option<ExportFormat> {
        match self {
            Self::Table => None,
            Self::Text => Some(ExportFormat::Text),
            Self::Csv => Some(ExportFormat::Csv),
            Self::Json => Some(ExportFormat::Json),
        }
    }
}
