// src/app.rs
use robotict_infra::{
    export::renderer_for,
    sinks::{DirectorySink, FileSink, StdoutSink},
};
use robotict_ports::delivery::DocumentSink;
use robotict_shared_kernel::{ErrorContext, Result};
use robotict_usecase::{ClassificationOutput, ClassifyRange, ExportOutput, ExportReport};

use crate::{config::Config, presentation::render_table};

/// What one invocation produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub classified: ClassificationOutput,
    pub saved: Option<ExportOutput>,
}

/// Classify the configured range, write the primary document and the optional saved export.
pub fn run(config: &Config) -> Result<RunOutcome> {
    let classified = ClassifyRange::new(config.max_len).run(&config.plan())?;

    let primary = primary_sink(config);
    emit(config, &classified, &*primary)?;

    let saved = match config.save {
        Some(format) => {
            let dir = DirectorySink::new(&config.out_dir);
            let exported = ExportReport::new(renderer_for(format), &dir)
                .run(&classified.report)
                .with_context(|| format!("while saving to {}", config.out_dir.display()))?;
            Some(exported)
        }
        None => None,
    };

    Ok(RunOutcome { classified, saved })
}

fn primary_sink(config: &Config) -> Box<dyn DocumentSink> {
    match &config.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StdoutSink),
    }
}

fn emit(config: &Config, classified: &ClassificationOutput, sink: &dyn DocumentSink) -> Result<()> {
    match config.format.export() {
        Some(format) => {
            ExportReport::new(renderer_for(format), sink).run(&classified.report)?;
        }
        None => {
            let mut table = Vec::new();
            render_table(classified, &mut table)?;
            sink.deliver("robotict_table.txt", &table)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use robotict_domain::ExportFormat;
    use robotict_shared_kernel::{ApplicationError, DomainError, RobotIctError};

    use super::*;
    use crate::{config::ConfigBuilder, options::OutputFormat};

    #[test]
    fn writes_output_file_and_saved_export() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("table.txt");
        let config = ConfigBuilder::default()
            .max(15)
            .output(Some(output.clone()))
            .save(Some(ExportFormat::Csv))
            .out_dir(dir.path())
            .build()
            .expect("config builds");

        let outcome = run(&config).expect("run succeeds");

        let table = fs::read_to_string(&output).expect("table written");
        assert!(table.contains("Probe 15: RobotICT"), "{table}");
        let saved = outcome.saved.expect("export saved");
        assert_eq!(saved.file_name, "robotict_numbers_1-15.csv");
        assert!(dir.path().join("robotict_numbers_1-15.csv").is_file());
        assert_eq!(outcome.classified.report.len(), 15);
    }

    #[test]
    fn export_format_goes_to_the_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("numbers.json");
        let config = ConfigBuilder::default()
            .max(6)
            .format(OutputFormat::Json)
            .output(Some(output.clone()))
            .build()
            .expect("config builds");

        run(&config).expect("run succeeds");

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).expect("json written")).expect("valid json");
        assert_eq!(json["numbers"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn inverted_range_surfaces_domain_error() {
        let config = ConfigBuilder::default().min(5).max(1).build().expect("config builds");
        let err = run(&config).unwrap_err();
        assert_eq!(err.as_domain(), Some(&DomainError::InvalidRange { min: 5, max: 1 }));
    }

    #[test]
    fn oversized_range_is_refused() {
        let config = ConfigBuilder::default().max(1_000).max_len(10_u64).build().expect("config builds");
        let err = run(&config).unwrap_err();
        assert!(
            matches!(err, RobotIctError::Application(ApplicationError::RangeTooLarge { limit: 10, .. })),
            "{err}"
        );
    }
}
