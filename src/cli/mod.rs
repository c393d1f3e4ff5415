mod args;
mod args_groups;
mod parsers;
mod value_enum;

pub use args::Args;
use robotict_domain::ExportFormat;
use robotict_infra::settings::{SettingsFile, load_settings};
use robotict_shared_kernel::{ErrorContext, PresentationError, Result};

use crate::{
    config::{Config, ConfigBuilder},
    options::OutputFormat,
};

fn validate_max_len(max_len: Option<u64>) -> Result<()> {
    if max_len == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: "max_len".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

fn load_settings_file(args: &Args) -> Result<SettingsFile> {
    match &args.config {
        Some(path) => {
            let settings = load_settings(path)
                .with_context(|| format!("while loading settings from {}", path.display()))?;
            validate_max_len(settings.max_len)?;
            Ok(settings)
        }
        None => Ok(SettingsFile::default()),
    }
}

/// Probe value after layering: `--no-probe` wins, then `--probe`, then the settings file.
fn resolve_probe(args: &Args, settings: &SettingsFile) -> Option<Option<i64>> {
    if args.range.no_probe {
        Some(None)
    } else {
        args.range.probe.or(settings.probe).map(Some)
    }
}

/// Convert parsed CLI arguments into a run configuration.
///
/// Values are layered: built-in defaults, then the `--config` file, then
/// flags given explicitly on the command line.
///
/// # Errors
///
/// Returns `Err` when the settings file cannot be read or parsed, when it
/// holds an out-of-range value, or when the builder rejects the result.
pub fn build_config(args: &Args) -> Result<Config> {
    let settings = load_settings_file(args)?;

    let mut builder = ConfigBuilder::default();
    if let Some(min) = args.range.min.or(settings.min) {
        builder.min(min);
    }
    if let Some(max) = args.range.max.or(settings.max) {
        builder.max(max);
    }
    if let Some(first) = args.divisors.first.or(settings.first) {
        builder.first(first);
    }
    if let Some(second) = args.divisors.second.or(settings.second) {
        builder.second(second);
    }
    if let Some(probe) = resolve_probe(args, &settings) {
        builder.probe(probe);
    }
    if let Some(max_len) = args.output.max_len.or(settings.max_len) {
        builder.max_len(max_len);
    }

    builder
        .format(OutputFormat::from(args.output.format))
        .save(args.output.save.map(ExportFormat::from))
        .out_dir(args.output.out_dir.clone())
        .output(args.output.output.clone())
        .build()
        .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
}
