// crates/infra/src/settings.rs
//! Optional settings file. Every field may be omitted; command-line flags
//! override whatever is set here.

use std::path::Path;

use robotict_shared_kernel::{InfrastructureError, Result};
use serde::{Deserialize, Serialize};

use crate::persistence::FileReader;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub first: Option<i64>,
    pub second: Option<i64>,
    pub probe: Option<i64>,
    pub max_len: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Yaml,
}

/// Load a settings file, choosing the parser by extension (`.json`, `.yaml`/`.yml`).
pub fn load_settings(path: &Path) -> Result<SettingsFile> {
    let format = detect_format(path)?;
    let text = FileReader::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let settings = parse_settings(&text, format, path)?;
    log::debug!("loaded settings from {}: {settings:?}", path.display());
    Ok(settings)
}

fn detect_format(path: &Path) -> Result<SettingsFormat> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(SettingsFormat::Json),
        Some("yaml" | "yml") => Ok(SettingsFormat::Yaml),
        _ => Err(InfrastructureError::UnsupportedSettings {
            path: path.to_path_buf(),
            reason: "expected a .json, .yaml or .yml file".to_string(),
        }
        .into()),
    }
}

fn parse_settings(text: &str, format: SettingsFormat, path: &Path) -> Result<SettingsFile> {
    match format {
        SettingsFormat::Json => Ok(serde_json::from_str(text)?),
        SettingsFormat::Yaml => parse_yaml(text, path),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str, _path: &Path) -> Result<SettingsFile> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str, path: &Path) -> Result<SettingsFile> {
    Err(InfrastructureError::UnsupportedSettings {
        path: path.to_path_buf(),
        reason: "YAML support was not compiled in (enable the `yaml` feature)".to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn loads_partial_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("robotict.json");
        fs::write(&path, r#"{ "min": 10, "max": 30, "second": 7 }"#).unwrap();

        let settings = load_settings(&path).expect("settings load");
        assert_eq!(
            settings,
            SettingsFile { min: Some(10), max: Some(30), second: Some(7), ..SettingsFile::default() }
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("robotict.json");
        fs::write(&path, r#"{ "divisor3": 7 }"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(err.to_string().contains("JSON"), "{err}");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_settings(Path::new("settings.toml")).unwrap_err();
        assert!(err.to_string().contains("settings.toml"), "{err}");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_settings(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"), "{err}");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn loads_yaml_when_enabled() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("robotict.yml");
        fs::write(&path, "first: 2\nprobe: 8\n").unwrap();

        let settings = load_settings(&path).expect("settings load");
        assert_eq!(settings.first, Some(2));
        assert_eq!(settings.probe, Some(8));
    }
}
