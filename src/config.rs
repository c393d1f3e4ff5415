// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use robotict_domain::{DivisorPair, ExportFormat, NumberRange};
use robotict_usecase::{ClassificationPlan, ClassifyRange};

use crate::options::OutputFormat;

/// Fully layered run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "NumberRange::DEFAULT_MIN")]
    pub min: i64,
    #[builder(default = "NumberRange::DEFAULT_MAX")]
    pub max: i64,
    #[builder(default = "DivisorPair::DEFAULT_FIRST")]
    pub first: i64,
    #[builder(default = "DivisorPair::DEFAULT_SECOND")]
    pub second: i64,
    #[builder(default = "Some(15)")]
    pub probe: Option<i64>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub save: Option<ExportFormat>,
    #[builder(default = "PathBuf::from(\".\")")]
    pub out_dir: PathBuf,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default = "ClassifyRange::DEFAULT_MAX_LEN")]
    pub max_len: u64,
}

impl Config {
    pub const fn plan(&self) -> ClassificationPlan {
        ClassificationPlan {
            min: self.min,
            max: self.max,
            first: self.first,
            second: self.second,
            probe: self.probe,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min: NumberRange::DEFAULT_MIN,
            max: NumberRange::DEFAULT_MAX,
            first: DivisorPair::DEFAULT_FIRST,
            second: DivisorPair::DEFAULT_SECOND,
            probe: Some(15),
            format: OutputFormat::Table,
            save: None,
            out_dir: PathBuf::from("."),
            output: None,
            max_len: ClassifyRange::DEFAULT_MAX_LEN,
        }
    }
}
