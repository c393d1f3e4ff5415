// tests/integration/end_to_end.rs
use std::fs;

use robotict::{app, config::ConfigBuilder, options::OutputFormat};
use robotict_domain::ExportFormat;
use robotict_infra::{export::renderer_for, sinks::DirectorySink};
use robotict_shared_kernel::{DivisorSlot, DomainError};
use robotict_usecase::{ClassificationPlan, ClassifyRange, ExportReport};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn default_run_classifies_one_to_hundred() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ConfigBuilder::default()
        .format(OutputFormat::Json)
        .output(Some(dir.path().join("out.json")))
        .build()
        .expect("config builds");

    let outcome = app::run(&config).expect("run succeeds");

    let stats = &outcome.classified.report.statistics;
    assert_eq!(stats.robot_ict, 6);
    assert_eq!(stats.robot, 27);
    assert_eq!(stats.ict, 14);
    assert_eq!(stats.plain, 53);
    assert_eq!(outcome.classified.probe.and_then(|p| p.label()).map(|l| l.to_string()), Some("RobotICT".into()));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out.json")).expect("read json")).expect("json");
    assert_eq!(json["numbers"].as_array().map(Vec::len), Some(100));
}

#[test]
fn each_export_format_lands_under_its_suggested_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = ClassifyRange::default()
        .run(&ClassificationPlan { min: -3, max: 12, first: 3, second: 4, probe: None })
        .expect("classify");
    let sink = DirectorySink::new(dir.path());

    for format in [ExportFormat::Text, ExportFormat::Csv, ExportFormat::Json] {
        let exported = ExportReport::new(renderer_for(format), &sink).run(&output.report).expect("export");
        let expected = format!("robotict_numbers_-3-12.{}", format.extension());
        assert_eq!(exported.file_name, expected);
        let written = fs::read(dir.path().join(&expected)).expect("document on disk");
        assert_eq!(written.len(), exported.delivered.bytes);
    }
}

#[test]
fn saved_document_matches_direct_render() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ConfigBuilder::default()
        .max(15)
        .output(Some(dir.path().join("table.txt")))
        .save(Some(ExportFormat::Text))
        .out_dir(dir.path().join("exports"))
        .build()
        .expect("config builds");

    app::run(&config).expect("run succeeds");

    let saved = fs::read_to_string(dir.path().join("exports/robotict_numbers_1-15.txt")).expect("saved text");
    assert_eq!(saved, common::render(ExportFormat::Text, &common::report(1, 15, 3, 5)));
}

#[test]
fn rerunning_overwrites_the_saved_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("robotict_numbers_1-10.csv");
    fs::write(&path, "stale").expect("seed stale file");

    let config = ConfigBuilder::default()
        .max(10)
        .output(Some(dir.path().join("table.txt")))
        .save(Some(ExportFormat::Csv))
        .out_dir(dir.path())
        .build()
        .expect("config builds");
    app::run(&config).expect("run succeeds");

    let csv = fs::read_to_string(&path).expect("csv");
    assert!(csv.starts_with("RobotICT Validator - Range 1-10\n"), "{csv}");
}

#[test]
fn zero_divisor_is_rejected_before_anything_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ConfigBuilder::default()
        .first(0)
        .output(Some(dir.path().join("table.txt")))
        .save(Some(ExportFormat::Csv))
        .out_dir(dir.path())
        .build()
        .expect("config builds");

    let err = app::run(&config).unwrap_err();
    assert_eq!(err.as_domain(), Some(&DomainError::InvalidDivisor { which: DivisorSlot::First, value: 0 }));
    assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 0);
}
