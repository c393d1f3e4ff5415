// tests/integration/output_formats.rs
use robotict_domain::ExportFormat;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{render, report};

#[test]
fn text_document_for_default_range() {
    let text = render(ExportFormat::Text, &report(1, 100, 3, 5));
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("RobotICT Validator - Range 1-100"));
    assert_eq!(lines.next(), Some("Divisors: 3 and 5"));
    assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
    assert!(text.contains("\nRobot: 27\nICT: 14\nRobotICT: 6\nNumbers: 53\n"), "{text}");
    assert!(text.ends_with("99: Robot\n100: ICT"), "{text}");
}

#[test]
fn csv_document_for_one_to_fifteen() {
    let csv = render(ExportFormat::Csv, &report(1, 15, 3, 5));
    assert!(csv.contains("\nNumber,Divisible by 3,Divisible by 5,Divisible by both,Label\n"));
    assert!(csv.contains("\n9,Yes,No,No,Robot\n"));
    assert!(csv.contains("\n10,No,Yes,No,ICT\n"));
    assert!(csv.ends_with("\n15,Yes,Yes,Yes,RobotICT"));
}

#[test]
fn negative_ranges_keep_their_sign_in_every_format() {
    let report = report(-6, -1, 3, 5);
    assert!(render(ExportFormat::Text, &report).starts_with("RobotICT Validator - Range -6--1\n"));
    assert!(render(ExportFormat::Csv, &report).contains("\n-6,Yes,No,No,Robot\n"));

    let json: Value = serde_json::from_str(&render(ExportFormat::Json, &report)).expect("json");
    assert_eq!(json["range"]["min"], -6);
    assert_eq!(json["numbers"][5]["number"], -1);
}

#[test]
fn json_document_carries_divisors_and_flags() {
    let json: Value = serde_json::from_str(&render(ExportFormat::Json, &report(1, 6, 2, 3))).expect("json");
    assert_eq!(json["divisors"]["first"], 2);
    assert_eq!(json["divisors"]["second"], 3);
    let last = &json["numbers"][5];
    assert_eq!(last["label"], "RobotICT");
    assert_eq!(last["divisible_by_first"], true);
    assert_eq!(last["divisible_by_second"], true);
}
