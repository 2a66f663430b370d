//! Integration tests for loading a results directory.

mod common;

use ackcov::core::{operation_rows, OperationFilter, SupportFilter};
use ackcov::errors::{FailureSummary, LoadError, OperationType as FailedStage};
use ackcov::io::{CoverageLoader, ResultsDirLoader};
use common::{write_report, S3_REPORT, SQS_REPORT};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_loads_reports_in_file_name_order() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "sqs", SQS_REPORT);
    write_report(dir.path(), "s3", S3_REPORT);

    let loaded = ResultsDirLoader::new(dir.path()).load().unwrap();

    assert!(loaded.is_complete_success());
    let keys: Vec<&str> = loaded.records.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["s3", "sqs"]);
    assert_eq!(loaded.records["s3"].operations.len(), 4);
}

#[test]
fn test_service_name_field_overrides_file_name() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("report.json"),
        indoc! {r#"
            {
                "service_name": "dynamodb",
                "total_operations": 1,
                "supported_operations": 1,
                "control_plane_operations": 1,
                "supported_control_plane_operations": 1,
                "operations": []
            }
        "#},
    )
    .unwrap();

    let loaded = ResultsDirLoader::new(dir.path()).load().unwrap();
    assert!(loaded.records.contains_key("dynamodb"));
}

#[test]
fn test_bad_files_are_excluded_and_reported() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "s3", S3_REPORT);
    write_report(dir.path(), "broken", "{ not json");
    write_report(
        dir.path(),
        "lambda",
        indoc! {r#"
            {
                "total_operations": 2,
                "supported_operations": 3,
                "control_plane_operations": 0,
                "supported_control_plane_operations": 0
            }
        "#},
    );
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let loaded = ResultsDirLoader::new(dir.path()).load().unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.failures.len(), 2);

    let stages: Vec<FailedStage> = loaded.failures.iter().map(|f| f.operation).collect();
    assert!(stages.contains(&FailedStage::FileParse));
    assert!(stages.contains(&FailedStage::Validation));

    let summary = FailureSummary::from_failures(&loaded.failures);
    assert_eq!(summary.total, 2);
    let report = summary.report();
    assert!(report.contains("Count invariant violated"));
    assert!(report.contains("Invalid JSON"));
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("results");

    let err = ResultsDirLoader::new(&missing).load().unwrap_err();
    assert!(matches!(err, LoadError::MissingDirectory { .. }));
}

#[test]
fn test_support_status_is_derived_from_file_and_line() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "s3", S3_REPORT);
    let loaded = ResultsDirLoader::new(dir.path()).load().unwrap();
    let record = &loaded.records["s3"];

    let supported = operation_rows(
        record,
        &OperationFilter {
            kinds: None,
            support: SupportFilter::Supported,
        },
    );
    let names: Vec<&str> = supported.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["CreateBucket", "PutObject"]);

    let unsupported = operation_rows(
        record,
        &OperationFilter::control_plane_only(SupportFilter::Unsupported),
    );
    assert_eq!(unsupported.len(), 1);
    assert_eq!(unsupported[0].name, "DeleteBucket");
    assert_eq!(unsupported[0].file, "N/A");
    assert_eq!(unsupported[0].line, "N/A");
}
