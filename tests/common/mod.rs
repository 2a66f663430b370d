// Shared fixtures for ackcov integration tests
#![allow(dead_code)]

use ackcov::core::{CoverageData, CoverageRecord};
use std::fs;
use std::path::Path;

/// Map of `(key, total, supported, control_plane, supported_control_plane)`.
pub fn records(entries: &[(&str, u64, u64, u64, u64)]) -> CoverageData {
    entries
        .iter()
        .map(|&(key, total, supported, cp, supported_cp)| {
            (
                key.to_string(),
                CoverageRecord::from_counts(total, supported, cp, supported_cp),
            )
        })
        .collect()
}

/// Write a `<service>-operations.json` report into `dir`.
pub fn write_report(dir: &Path, service: &str, json: &str) {
    fs::write(dir.join(format!("{service}-operations.json")), json).unwrap();
}

pub const S3_REPORT: &str = r#"{
    "total_operations": 4,
    "supported_operations": 2,
    "control_plane_operations": 2,
    "supported_control_plane_operations": 1,
    "operations": [
        {"name": "CreateBucket", "type": "control_plane", "file": "pkg/resource/bucket/sdk.go", "line": 120},
        {"name": "DeleteBucket", "type": "control_plane", "file": "", "line": 0},
        {"name": "PutObject", "type": "data_plane", "file": "pkg/resource/object/sdk.go", "line": 42},
        {"name": "GetObject", "type": "data_plane", "file": null, "line": 0}
    ]
}"#;

pub const SQS_REPORT: &str = r#"{
    "total_operations": 2,
    "supported_operations": 2,
    "control_plane_operations": 0,
    "supported_control_plane_operations": 0,
    "operations": [
        {"name": "SendMessage", "type": "data_plane", "file": "pkg/queue/sdk.go", "line": 10},
        {"name": "ReceiveMessage", "type": "data_plane", "file": "pkg/queue/sdk.go", "line": 30}
    ]
}"#;
