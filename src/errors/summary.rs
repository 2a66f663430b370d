//! Grouped summary of load failures, printed after a partial load.

use super::collection::{LoadFailure, OperationType};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Summary of files excluded from a load.
#[derive(Debug)]
pub struct FailureSummary {
    pub total: usize,
    pub by_operation: BTreeMap<OperationType, usize>,
    pub by_error_kind: BTreeMap<String, Vec<PathBuf>>,
}

impl FailureSummary {
    pub fn from_failures(failures: &[LoadFailure]) -> Self {
        let mut by_operation: BTreeMap<OperationType, usize> = BTreeMap::new();
        for failure in failures {
            *by_operation.entry(failure.operation).or_insert(0) += 1;
        }

        let mut by_error_kind: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for failure in failures {
            by_error_kind
                .entry(extract_error_kind(&failure.error))
                .or_default()
                .push(failure.path.clone());
        }

        Self {
            total: failures.len(),
            by_operation,
            by_error_kind,
        }
    }

    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "\n{} report file(s) excluded from the dashboard:\n",
            self.total
        ));
        for (op_type, count) in &self.by_operation {
            report.push_str(&format!("  {}: {} file(s)\n", op_type.as_str(), count));
        }

        report.push_str("\nError categories:\n");
        for (error_kind, paths) in &self.by_error_kind {
            report.push_str(&format!("  {}: {} file(s)\n", error_kind, paths.len()));

            for path in paths.iter().take(3) {
                report.push_str(&format!("    - {}\n", path.display()));
            }

            if paths.len() > 3 {
                report.push_str(&format!("    ... and {} more\n", paths.len() - 3));
            }
        }

        report
    }
}

fn extract_error_kind(error: &str) -> String {
    if error.contains("Permission denied") {
        "Permission denied".to_string()
    } else if error.contains("No such file") {
        "File not found".to_string()
    } else if error.contains("exceeds") {
        "Count invariant violated".to_string()
    } else if error.contains("invalid coverage document") || error.contains("expected") {
        "Invalid JSON".to_string()
    } else {
        error.lines().next().unwrap_or("Unknown error").to_string()
    }
}
