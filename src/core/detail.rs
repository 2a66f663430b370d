//! Per-service detail: headline figures and operation rows.

use super::record::{CoverageData, CoverageRecord, Operation, OperationType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const NOT_AVAILABLE: &str = "N/A";

/// Figures shown at the top of a per-service view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub service: String,
    pub key: String,
    pub total_operations: u64,
    pub supported_operations: u64,
    pub unsupported_operations: u64,
    pub coverage_pct: f64,
    pub control_plane_operations: u64,
    pub data_plane_operations: u64,
    pub supported_control_plane_operations: u64,
    pub unsupported_control_plane_operations: u64,
    pub control_plane_coverage_pct: f64,
}

impl ServiceDetail {
    pub fn from_record(key: &str, record: &CoverageRecord) -> Self {
        Self {
            service: key.to_uppercase(),
            key: key.to_string(),
            total_operations: record.total_operations,
            supported_operations: record.supported_operations,
            unsupported_operations: record
                .total_operations
                .saturating_sub(record.supported_operations),
            coverage_pct: record.coverage_pct(),
            control_plane_operations: record.control_plane_operations,
            data_plane_operations: record.data_plane_operations(),
            supported_control_plane_operations: record.supported_control_plane_operations,
            unsupported_control_plane_operations: record
                .control_plane_operations
                .saturating_sub(record.supported_control_plane_operations),
            control_plane_coverage_pct: record.control_plane_coverage_pct(),
        }
    }

    /// Detail for `key`, or `None` if the service was not loaded.
    pub fn lookup(records: &CoverageData, key: &str) -> Option<Self> {
        records
            .get(key)
            .map(|record| Self::from_record(key, record))
    }
}

/// An operation formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRow {
    pub name: String,
    pub kind: OperationType,
    pub supported: bool,
    /// Implementing file, "N/A" when absent
    pub file: String,
    /// Implementing line, "N/A" when 0
    pub line: String,
}

impl OperationRow {
    pub fn from_operation(op: &Operation) -> Self {
        Self {
            name: op.name.clone(),
            kind: op.kind,
            supported: op.is_supported(),
            file: op
                .file
                .as_deref()
                .filter(|f| !f.is_empty())
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            line: if op.line > 0 {
                op.line.to_string()
            } else {
                NOT_AVAILABLE.to_string()
            },
        }
    }

    pub fn supported_label(&self) -> &'static str {
        if self.supported {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Support-status filter for operation rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportFilter {
    #[default]
    All,
    Supported,
    Unsupported,
}

impl SupportFilter {
    pub fn matches(&self, supported: bool) -> bool {
        match self {
            Self::All => true,
            Self::Supported => supported,
            Self::Unsupported => !supported,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "Yes + No",
            Self::Supported => "Yes",
            Self::Unsupported => "No",
        }
    }

    /// Next filter in the All -> Supported -> Unsupported cycle.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Supported,
            Self::Supported => Self::Unsupported,
            Self::Unsupported => Self::All,
        }
    }
}

/// Filter over operation rows; the default keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationFilter {
    /// Operation types to keep; `None` keeps every type
    pub kinds: Option<BTreeSet<OperationType>>,
    pub support: SupportFilter,
}

impl OperationFilter {
    pub fn control_plane_only(support: SupportFilter) -> Self {
        Self {
            kinds: Some(BTreeSet::from([OperationType::ControlPlane])),
            support,
        }
    }

    pub fn matches(&self, op: &Operation) -> bool {
        let kind_ok = self
            .kinds
            .as_ref()
            .is_none_or(|kinds| kinds.contains(&op.kind));
        kind_ok && self.support.matches(op.is_supported())
    }
}

/// Rows for the operations of `record` passing `filter`, in record order.
pub fn operation_rows(record: &CoverageRecord, filter: &OperationFilter) -> Vec<OperationRow> {
    record
        .operations
        .iter()
        .filter(|op| filter.matches(op))
        .map(OperationRow::from_operation)
        .collect()
}

/// Operation types present in `record`, in first-seen order.
pub fn operation_kinds(record: &CoverageRecord) -> Vec<OperationType> {
    let mut kinds = Vec::new();
    for op in &record.operations {
        if !kinds.contains(&op.kind) {
            kinds.push(op.kind);
        }
    }
    kinds
}

/// Keys of services with at least one control-plane operation, in mapping order.
pub fn control_plane_services(records: &CoverageData) -> Vec<&str> {
    records
        .iter()
        .filter(|(_, record)| record.has_control_plane())
        .map(|(key, _)| key.as_str())
        .collect()
}
