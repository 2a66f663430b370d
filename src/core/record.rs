//! Coverage records as produced by the external coverage generator.
//!
//! One [`CoverageRecord`] exists per service. Records are read-only once
//! loaded; the loader calls [`CoverageRecord::validate`] before a record is
//! handed to the aggregation functions, which assume the count invariants
//! hold.

use crate::errors::RecordError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All loaded records keyed by service name, in load order.
///
/// Iteration order is the tie-break used by the service table.
pub type CoverageData = IndexMap<String, CoverageRecord>;

/// Per-service coverage counts plus the operations they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRecord {
    /// Overrides the filename-derived key when present in the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub total_operations: u64,
    pub supported_operations: u64,
    pub control_plane_operations: u64,
    pub supported_control_plane_operations: u64,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl CoverageRecord {
    /// Record with the given counts and no operation list.
    pub fn from_counts(
        total_operations: u64,
        supported_operations: u64,
        control_plane_operations: u64,
        supported_control_plane_operations: u64,
    ) -> Self {
        Self {
            service_name: None,
            total_operations,
            supported_operations,
            control_plane_operations,
            supported_control_plane_operations,
            operations: Vec::new(),
        }
    }

    pub fn with_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations = operations;
        self
    }

    /// Check the count invariants:
    /// `supported <= total`, `control_plane <= total` and
    /// `supported_control_plane <= control_plane`.
    pub fn validate(&self, service: &str) -> Result<(), RecordError> {
        if self.supported_operations > self.total_operations {
            return Err(RecordError::SupportedExceedsTotal {
                service: service.to_string(),
                supported: self.supported_operations,
                total: self.total_operations,
            });
        }
        if self.control_plane_operations > self.total_operations {
            return Err(RecordError::ControlPlaneExceedsTotal {
                service: service.to_string(),
                control_plane: self.control_plane_operations,
                total: self.total_operations,
            });
        }
        if self.supported_control_plane_operations > self.control_plane_operations {
            return Err(RecordError::SupportedControlPlaneExceedsControlPlane {
                service: service.to_string(),
                supported: self.supported_control_plane_operations,
                control_plane: self.control_plane_operations,
            });
        }
        Ok(())
    }

    pub fn has_operations(&self) -> bool {
        self.total_operations > 0
    }

    pub fn has_control_plane(&self) -> bool {
        self.control_plane_operations > 0
    }

    /// Share of operations that are implemented, 0 when there are none.
    pub fn coverage_pct(&self) -> f64 {
        percentage(self.supported_operations, self.total_operations)
    }

    /// Share of control-plane operations that are implemented, 0 when there are none.
    pub fn control_plane_coverage_pct(&self) -> f64 {
        percentage(
            self.supported_control_plane_operations,
            self.control_plane_operations,
        )
    }

    pub fn data_plane_operations(&self) -> u64 {
        self.total_operations
            .saturating_sub(self.control_plane_operations)
    }
}

/// Classification of an API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    ControlPlane,
    DataPlane,
    /// Any marker the generator emits that is neither of the above
    #[serde(other)]
    Other,
}

impl OperationType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ControlPlane => "Control Plane",
            Self::DataPlane => "Data Plane",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [OperationType] {
        &[Self::ControlPlane, Self::DataPlane, Self::Other]
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single API operation and where it is implemented, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OperationType,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub line: u64,
}

impl Operation {
    pub fn new(name: impl Into<String>, kind: OperationType) -> Self {
        Self {
            name: name.into(),
            kind,
            file: None,
            line: 0,
        }
    }

    pub fn implemented_at(mut self, file: impl Into<String>, line: u64) -> Self {
        self.file = Some(file.into());
        self.line = line;
        self
    }

    /// Supported iff the operation has a non-empty file reference and a positive line.
    pub fn is_supported(&self) -> bool {
        self.file.as_deref().is_some_and(|f| !f.is_empty()) && self.line > 0
    }
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
