//! Error types for coverage records and the results loader.
//!
//! Record and directory errors are typed with `thiserror`. Per-file load
//! failures are not errors of the load as a whole: they are collected
//! (see [`collection`]) and summarised (see [`summary`]) so that one bad
//! report never hides the rest of the dashboard.

pub mod collection;
pub mod summary;

pub use collection::{LoadFailure, OperationType};
pub use summary::FailureSummary;

use std::path::PathBuf;
use thiserror::Error;

/// A coverage document that cannot become a [`crate::core::CoverageRecord`].
#[derive(Debug, Error)]
pub enum RecordError {
    /// The document is not valid JSON or lacks a required count
    #[error("invalid coverage document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{service}: supported_operations ({supported}) exceeds total_operations ({total})")]
    SupportedExceedsTotal {
        service: String,
        supported: u64,
        total: u64,
    },

    #[error(
        "{service}: control_plane_operations ({control_plane}) exceeds total_operations ({total})"
    )]
    ControlPlaneExceedsTotal {
        service: String,
        control_plane: u64,
        total: u64,
    },

    #[error("{service}: supported_control_plane_operations ({supported}) exceeds control_plane_operations ({control_plane})")]
    SupportedControlPlaneExceedsControlPlane {
        service: String,
        supported: u64,
        control_plane: u64,
    },
}

impl RecordError {
    /// True for count invariant violations, false for malformed documents
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, Self::Json(_))
    }
}

/// Failure of the load as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Results directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Failed to scan results directory {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_message_names_service() {
        let err = RecordError::SupportedExceedsTotal {
            service: "s3".to_string(),
            supported: 12,
            total: 10,
        };
        assert!(err.is_invariant_violation());
        assert_eq!(
            err.to_string(),
            "s3: supported_operations (12) exceeds total_operations (10)"
        );
    }

    #[test]
    fn test_json_error_is_not_invariant_violation() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RecordError::from(json_err);
        assert!(!err.is_invariant_violation());
        assert!(err.to_string().starts_with("invalid coverage document"));
    }

    #[test]
    fn test_missing_directory_message() {
        let err = LoadError::MissingDirectory {
            path: PathBuf::from("results"),
        };
        assert_eq!(err.to_string(), "Results directory not found: results");
    }
}
