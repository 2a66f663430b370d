//! Per-file failures collected while loading a results directory.
//!
//! Each report file is loaded independently. A file that cannot be read,
//! parsed or validated becomes a [`LoadFailure`] and the load carries on
//! with the remaining files.

use anyhow::Error;
use std::path::PathBuf;

/// Information about a report file that was excluded from the load.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub operation: OperationType,
    pub error: String, // String for Clone, preserves error message
}

impl LoadFailure {
    pub fn new(path: PathBuf, operation: OperationType, error: Error) -> Self {
        Self {
            path,
            operation,
            error: format!("{:#}", error),
        }
    }

    pub fn file_read(path: PathBuf, error: Error) -> Self {
        Self::new(path, OperationType::FileRead, error)
    }

    pub fn file_parse(path: PathBuf, error: Error) -> Self {
        Self::new(path, OperationType::FileParse, error)
    }

    pub fn validation(path: PathBuf, error: Error) -> Self {
        Self::new(path, OperationType::Validation, error)
    }
}

/// Stage of the load that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationType {
    FileRead,
    FileParse,
    Validation,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileRead => "File read",
            Self::FileParse => "File parse",
            Self::Validation => "Validation",
        }
    }
}
