// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod report;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    build_service_table, compute_overall_metrics, CoverageData, CoverageRecord, Operation,
    OperationType, OverallMetrics, ServiceDetail, ServiceSubset, ServiceSummary,
};

pub use crate::errors::{FailureSummary, LoadError, LoadFailure, RecordError};

pub use crate::io::{CoverageLoader, LoadedCoverage, ResultsDirLoader};

pub use crate::output::OutputFormat;

pub use crate::report::{
    ControlPlaneReport, OverviewReport, SelectionInfo, ServiceControlPlaneReport, ServiceReport,
};
