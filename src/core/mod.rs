//! Pure coverage aggregation.
//!
//! Everything in this module is a deterministic function of immutable
//! records and an explicit [`ServiceSubset`]. No I/O happens here.

pub mod detail;
pub mod metrics;
pub mod record;
pub mod subset;
pub mod table;

pub use detail::{
    control_plane_services, operation_kinds, operation_rows, OperationFilter, OperationRow,
    ServiceDetail, SupportFilter,
};
pub use metrics::{compute_overall_metrics, mean_of_percentages, OverallMetrics};
pub use record::{percentage, CoverageData, CoverageRecord, Operation, OperationType};
pub use subset::{filter_records, ServiceSubset};
pub use table::{build_service_table, control_plane_rows, round_to_tenth, top_services, ServiceSummary};
