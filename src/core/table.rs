//! Per-service summary table.

use super::metrics::debug_assert_valid;
use super::record::{CoverageData, CoverageRecord};
use super::subset::{filter_records, ServiceSubset};
use serde::{Deserialize, Serialize};

/// One row of the service table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Upper-cased display name
    pub service: String,
    /// Key in the record mapping
    pub key: String,
    pub total_operations: u64,
    pub supported_operations: u64,
    /// Rounded to one decimal place
    pub coverage_pct: f64,
    pub control_plane_operations: u64,
    pub supported_control_plane_operations: u64,
    /// Rounded to one decimal place
    pub control_plane_coverage_pct: f64,
}

impl ServiceSummary {
    pub fn from_record(key: &str, record: &CoverageRecord) -> Self {
        Self {
            service: key.to_uppercase(),
            key: key.to_string(),
            total_operations: record.total_operations,
            supported_operations: record.supported_operations,
            coverage_pct: round_to_tenth(record.coverage_pct()),
            control_plane_operations: record.control_plane_operations,
            supported_control_plane_operations: record.supported_control_plane_operations,
            control_plane_coverage_pct: round_to_tenth(record.control_plane_coverage_pct()),
        }
    }
}

/// Rows for the services in `subset` (all when `None`), sorted by
/// `coverage_pct` descending.
///
/// The sort is stable: rows with equal coverage keep the iteration order
/// of `records`. An empty selection yields an empty table.
pub fn build_service_table(
    records: &CoverageData,
    subset: Option<&ServiceSubset>,
) -> Vec<ServiceSummary> {
    let mut rows: Vec<ServiceSummary> = filter_records(records, subset)
        .map(|(key, record)| {
            debug_assert_valid(key, record);
            ServiceSummary::from_record(key, record)
        })
        .collect();

    rows.sort_by(|a, b| b.coverage_pct.total_cmp(&a.coverage_pct));
    rows
}

/// The first `k` rows of a sorted table (fewer if the table is shorter).
pub fn top_services(rows: &[ServiceSummary], k: usize) -> &[ServiceSummary] {
    &rows[..k.min(rows.len())]
}

/// Rows of services that have control-plane operations, stably sorted by
/// `control_plane_coverage_pct` descending.
pub fn control_plane_rows(rows: &[ServiceSummary]) -> Vec<ServiceSummary> {
    let mut cp_rows: Vec<ServiceSummary> = rows
        .iter()
        .filter(|row| row.control_plane_operations > 0)
        .cloned()
        .collect();

    cp_rows.sort_by(|a, b| {
        b.control_plane_coverage_pct
            .total_cmp(&a.control_plane_coverage_pct)
    });
    cp_rows
}

/// Round to one decimal place, ties to even.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
