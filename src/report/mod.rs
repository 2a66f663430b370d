//! View models for the four dashboard views.
//!
//! Reports are built only from core outputs and carry everything a
//! presenter needs, so the terminal writer, the JSON writer and the
//! interactive dashboard all render the same figures.

use crate::core::{
    build_service_table, compute_overall_metrics, control_plane_rows, operation_rows,
    top_services, CoverageData, OperationFilter, OperationRow, OverallMetrics, ServiceDetail,
    ServiceSubset, ServiceSummary, SupportFilter,
};
use serde::Serialize;

/// How many of the loaded services are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionInfo {
    pub selected: usize,
    pub total: usize,
}

impl SelectionInfo {
    pub fn new(records: &CoverageData, subset: Option<&ServiceSubset>) -> Self {
        let total = records.len();
        let selected = subset.map_or(total, |s| s.selected_in(records));
        Self { selected, total }
    }

    pub fn is_empty(&self) -> bool {
        self.selected == 0
    }

    /// Banner shown when only part of the services is selected.
    pub fn message(&self) -> Option<String> {
        (self.selected < self.total).then(|| {
            format!(
                "Showing data for {} of {} services",
                self.selected, self.total
            )
        })
    }
}

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one service to display data.";

/// Overall Coverage view.
///
/// `metrics` follow the aggregation rules, so a selection whose services
/// carry no operations reports `num_services = 0` while `services` still
/// lists those zero-operation rows and `selection.selected` counts them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub selection: SelectionInfo,
    pub metrics: OverallMetrics,
    pub top_services: Vec<ServiceSummary>,
    pub services: Vec<ServiceSummary>,
}

impl OverviewReport {
    pub fn build(records: &CoverageData, subset: Option<&ServiceSubset>, top: usize) -> Self {
        let services = build_service_table(records, subset);
        Self {
            selection: SelectionInfo::new(records, subset),
            metrics: compute_overall_metrics(records, subset),
            top_services: top_services(&services, top).to_vec(),
            services,
        }
    }
}

/// Control Plane Overview view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlPlaneReport {
    pub selection: SelectionInfo,
    pub metrics: OverallMetrics,
    pub services_with_control_plane: usize,
    pub top_services: Vec<ServiceSummary>,
    pub services: Vec<ServiceSummary>,
}

impl ControlPlaneReport {
    pub fn build(records: &CoverageData, subset: Option<&ServiceSubset>, top: usize) -> Self {
        let services = control_plane_rows(&build_service_table(records, subset));
        Self {
            selection: SelectionInfo::new(records, subset),
            metrics: compute_overall_metrics(records, subset),
            services_with_control_plane: services.len(),
            top_services: top_services(&services, top).to_vec(),
            services,
        }
    }
}

/// Per-Service Analysis view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceReport {
    pub detail: ServiceDetail,
    pub support_filter: SupportFilter,
    pub operations: Vec<OperationRow>,
}

impl ServiceReport {
    /// `None` when `key` was not loaded.
    pub fn build(records: &CoverageData, key: &str, filter: &OperationFilter) -> Option<Self> {
        let record = records.get(key)?;
        Some(Self {
            detail: ServiceDetail::from_record(key, record),
            support_filter: filter.support,
            operations: operation_rows(record, filter),
        })
    }
}

/// Per-Service Control Plane view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceControlPlaneReport {
    pub detail: ServiceDetail,
    pub support_filter: SupportFilter,
    pub operations: Vec<OperationRow>,
}

impl ServiceControlPlaneReport {
    /// `None` when `key` was not loaded or has no control-plane operations.
    pub fn build(records: &CoverageData, key: &str, support: SupportFilter) -> Option<Self> {
        let record = records.get(key).filter(|r| r.has_control_plane())?;
        Some(Self {
            detail: ServiceDetail::from_record(key, record),
            support_filter: support,
            operations: operation_rows(record, &OperationFilter::control_plane_only(support)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoverageRecord, Operation, OperationType};

    fn records() -> CoverageData {
        let mut data = CoverageData::new();
        data.insert(
            "ecr".into(),
            CoverageRecord::from_counts(2, 1, 1, 1).with_operations(vec![
                Operation::new("CreateRepository", OperationType::ControlPlane)
                    .implemented_at("repository/sdk.go", 10),
                Operation::new("PutImage", OperationType::DataPlane),
            ]),
        );
        data.insert("sqs".into(), CoverageRecord::from_counts(4, 4, 0, 0));
        data.insert("sns".into(), CoverageRecord::from_counts(4, 1, 4, 1));
        data
    }

    #[test]
    fn test_selection_message_only_for_partial_selection() {
        let data = records();
        assert_eq!(SelectionInfo::new(&data, None).message(), None);

        let subset: ServiceSubset = ["sqs", "nope"].into_iter().collect();
        let info = SelectionInfo::new(&data, Some(&subset));
        assert_eq!(info.selected, 1);
        assert_eq!(
            info.message().as_deref(),
            Some("Showing data for 1 of 3 services")
        );
    }

    #[test]
    fn test_overview_report_top_slice() {
        let report = OverviewReport::build(&records(), None, 2);

        assert_eq!(report.services.len(), 3);
        assert_eq!(report.top_services.len(), 2);
        assert_eq!(report.top_services[0].key, "sqs");
        assert_eq!(report.metrics.num_services, 3);
    }

    #[test]
    fn test_control_plane_report_excludes_services_without_control_plane() {
        let report = ControlPlaneReport::build(&records(), None, 10);

        assert_eq!(report.services_with_control_plane, 2);
        let keys: Vec<_> = report.services.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["ecr", "sns"]);
    }

    #[test]
    fn test_empty_selection_reports() {
        let data = records();
        let none = ServiceSubset::empty();
        let report = OverviewReport::build(&data, Some(&none), 10);

        assert!(report.selection.is_empty());
        assert!(report.services.is_empty());
        assert_eq!(report.metrics, OverallMetrics::empty_selection());
    }

    #[test]
    fn test_zero_operation_selection_keeps_rows_but_not_metrics() {
        let mut data = records();
        data.insert("empty".into(), CoverageRecord::from_counts(0, 0, 0, 0));
        let subset: ServiceSubset = ["empty"].into_iter().collect();

        let report = OverviewReport::build(&data, Some(&subset), 10);

        assert_eq!(report.metrics.num_services, 0);
        assert_eq!(report.metrics.total_operations, 0);
        assert_eq!(report.services.len(), 1);
        assert_eq!(report.selection.selected, 1);
        assert!(!report.selection.is_empty());
    }

    #[test]
    fn test_service_reports() {
        let data = records();

        let report = ServiceReport::build(&data, "ecr", &OperationFilter::default()).unwrap();
        assert_eq!(report.operations.len(), 2);

        let cp = ServiceControlPlaneReport::build(&data, "ecr", SupportFilter::All).unwrap();
        assert_eq!(cp.operations.len(), 1);
        assert_eq!(cp.operations[0].name, "CreateRepository");

        assert!(ServiceReport::build(&data, "missing", &OperationFilter::default()).is_none());
        assert!(ServiceControlPlaneReport::build(&data, "sqs", SupportFilter::All).is_none());
    }
}
