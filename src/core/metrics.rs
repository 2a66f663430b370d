//! System-wide coverage metrics.
//!
//! Coverage is reported as the unweighted mean of each service's own
//! percentage (mean-of-means), not as `total_supported / total_operations`.
//! A small service at 100% counts as much as a large service at 10%.
//! Services without operations are left out of the mean rather than
//! counted as 0%.

use super::record::{CoverageData, CoverageRecord};
use super::subset::{filter_records, ServiceSubset};
use serde::{Deserialize, Serialize};

/// Aggregate figures over a filtered set of services.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    pub total_operations: u64,
    pub total_supported: u64,
    pub total_control_plane: u64,
    pub total_supported_control_plane: u64,
    pub overall_coverage: f64,
    pub control_plane_coverage: f64,
    pub num_services: usize,
    /// False only when there were no records at all to aggregate
    pub has_data: bool,
}

impl OverallMetrics {
    /// Result for an empty record mapping.
    pub const fn no_data() -> Self {
        Self {
            total_operations: 0,
            total_supported: 0,
            total_control_plane: 0,
            total_supported_control_plane: 0,
            overall_coverage: 0.0,
            control_plane_coverage: 0.0,
            num_services: 0,
            has_data: false,
        }
    }

    /// Result for a selection that yields nothing to aggregate.
    pub const fn empty_selection() -> Self {
        Self {
            has_data: true,
            ..Self::no_data()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_services == 0
    }

    pub fn total_unsupported(&self) -> u64 {
        self.total_operations.saturating_sub(self.total_supported)
    }

    pub fn total_unsupported_control_plane(&self) -> u64 {
        self.total_control_plane
            .saturating_sub(self.total_supported_control_plane)
    }
}

/// Aggregate `records` restricted to `subset` (all records when `None`).
///
/// Returns [`OverallMetrics::no_data`] for an empty mapping and
/// [`OverallMetrics::empty_selection`] when the filtered records carry no
/// operations at all, which includes selecting nothing or only unknown names.
pub fn compute_overall_metrics(
    records: &CoverageData,
    subset: Option<&ServiceSubset>,
) -> OverallMetrics {
    if records.is_empty() {
        return OverallMetrics::no_data();
    }

    let filtered: Vec<(&String, &CoverageRecord)> = filter_records(records, subset)
        .inspect(|(name, record)| debug_assert_valid(name, record))
        .collect();

    if filtered.iter().all(|(_, record)| !record.has_operations()) {
        return OverallMetrics::empty_selection();
    }

    let sum = |field: fn(&CoverageRecord) -> u64| -> u64 {
        filtered.iter().map(|(_, record)| field(record)).sum()
    };

    OverallMetrics {
        total_operations: sum(|r| r.total_operations),
        total_supported: sum(|r| r.supported_operations),
        total_control_plane: sum(|r| r.control_plane_operations),
        total_supported_control_plane: sum(|r| r.supported_control_plane_operations),
        overall_coverage: mean_of_percentages(
            filtered
                .iter()
                .map(|(_, r)| (r.supported_operations, r.total_operations)),
        ),
        control_plane_coverage: mean_of_percentages(filtered.iter().map(|(_, r)| {
            (
                r.supported_control_plane_operations,
                r.control_plane_operations,
            )
        })),
        num_services: filtered.len(),
        has_data: true,
    }
}

/// Unweighted mean of `part / whole * 100` over pairs with `whole > 0`.
///
/// Returns 0 when no pair qualifies.
pub fn mean_of_percentages(pairs: impl IntoIterator<Item = (u64, u64)>) -> f64 {
    let (sum, count) = pairs
        .into_iter()
        .filter(|&(_, whole)| whole > 0)
        .fold((0.0, 0usize), |(sum, count), (part, whole)| {
            (sum + part as f64 / whole as f64 * 100.0, count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Invariant violations are caller bugs; fail fast in debug and test builds.
pub(crate) fn debug_assert_valid(name: &str, record: &CoverageRecord) {
    if cfg!(debug_assertions) {
        if let Err(e) = record.validate(name) {
            panic!("coverage record contract violated: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_records() -> CoverageData {
        let mut data = CoverageData::new();
        data.insert("A".into(), CoverageRecord::from_counts(10, 5, 4, 2));
        data.insert("B".into(), CoverageRecord::from_counts(0, 0, 0, 0));
        data
    }

    #[test]
    fn test_end_to_end_example() {
        let metrics = compute_overall_metrics(&example_records(), None);

        assert_eq!(metrics.total_operations, 10);
        assert_eq!(metrics.total_supported, 5);
        assert_eq!(metrics.total_control_plane, 4);
        assert_eq!(metrics.total_supported_control_plane, 2);
        assert_eq!(metrics.overall_coverage, 50.0);
        assert_eq!(metrics.control_plane_coverage, 50.0);
        assert_eq!(metrics.num_services, 2);
        assert!(metrics.has_data);
    }

    #[test]
    fn test_subset_of_operationless_service_is_zero_result() {
        let subset: ServiceSubset = ["B"].into_iter().collect();
        let metrics = compute_overall_metrics(&example_records(), Some(&subset));

        assert_eq!(metrics, OverallMetrics::empty_selection());
        assert_eq!(metrics.num_services, 0);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let data = example_records();
        let with_unknown: ServiceSubset = ["A", "Z"].into_iter().collect();
        let only_a: ServiceSubset = ["A"].into_iter().collect();

        assert_eq!(
            compute_overall_metrics(&data, Some(&with_unknown)),
            compute_overall_metrics(&data, Some(&only_a))
        );
    }

    #[test]
    fn test_empty_subset_is_zero_result() {
        let metrics = compute_overall_metrics(&example_records(), Some(&ServiceSubset::empty()));
        assert_eq!(metrics, OverallMetrics::empty_selection());
    }

    #[test]
    fn test_empty_records_is_no_data() {
        let metrics = compute_overall_metrics(&CoverageData::new(), None);
        assert_eq!(metrics, OverallMetrics::no_data());
        assert!(!metrics.has_data);
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_mean_of_means_is_not_weighted() {
        let mut data = CoverageData::new();
        data.insert("small".into(), CoverageRecord::from_counts(1, 1, 0, 0));
        data.insert("large".into(), CoverageRecord::from_counts(100, 10, 0, 0));

        let metrics = compute_overall_metrics(&data, None);

        // (100% + 10%) / 2, where the weighted figure would be 11 / 101
        assert!((metrics.overall_coverage - 55.0).abs() < 1e-9);
        assert_eq!(metrics.control_plane_coverage, 0.0);
        assert_eq!(metrics.total_unsupported(), 90);
    }

    #[test]
    fn test_control_plane_mean_skips_services_without_control_plane() {
        let mut data = CoverageData::new();
        data.insert("a".into(), CoverageRecord::from_counts(4, 4, 2, 1));
        data.insert("b".into(), CoverageRecord::from_counts(4, 0, 0, 0));

        let metrics = compute_overall_metrics(&data, None);

        assert_eq!(metrics.overall_coverage, 50.0);
        assert_eq!(metrics.control_plane_coverage, 50.0);
        assert_eq!(metrics.total_unsupported_control_plane(), 1);
    }

    #[test]
    fn test_mean_of_percentages_without_qualifying_pairs() {
        assert_eq!(mean_of_percentages(Vec::new()), 0.0);
        assert_eq!(mean_of_percentages(vec![(0, 0), (0, 0)]), 0.0);
        assert_eq!(mean_of_percentages(vec![(1, 4), (0, 0)]), 25.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "contract violated")]
    fn test_invariant_violation_fails_fast_in_debug() {
        let mut data = CoverageData::new();
        data.insert("bad".into(), CoverageRecord::from_counts(2, 3, 0, 0));
        compute_overall_metrics(&data, None);
    }
}
