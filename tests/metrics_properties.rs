//! Property-based tests for coverage aggregation
//!
//! These invariants should hold for any well-formed set of records:
//! - Table totals add up to the overall totals
//! - The mean coverage does not depend on record order
//! - Table rows are sorted by coverage, highest first
//! - Zero-operation services never drag the mean down
//! - Selecting nothing yields the zero result

mod common;

use ackcov::core::{
    build_service_table, compute_overall_metrics, CoverageData, CoverageRecord, ServiceSubset,
};
use proptest::prelude::*;

/// A record satisfying the count invariants.
fn record() -> impl Strategy<Value = CoverageRecord> {
    (0u64..500)
        .prop_flat_map(|total| (Just(total), 0..=total, 0..=total))
        .prop_flat_map(|(total, supported, cp)| (Just(total), Just(supported), Just(cp), 0..=cp))
        .prop_map(|(total, supported, cp, supported_cp)| {
            CoverageRecord::from_counts(total, supported, cp, supported_cp)
        })
}

fn coverage_data() -> impl Strategy<Value = CoverageData> {
    prop::collection::vec(record(), 1..20).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, r)| (format!("svc{i}"), r))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_table_totals_match_metrics(data in coverage_data()) {
        let metrics = compute_overall_metrics(&data, None);
        let rows = build_service_table(&data, None);

        let total: u64 = rows.iter().map(|r| r.total_operations).sum();
        let supported: u64 = rows.iter().map(|r| r.supported_operations).sum();
        prop_assert_eq!(total, metrics.total_operations);
        prop_assert_eq!(supported, metrics.total_supported);
    }

    #[test]
    fn prop_mean_is_order_independent(data in coverage_data()) {
        let mut reversed = data.clone();
        reversed.reverse();

        let a = compute_overall_metrics(&data, None);
        let b = compute_overall_metrics(&reversed, None);
        prop_assert!((a.overall_coverage - b.overall_coverage).abs() < 1e-9);
        prop_assert!((a.control_plane_coverage - b.control_plane_coverage).abs() < 1e-9);
        prop_assert_eq!(a.total_operations, b.total_operations);
    }

    #[test]
    fn prop_rows_sorted_descending(data in coverage_data()) {
        let rows = build_service_table(&data, None);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].coverage_pct >= pair[1].coverage_pct);
        }
    }

    #[test]
    fn prop_zero_operation_services_do_not_change_mean(data in coverage_data(), extra in 1usize..5) {
        let before = compute_overall_metrics(&data, None);

        let mut padded = data.clone();
        for i in 0..extra {
            padded.insert(format!("empty{i}"), CoverageRecord::from_counts(0, 0, 0, 0));
        }
        let after = compute_overall_metrics(&padded, None);

        prop_assert!((before.overall_coverage - after.overall_coverage).abs() < 1e-9);
        prop_assert!((before.control_plane_coverage - after.control_plane_coverage).abs() < 1e-9);
    }

    #[test]
    fn prop_empty_subset_is_zero_result(data in coverage_data()) {
        let metrics = compute_overall_metrics(&data, Some(&ServiceSubset::empty()));
        prop_assert_eq!(metrics.num_services, 0);
        prop_assert_eq!(metrics.total_operations, 0);
        prop_assert_eq!(metrics.overall_coverage, 0.0);
        prop_assert!(build_service_table(&data, Some(&ServiceSubset::empty())).is_empty());
    }

    #[test]
    fn prop_coverage_within_bounds(data in coverage_data()) {
        let metrics = compute_overall_metrics(&data, None);
        prop_assert!((0.0..=100.0).contains(&metrics.overall_coverage));
        prop_assert!((0.0..=100.0).contains(&metrics.control_plane_coverage));
    }
}

#[test]
fn test_end_to_end_example() {
    let data = common::records(&[("a", 10, 5, 4, 2), ("b", 0, 0, 0, 0)]);
    let metrics = compute_overall_metrics(&data, None);

    assert_eq!(metrics.total_operations, 10);
    assert_eq!(metrics.total_supported, 5);
    assert_eq!(metrics.overall_coverage, 50.0);
    assert_eq!(metrics.control_plane_coverage, 50.0);
    assert_eq!(metrics.num_services, 2);
}

#[test]
fn test_unknown_names_are_ignored() {
    let data = common::records(&[("a", 10, 5, 4, 2), ("b", 3, 1, 0, 0)]);
    let with_unknown: ServiceSubset = ["a", "z"].into_iter().collect();
    let only_a: ServiceSubset = ["a"].into_iter().collect();

    assert_eq!(
        compute_overall_metrics(&data, Some(&with_unknown)),
        compute_overall_metrics(&data, Some(&only_a))
    );
}
