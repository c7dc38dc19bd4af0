// crates/dispatch-board-core/tests/zones.rs
// ============================================================================
// Module: Zone Aggregation Tests
// Description: Tests for deci-degree zone bucketing and summaries.
// Purpose: Validate cell grouping, means, and non-finite exclusion.
// Dependencies: dispatch-board-core
// ============================================================================
//! ## Overview
//! Ensures orders are grouped by rounded coordinate cells, summaries carry
//! cluster means and totals, and unmappable orders are skipped without
//! affecting the rest of the set.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;

use dispatch_board_core::Order;
use dispatch_board_core::ZoneSummary;
use dispatch_board_core::aggregate;

fn order(id: &str, latitude: f64, longitude: f64, quantity: f64) -> Order {
    Order {
        id: id.to_string(),
        customer: "Cliente".to_string(),
        date: String::new(),
        status: String::new(),
        owner: String::new(),
        quantity,
        latitude,
        longitude,
    }
}

/// Keys summaries by rounded deci-degree cell; output order is unspecified.
fn by_cell(summaries: &[ZoneSummary]) -> BTreeMap<(i64, i64), ZoneSummary> {
    summaries
        .iter()
        .map(|summary| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Test coordinates scaled by 10 are tiny integers."
            )]
            let key =
                ((summary.latitude * 10.0).round() as i64, (summary.longitude * 10.0).round() as i64);
            (key, summary.clone())
        })
        .collect()
}

/// Verifies nearby orders collapse into one cell with mean coordinates and
/// summed quantities.
#[test]
fn aggregate_groups_nearby_orders_into_one_zone() {
    let orders =
        vec![order("P-1", 18.70, -70.10, 3.0), order("P-2", 18.74, -70.14, 5.0)];

    let summaries = aggregate(&orders);
    assert_eq!(summaries.len(), 1);

    let cells = by_cell(&summaries);
    let zone = cells.get(&(187, -701)).unwrap();
    assert_eq!(zone.order_count, 2);
    assert_eq!(zone.total_quantity, 8.0);
    assert!((zone.latitude - 18.72).abs() < 1e-9);
    assert!((zone.longitude - (-70.12)).abs() < 1e-9);
}

/// Verifies distant orders land in distinct cells.
#[test]
fn aggregate_separates_distant_orders() {
    let orders =
        vec![order("P-1", 18.5, -69.9, 1.0), order("P-2", 19.8, -70.7, 2.0)];

    let summaries = aggregate(&orders);
    assert_eq!(summaries.len(), 2);

    let cells = by_cell(&summaries);
    assert_eq!(cells.get(&(185, -699)).unwrap().order_count, 1);
    assert_eq!(cells.get(&(198, -707)).unwrap().order_count, 1);
}

/// Verifies orders with non-finite coordinates are skipped but do not
/// disturb the mappable ones.
#[test]
fn aggregate_skips_unmappable_orders() {
    let orders = vec![
        order("P-1", f64::NAN, -70.1, 4.0),
        order("P-2", 18.7, f64::NAN, 4.0),
        order("P-3", 18.7, -70.1, 4.0),
    ];

    let summaries = aggregate(&orders);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].order_count, 1);
    assert_eq!(summaries[0].total_quantity, 4.0);
}

/// Verifies zero mappable orders yield an empty vector, not an error.
#[test]
fn aggregate_handles_empty_input() {
    assert!(aggregate(&[]).is_empty());
    assert!(aggregate(&[order("P-1", f64::NAN, f64::NAN, 1.0)]).is_empty());
}
