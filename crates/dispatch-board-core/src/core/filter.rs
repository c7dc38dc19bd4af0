// crates/dispatch-board-core/src/core/filter.rs
// ============================================================================
// Module: Dispatch Board Filtering
// Description: Predicate-based selection over orders and dispatches.
// Purpose: Drive table views and filter widgets at the render boundary.
// Dependencies: crate::core::record
// ============================================================================

//! ## Overview
//! Pure selection functions. Every predicate is a case-insensitive exact
//! match on a status string, with the [`ALL_STATUSES`] sentinel meaning "no
//! filter". Selection preserves input ordering. The vocabulary helpers feed
//! the render boundary's filter widgets: the warehouse vocabulary lists the
//! fixed baseline first, then any extra statuses observed in the current
//! dispatch set, in first-observed order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::record::ALL_STATUSES;
use crate::core::record::Dispatch;
use crate::core::record::Order;
use crate::core::record::WAREHOUSE_STATUS_BASELINE;

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Returns true when the predicate means "no filter".
fn is_all(status: &str) -> bool {
    status.to_lowercase() == ALL_STATUSES.to_lowercase()
}

/// Case-insensitive exact status match.
fn status_matches(candidate: &str, wanted: &str) -> bool {
    candidate.to_lowercase() == wanted.to_lowercase()
}

/// Filters orders by status.
///
/// The [`ALL_STATUSES`] sentinel returns all orders unchanged, preserving
/// the original ordering.
#[must_use]
pub fn filter_orders_by_status(orders: &[Order], status: &str) -> Vec<Order> {
    if is_all(status) {
        return orders.to_vec();
    }
    orders.iter().filter(|order| status_matches(&order.status, status)).cloned().collect()
}

/// Filters dispatches by warehouse status and order status, conjunctively.
///
/// Absent or sentinel predicates are skipped, never treated as "match
/// empty string".
#[must_use]
pub fn filter_dispatches(
    dispatches: &[Dispatch],
    warehouse_status: Option<&str>,
    order_status: Option<&str>,
) -> Vec<Dispatch> {
    let warehouse = warehouse_status.filter(|status| !is_all(status));
    let order = order_status.filter(|status| !is_all(status));
    dispatches
        .iter()
        .filter(|dispatch| {
            warehouse.is_none_or(|status| status_matches(&dispatch.warehouse_status, status))
                && order.is_none_or(|status| status_matches(&dispatch.order_status, status))
        })
        .cloned()
        .collect()
}

// ============================================================================
// SECTION: Filter Vocabularies
// ============================================================================

/// Builds the selectable warehouse-status vocabulary for a dispatch set.
///
/// Union of the fixed baseline and the non-empty statuses actually observed,
/// deduplicated, baseline first, extras in first-observed order.
#[must_use]
pub fn warehouse_status_options(dispatches: &[Dispatch]) -> Vec<String> {
    let mut options: Vec<String> =
        WAREHOUSE_STATUS_BASELINE.iter().map(ToString::to_string).collect();
    for dispatch in dispatches {
        let status = dispatch.warehouse_status.as_str();
        if !status.is_empty() && !options.iter().any(|known| known == status) {
            options.push(status.to_string());
        }
    }
    options
}

/// Lists the distinct order statuses observed, in first-observed order.
#[must_use]
pub fn observed_order_statuses(orders: &[Order]) -> Vec<String> {
    let mut statuses: Vec<String> = Vec::new();
    for order in orders {
        let status = order.status.as_str();
        if !status.is_empty() && !statuses.iter().any(|known| known == status) {
            statuses.push(status.to_string());
        }
    }
    statuses
}

/// Lists the distinct order statuses observed on dispatches, in
/// first-observed order.
#[must_use]
pub fn observed_dispatch_order_statuses(dispatches: &[Dispatch]) -> Vec<String> {
    let mut statuses: Vec<String> = Vec::new();
    for dispatch in dispatches {
        let status = dispatch.order_status.as_str();
        if !status.is_empty() && !statuses.iter().any(|known| known == status) {
            statuses.push(status.to_string());
        }
    }
    statuses
}
