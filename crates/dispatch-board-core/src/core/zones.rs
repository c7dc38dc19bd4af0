// crates/dispatch-board-core/src/core/zones.rs
// ============================================================================
// Module: Dispatch Board Zone Aggregation
// Description: Coarse spatial clustering of geocoded orders.
// Purpose: Produce per-zone summaries for map rendering.
// Dependencies: crate::core::record
// ============================================================================

//! ## Overview
//! Orders are bucketed into cells of one decimal degree of precision per
//! axis (roughly 11 km at the feed's latitude band). Cells accumulate
//! coordinate sums, counts, and quantity totals; each non-empty cell emits
//! one summary at the cluster's mean coordinates. Orders with non-finite
//! coordinates are skipped entirely. Output order is unspecified: grouping
//! is order-independent, so consumers key results by rounded cell.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::record::Order;
use crate::core::record::ZoneSummary;

// ============================================================================
// SECTION: Cell Accumulation
// ============================================================================

/// Running totals for one zone cell.
#[derive(Debug, Default, Clone, Copy)]
struct CellAccumulator {
    /// Sum of member latitudes.
    lat_sum: f64,
    /// Sum of member longitudes.
    lon_sum: f64,
    /// Number of member orders.
    count: u64,
    /// Sum of member quantities.
    quantity: f64,
}

/// Quantizes a coordinate to an integer deci-degree cell index.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Finite coordinates scaled by 10 are far inside i64 range."
)]
fn cell_index(coordinate: f64) -> i64 {
    (coordinate * 10.0).round() as i64
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Aggregates geocoded orders into per-zone summaries.
///
/// Zero mappable orders yield an empty vector, not an error.
#[must_use]
pub fn aggregate(orders: &[Order]) -> Vec<ZoneSummary> {
    let mut cells: BTreeMap<(i64, i64), CellAccumulator> = BTreeMap::new();
    for order in orders {
        if !order.latitude.is_finite() || !order.longitude.is_finite() {
            continue;
        }
        let key = (cell_index(order.latitude), cell_index(order.longitude));
        let cell = cells.entry(key).or_default();
        cell.lat_sum += order.latitude;
        cell.lon_sum += order.longitude;
        cell.count += 1;
        cell.quantity += order.quantity;
    }
    cells
        .into_values()
        .map(|cell| {
            // count >= 1 for every emitted cell, so the means are defined.
            let count = cell.count as f64;
            ZoneSummary {
                latitude: cell.lat_sum / count,
                longitude: cell.lon_sum / count,
                order_count: cell.count,
                total_quantity: cell.quantity,
            }
        })
        .collect()
}
