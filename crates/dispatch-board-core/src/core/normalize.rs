// crates/dispatch-board-core/src/core/normalize.rs
// ============================================================================
// Module: Dispatch Board Record Normalization
// Description: Raw feed rows into canonical order and dispatch records.
// Purpose: Reconcile drifting headers, coerce numerics, drop invalid rows.
// Dependencies: crate::core::{fields, record}
// ============================================================================

//! ## Overview
//! Normalization builds one order candidate and one dispatch candidate per
//! raw row, independently: a row may fail order validity but still yield a
//! valid dispatch, and vice versa. Malformed rows are dropped silently;
//! numeric coercion failures substitute sentinels (0 for quantity, NaN for
//! coordinates) instead of failing the row. Input ordering is preserved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::fields;
use crate::core::record::Dispatch;
use crate::core::record::Order;
use crate::core::record::RawRow;

// ============================================================================
// SECTION: Normalized Feed
// ============================================================================

/// The two record sets derived from one data load.
///
/// # Invariants
/// - Rebuilt wholesale per load; no incremental mutation except the
///   override merge applied downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFeed {
    /// Valid orders, in input row order.
    pub orders: Vec<Order>,
    /// Valid dispatches, in input row order.
    pub dispatches: Vec<Dispatch>,
}

/// Normalizes raw rows into canonical orders and dispatches.
#[must_use]
pub fn normalize(rows: &[RawRow]) -> NormalizedFeed {
    let mut orders = Vec::new();
    let mut dispatches = Vec::new();
    for row in rows {
        if let Some(order) = order_from_row(row) {
            orders.push(order);
        }
        if let Some(dispatch) = dispatch_from_row(row) {
            dispatches.push(dispatch);
        }
    }
    NormalizedFeed {
        orders,
        dispatches,
    }
}

// ============================================================================
// SECTION: Row Conversion
// ============================================================================

/// Builds an order from a raw row, or None when identity fields are missing.
fn order_from_row(row: &RawRow) -> Option<Order> {
    let id = fields::resolve(row, fields::ORDER_ID, "");
    let customer = fields::resolve(row, fields::CUSTOMER, "");
    if id.is_empty() || customer.is_empty() {
        return None;
    }
    Some(Order {
        id,
        customer,
        date: fields::resolve(row, fields::DATE, ""),
        status: fields::resolve(row, fields::ORDER_STATUS, ""),
        owner: fields::resolve_owner(row),
        quantity: parse_quantity(&fields::resolve(row, fields::QUANTITY, "0")),
        latitude: parse_coordinate(&fields::resolve(row, fields::LATITUDE, "")),
        longitude: parse_coordinate(&fields::resolve(row, fields::LONGITUDE, "")),
    })
}

/// Builds a dispatch from a raw row, or None when identity fields are missing.
fn dispatch_from_row(row: &RawRow) -> Option<Dispatch> {
    let id = fields::resolve(row, fields::DISPATCH_ID, "");
    let order_id = fields::resolve(row, fields::DISPATCH_ORDER_ID, "");
    if id.is_empty() || order_id.is_empty() {
        return None;
    }
    Some(Dispatch {
        id,
        order_id,
        customer: fields::resolve(row, fields::CUSTOMER, ""),
        date: fields::resolve(row, fields::DATE, ""),
        carrier: fields::resolve(row, fields::DISPATCH_CARRIER, ""),
        warehouse_status: fields::resolve(row, fields::WAREHOUSE_STATUS, ""),
        order_status: fields::resolve(row, fields::ORDER_STATUS, ""),
        last_modified: fields::resolve(row, fields::APPROVAL_DATE, ""),
    })
}

// ============================================================================
// SECTION: Numeric Coercion
// ============================================================================

/// Parses a quantity string into a non-negative number.
///
/// Commas are thousands separators in quantity columns, so they are
/// stripped along with spaces before parsing. Failures coerce to 0, and a
/// stray negative clamps to 0 to hold the data-model invariant.
#[must_use]
pub fn parse_quantity(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
    cleaned.parse::<f64>().map_or(0.0, |value| {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    })
}

/// Parses a coordinate string into a number, or NaN on failure.
///
/// Coordinate columns come from decimal-comma locales, so the first comma
/// is treated as the decimal separator. This intentionally differs from
/// [`parse_quantity`]: the two fields follow different source conventions.
#[must_use]
pub fn parse_coordinate(raw: &str) -> f64 {
    let cleaned = raw.trim().replacen(',', ".", 1);
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
