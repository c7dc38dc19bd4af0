// crates/dispatch-board-core/src/core/record.rs
// ============================================================================
// Module: Dispatch Board Records
// Description: Canonical record shapes derived from the tabular feed.
// Purpose: Define orders, dispatches, zone summaries, and override entries.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical records the normalization pipeline
//! produces from raw feed rows, plus the override entry persisted by the
//! local store. Records are rebuilt wholesale on each data load; only the
//! override layer outlives a load.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Status Vocabulary
// ============================================================================

/// Baseline warehouse status vocabulary.
///
/// # Invariants
/// - Order is stable: filter widgets list these entries first, before any
///   extra status strings observed in the feed.
pub const WAREHOUSE_STATUS_BASELINE: &[&str] = &[
    "EN PREPARACION",
    "PREPARADO/PICKEADO",
    "LISTO PARA DESPACHO",
    "EN RUTA/DESPACHO",
    "ENTREGADO",
    "PARCIALMENTE ENTREGADO",
    "DEVUELTO/RECHAZADO",
    "REQUIERE REVISION",
];

/// Sentinel filter value meaning "no filter applied".
///
/// Matched case-insensitively wherever a status predicate is accepted.
pub const ALL_STATUSES: &str = "Todos";

// ============================================================================
// SECTION: Raw Rows
// ============================================================================

/// A raw feed row: header string to string value.
///
/// # Invariants
/// - Keys are the verbatim header strings from the upstream parser; no
///   case-folding or trimming is applied to keys.
/// - Absent fields are either missing keys or empty values; both mean the
///   same thing to field resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(BTreeMap<String, String>);

impl RawRow {
    /// Creates an empty raw row.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the value for a header, if present.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    /// Inserts a header/value pair, replacing any prior value.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.0.insert(header.into(), value.into());
    }

    /// Returns the number of populated headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the row carries no headers at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// SECTION: Orders
// ============================================================================

/// A customer order derived from the feed.
///
/// # Invariants
/// - `id` and `customer` are non-empty; rows failing this are dropped from
///   the order set during normalization, never nulled.
/// - `quantity` is finite and >= 0.
/// - `latitude`/`longitude` may be NaN ("unmappable"); such orders still
///   appear in tabular views but are excluded from zone aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: String,
    /// Customer name.
    pub customer: String,
    /// Free-form order date; not parsed by this core.
    pub date: String,
    /// Order status; may be empty.
    pub status: String,
    /// Responsible party; may be empty.
    pub owner: String,
    /// Package quantity, coerced from the feed; defaults to 0.
    pub quantity: f64,
    /// Geocoded latitude, or NaN when absent or malformed.
    pub latitude: f64,
    /// Geocoded longitude, or NaN when absent or malformed.
    pub longitude: f64,
}

// ============================================================================
// SECTION: Dispatches
// ============================================================================

/// A shipment/warehouse-handling record linked to an order.
///
/// # Invariants
/// - `id` and `order_id` are non-empty; rows failing this are dropped from
///   the dispatch set during normalization.
/// - `warehouse_status` reflects the canonical feed value until an override
///   is merged on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Dispatch identifier.
    pub id: String,
    /// Identifier of the order this dispatch belongs to.
    pub order_id: String,
    /// Customer name.
    pub customer: String,
    /// Free-form dispatch date; not parsed by this core.
    pub date: String,
    /// Carrier or driver responsible for the dispatch.
    pub carrier: String,
    /// Warehouse handling status.
    pub warehouse_status: String,
    /// Order-level status, resolved independently of the warehouse status.
    pub order_status: String,
    /// Free-form last-modified timestamp; empty when never touched.
    pub last_modified: String,
}

// ============================================================================
// SECTION: Zone Summaries
// ============================================================================

/// Per-zone summary of geocoded orders.
///
/// # Invariants
/// - `order_count` >= 1: empty cells are never emitted.
/// - `latitude`/`longitude` are the arithmetic means of the member orders.
/// - Derived and ephemeral; recomputed on every filter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    /// Mean latitude of the zone's orders.
    pub latitude: f64,
    /// Mean longitude of the zone's orders.
    pub longitude: f64,
    /// Number of orders in the zone.
    pub order_count: u64,
    /// Sum of member order quantities.
    pub total_quantity: f64,
}

// ============================================================================
// SECTION: Override Entries
// ============================================================================

/// A locally persisted warehouse-status correction for one dispatch.
///
/// # Invariants
/// - Created or updated only through a confirmed status change.
/// - Takes precedence over the canonical feed value when merged.
/// - Never expired or deleted by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Dispatch identifier the override applies to.
    pub dispatch_id: String,
    /// Overriding warehouse status.
    pub warehouse_status: String,
    /// Free-form timestamp of the confirmed change.
    pub last_modified: String,
}
