// crates/dispatch-board-core/src/core/mod.rs
// ============================================================================
// Module: Dispatch Board Core Types
// Description: Canonical record shapes and the normalization pipeline.
// Purpose: Provide stable, serializable types plus the pure pipeline stages.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core modules hold the canonical records derived from the tabular feed and
//! the pure pipeline stages over them: field resolution, normalization,
//! filtering, and zone aggregation. Everything here is deterministic and
//! side-effect free; persistence and the commit protocol live in the
//! runtime modules.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod fields;
pub mod filter;
pub mod normalize;
pub mod record;
pub mod zones;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use filter::filter_dispatches;
pub use filter::filter_orders_by_status;
pub use filter::observed_dispatch_order_statuses;
pub use filter::observed_order_statuses;
pub use filter::warehouse_status_options;
pub use normalize::NormalizedFeed;
pub use normalize::normalize;
pub use record::ALL_STATUSES;
pub use record::Dispatch;
pub use record::Order;
pub use record::OverrideEntry;
pub use record::RawRow;
pub use record::WAREHOUSE_STATUS_BASELINE;
pub use record::ZoneSummary;
pub use zones::aggregate;
