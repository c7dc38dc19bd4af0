// crates/dispatch-board-store-sqlite/src/lib.rs
// ============================================================================
// Module: Dispatch Board SQLite Store Library
// Description: Durable override store backed by SQLite.
// Purpose: Persist warehouse-status overrides across process restarts.
// Dependencies: dispatch-board-core, rusqlite
// ============================================================================

//! ## Overview
//! This crate provides the durable [`OverrideStore`] implementation used by
//! deployments that must keep confirmed status changes across reloads. The
//! in-memory store in the core crate covers tests and demos.
//!
//! [`OverrideStore`]: dispatch_board_core::OverrideStore

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::MAX_VALUE_BYTES;
pub use store::SqliteOverrideStore;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;
