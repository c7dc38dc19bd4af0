// crates/dispatch-board-core/src/interfaces/mod.rs
// ============================================================================
// Module: Dispatch Board Interfaces
// Description: Backend-agnostic interfaces for override persistence.
// Purpose: Define the contract surfaces used by the override runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the core integrates with durable storage without
//! embedding backend-specific details. The override store is a plain
//! key-value contract keyed by dispatch id: absence means "no override",
//! and writes are unconditional last-writer-wins upserts. Implementations
//! are injected so tests can swap in an in-memory fake.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::record::OverrideEntry;

// ============================================================================
// SECTION: Override Store
// ============================================================================

/// Override store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("override store io error: {0}")]
    Io(String),
    /// Store data is corrupted or fails integrity checks.
    #[error("override store corruption: {0}")]
    Corrupt(String),
    /// Store schema version is incompatible.
    #[error("override store version mismatch: {0}")]
    VersionMismatch(String),
    /// Store data is invalid.
    #[error("override store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("override store error: {0}")]
    Store(String),
}

/// Durable override store keyed by dispatch id.
pub trait OverrideStore {
    /// Loads the override for a dispatch, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails. Callers merging overrides
    /// onto canonical records treat errors as "no override present".
    fn get(&self, dispatch_id: &str) -> Result<Option<OverrideEntry>, StoreError>;

    /// Upserts an override entry, unconditionally replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when saving fails.
    fn set(&self, entry: &OverrideEntry) -> Result<(), StoreError>;
}
