// crates/dispatch-board-core/src/runtime/memory.rs
// ============================================================================
// Module: Dispatch Board In-Memory Store
// Description: Simple in-memory override store for tests and examples.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of
//! [`OverrideStore`] for tests and local demos. Durable deployments use the
//! SQLite-backed store crate instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::record::OverrideEntry;
use crate::interfaces::OverrideStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory override store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOverrideStore {
    /// Override map protected by a mutex.
    entries: Arc<Mutex<BTreeMap<String, OverrideEntry>>>,
}

impl InMemoryOverrideStore {
    /// Creates a new in-memory override store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl OverrideStore for InMemoryOverrideStore {
    fn get(&self, dispatch_id: &str) -> Result<Option<OverrideEntry>, StoreError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| StoreError::Store("override store mutex poisoned".to_string()))?;
        Ok(guard.get(dispatch_id).cloned())
    }

    fn set(&self, entry: &OverrideEntry) -> Result<(), StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Store("override store mutex poisoned".to_string()))?
            .insert(entry.dispatch_id.clone(), entry.clone());
        Ok(())
    }
}
