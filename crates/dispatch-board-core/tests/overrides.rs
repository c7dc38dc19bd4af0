// crates/dispatch-board-core/tests/overrides.rs
// ============================================================================
// Module: Override Runtime Tests
// Description: Tests for the override merge and the commit protocol.
// Purpose: Validate precedence, idempotence, fail-open reads, and rollback.
// Dependencies: dispatch-board-core, serde_json
// ============================================================================
//! ## Overview
//! Ensures persisted overrides take precedence over canonical dispatch
//! values, merge reads fail open, and the propose/confirm/decline protocol
//! commits exactly on confirm and rolls back completely on decline.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use dispatch_board_core::Dispatch;
use dispatch_board_core::InMemoryOverrideStore;
use dispatch_board_core::OverrideCoordinator;
use dispatch_board_core::OverrideEntry;
use dispatch_board_core::OverrideStore;
use dispatch_board_core::ProposalError;
use dispatch_board_core::StatusChangeProposal;
use dispatch_board_core::StoreError;
use dispatch_board_core::apply_all;

fn dispatch(id: &str, warehouse_status: &str) -> Dispatch {
    Dispatch {
        id: id.to_string(),
        order_id: format!("P-{id}"),
        customer: "Cliente".to_string(),
        date: String::new(),
        carrier: String::new(),
        warehouse_status: warehouse_status.to_string(),
        order_status: String::new(),
        last_modified: String::new(),
    }
}

fn proposal(dispatch_id: &str, from: &str, to: &str, timestamp: &str) -> StatusChangeProposal {
    StatusChangeProposal {
        dispatch_id: dispatch_id.to_string(),
        previous_status: from.to_string(),
        proposed_status: to.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// Override store that fails every operation.
struct BrokenStore;

impl OverrideStore for BrokenStore {
    fn get(&self, _dispatch_id: &str) -> Result<Option<OverrideEntry>, StoreError> {
        Err(StoreError::Io("disk on fire".to_string()))
    }

    fn set(&self, _entry: &OverrideEntry) -> Result<(), StoreError> {
        Err(StoreError::Io("disk on fire".to_string()))
    }
}

/// Verifies a stored override replaces the canonical status and timestamp
/// while untouched dispatches pass through unchanged.
#[test]
fn apply_all_layers_overrides_over_canonical_values() {
    let store = InMemoryOverrideStore::new();
    store
        .set(&OverrideEntry {
            dispatch_id: "D-1".to_string(),
            warehouse_status: "ENTREGADO".to_string(),
            last_modified: "T1".to_string(),
        })
        .unwrap();

    let dispatches = vec![dispatch("D-1", "EN PREPARACION"), dispatch("D-2", "EN PREPARACION")];
    let merged = apply_all(&store, &dispatches);

    assert_eq!(merged[0].warehouse_status, "ENTREGADO");
    assert_eq!(merged[0].last_modified, "T1");
    assert_eq!(merged[1], dispatches[1]);
    // The input is untouched.
    assert_eq!(dispatches[0].warehouse_status, "EN PREPARACION");
}

/// Verifies applying the merge twice equals applying it once.
#[test]
fn apply_all_is_idempotent() {
    let store = InMemoryOverrideStore::new();
    store
        .set(&OverrideEntry {
            dispatch_id: "D-1".to_string(),
            warehouse_status: "ENTREGADO".to_string(),
            last_modified: "T1".to_string(),
        })
        .unwrap();

    let dispatches = vec![dispatch("D-1", "EN PREPARACION"), dispatch("D-2", "LISTO")];
    let once = apply_all(&store, &dispatches);
    let twice = apply_all(&store, &once);
    assert_eq!(once, twice);
}

/// Verifies a failing store degrades to canonical data instead of blocking.
#[test]
fn apply_all_fails_open_on_store_errors() {
    let dispatches = vec![dispatch("D-1", "EN PREPARACION")];
    let merged = apply_all(&BrokenStore, &dispatches);
    assert_eq!(merged, dispatches);
}

/// Verifies set is a last-writer-wins upsert.
#[test]
fn store_set_is_last_writer_wins() {
    let store = InMemoryOverrideStore::new();
    for (status, timestamp) in [("EN RUTA/DESPACHO", "T1"), ("ENTREGADO", "T2")] {
        store
            .set(&OverrideEntry {
                dispatch_id: "D-1".to_string(),
                warehouse_status: status.to_string(),
                last_modified: timestamp.to_string(),
            })
            .unwrap();
    }

    let entry = store.get("D-1").unwrap().unwrap();
    assert_eq!(entry.warehouse_status, "ENTREGADO");
    assert_eq!(entry.last_modified, "T2");
}

/// Verifies confirm commits the pending change and clears the slot.
#[test]
fn confirm_commits_pending_change() {
    let store = InMemoryOverrideStore::new();
    let mut coordinator = OverrideCoordinator::new(store.clone());

    coordinator.propose(proposal("D-1", "EN PREPARACION", "ENTREGADO", "T1")).unwrap();
    assert!(coordinator.pending().is_some());

    let entry = coordinator.confirm().unwrap();
    assert_eq!(entry.warehouse_status, "ENTREGADO");
    assert_eq!(entry.last_modified, "T1");
    assert!(coordinator.pending().is_none());

    let stored = store.get("D-1").unwrap().unwrap();
    assert_eq!(stored.warehouse_status, "ENTREGADO");
}

/// Verifies decline leaves the store and the canonical record untouched.
#[test]
fn decline_is_a_full_rollback() {
    let store = InMemoryOverrideStore::new();
    let mut coordinator = OverrideCoordinator::new(store.clone());
    let dispatches = vec![dispatch("D-1", "EN PREPARACION")];

    coordinator.propose(proposal("D-1", "EN PREPARACION", "ENTREGADO", "T1")).unwrap();
    let dropped = coordinator.decline().unwrap();
    assert_eq!(dropped.proposed_status, "ENTREGADO");
    assert!(coordinator.pending().is_none());

    // No partial write: the store has no entry and the merge is a no-op.
    assert!(store.get("D-1").unwrap().is_none());
    let merged = apply_all(&store, &dispatches);
    assert_eq!(merged[0].warehouse_status, "EN PREPARACION");
    assert_eq!(merged[0].last_modified, "");
}

/// Verifies the single pending slot rejects a second proposal.
#[test]
fn second_proposal_is_rejected_while_pending() {
    let mut coordinator = OverrideCoordinator::new(InMemoryOverrideStore::new());
    coordinator.propose(proposal("D-1", "EN PREPARACION", "ENTREGADO", "T1")).unwrap();

    let error = coordinator
        .propose(proposal("D-2", "LISTO PARA DESPACHO", "ENTREGADO", "T2"))
        .unwrap_err();
    assert!(matches!(error, ProposalError::AlreadyPending { dispatch_id } if dispatch_id == "D-1"));
}

/// Verifies confirm and decline require a pending proposal.
#[test]
fn resolving_an_empty_slot_is_an_error() {
    let mut coordinator = OverrideCoordinator::new(InMemoryOverrideStore::new());
    assert!(matches!(coordinator.confirm().unwrap_err(), ProposalError::NonePending));
    assert!(matches!(coordinator.decline().unwrap_err(), ProposalError::NonePending));
}

/// Verifies a store failure on confirm keeps the proposal pending so the
/// caller can retry or decline.
#[test]
fn confirm_failure_keeps_proposal_pending() {
    let mut coordinator = OverrideCoordinator::new(BrokenStore);
    coordinator.propose(proposal("D-1", "EN PREPARACION", "ENTREGADO", "T1")).unwrap();

    let error = coordinator.confirm().unwrap_err();
    assert!(matches!(error, ProposalError::Store(_)));
    assert!(coordinator.pending().is_some());

    coordinator.decline().unwrap();
    assert!(coordinator.pending().is_none());
}
