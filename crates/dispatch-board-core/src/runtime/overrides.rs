// crates/dispatch-board-core/src/runtime/overrides.rs
// ============================================================================
// Module: Dispatch Board Override Runtime
// Description: Override merge and the propose/confirm/decline protocol.
// Purpose: Apply persisted overrides and gate status changes on confirmation.
// Dependencies: crate::core, crate::interfaces, crate::runtime::audit
// ============================================================================

//! ## Overview
//! Two concerns live here. First, the merge: [`apply_all`] layers persisted
//! overrides onto freshly normalized dispatches, failing open when the store
//! misbehaves so rendering is never blocked. Second, the commit protocol:
//! a status change is held in a single pending slot until an explicit
//! confirm or decline resolves it. Confirm commits the override through the
//! store; decline is a no-op rollback that leaves both the store and the
//! in-memory records untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::record::Dispatch;
use crate::core::record::OverrideEntry;
use crate::interfaces::OverrideStore;
use crate::interfaces::StoreError;
use crate::runtime::audit::NoopOverrideAuditSink;
use crate::runtime::audit::OverrideAuditEvent;
use crate::runtime::audit::OverrideAuditOutcome;
use crate::runtime::audit::OverrideAuditSink;

// ============================================================================
// SECTION: Override Merge
// ============================================================================

/// Returns a dispatch with an override entry layered on top.
///
/// Only `warehouse_status` and `last_modified` come from the override; all
/// other fields keep their canonical values.
#[must_use]
pub fn apply_one(dispatch: &Dispatch, entry: &OverrideEntry) -> Dispatch {
    Dispatch {
        warehouse_status: entry.warehouse_status.clone(),
        last_modified: entry.last_modified.clone(),
        ..dispatch.clone()
    }
}

/// Applies persisted overrides to a freshly normalized dispatch set.
///
/// Returns new records; the input is not mutated. Dispatches without an
/// override pass through unchanged, so the operation is idempotent. A store
/// read failure for a dispatch is absorbed as "no override present": the
/// canonical record is kept and rendering proceeds.
#[must_use]
pub fn apply_all<S: OverrideStore + ?Sized>(store: &S, dispatches: &[Dispatch]) -> Vec<Dispatch> {
    dispatches
        .iter()
        .map(|dispatch| match store.get(&dispatch.id) {
            Ok(Some(entry)) => apply_one(dispatch, &entry),
            Ok(None) | Err(_) => dispatch.clone(),
        })
        .collect()
}

// ============================================================================
// SECTION: Status Change Proposals
// ============================================================================

/// A proposed warehouse-status change awaiting confirmation.
///
/// # Invariants
/// - `previous_status` captures the record's status at proposal time so a
///   decline can be verified as a full rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeProposal {
    /// Dispatch identifier the change targets.
    pub dispatch_id: String,
    /// Warehouse status of the record when the change was proposed.
    pub previous_status: String,
    /// Proposed warehouse status.
    pub proposed_status: String,
    /// Free-form timestamp recorded on commit.
    pub timestamp: String,
}

/// Override protocol errors.
#[derive(Debug, Error)]
pub enum ProposalError {
    /// A proposal is already pending; it must be resolved first.
    #[error("a status change for dispatch {dispatch_id} is already pending")]
    AlreadyPending {
        /// Dispatch identifier of the pending proposal.
        dispatch_id: String,
    },
    /// Confirm or decline was called with no pending proposal.
    #[error("no status change is pending")]
    NonePending,
    /// The store rejected the committed override.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Coordinator
// ============================================================================

/// Coordinates the two-step override commit protocol.
///
/// Holds at most one pending proposal. The triggering interaction is
/// synchronous user input, so a second proposal before the first resolves
/// is a protocol violation, not a queueing request. There is no timeout:
/// an unresolved proposal waits at the human-input boundary without
/// blocking any other operation.
pub struct OverrideCoordinator<S: OverrideStore> {
    /// Durable override store written on confirm.
    store: S,
    /// Audit sink for lifecycle events.
    audit: Box<dyn OverrideAuditSink>,
    /// The single pending proposal slot.
    pending: Option<StatusChangeProposal>,
}

impl<S: OverrideStore> OverrideCoordinator<S> {
    /// Creates a coordinator with no audit logging.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_audit(store, Box::new(NoopOverrideAuditSink))
    }

    /// Creates a coordinator recording lifecycle events to the given sink.
    #[must_use]
    pub fn with_audit(store: S, audit: Box<dyn OverrideAuditSink>) -> Self {
        Self {
            store,
            audit,
            pending: None,
        }
    }

    /// Returns the pending proposal, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&StatusChangeProposal> {
        self.pending.as_ref()
    }

    /// Holds a status change in the pending slot.
    ///
    /// # Errors
    ///
    /// Returns [`ProposalError::AlreadyPending`] when an unresolved proposal
    /// occupies the slot.
    pub fn propose(
        &mut self,
        proposal: StatusChangeProposal,
    ) -> Result<&StatusChangeProposal, ProposalError> {
        if let Some(pending) = &self.pending {
            return Err(ProposalError::AlreadyPending {
                dispatch_id: pending.dispatch_id.clone(),
            });
        }
        self.audit.record(&audit_event(OverrideAuditOutcome::Proposed, &proposal));
        self.pending = Some(proposal);
        // The slot was just filled; re-borrow for the caller.
        self.pending.as_ref().ok_or(ProposalError::NonePending)
    }

    /// Confirms the pending proposal and commits it to the store.
    ///
    /// On success the slot is cleared and the committed entry is returned so
    /// the caller can re-merge or patch its in-memory records. On a store
    /// failure nothing has been written; the proposal stays pending so the
    /// caller can retry or decline.
    ///
    /// # Errors
    ///
    /// Returns [`ProposalError::NonePending`] when the slot is empty, or
    /// [`ProposalError::Store`] when the upsert fails.
    pub fn confirm(&mut self) -> Result<OverrideEntry, ProposalError> {
        let proposal = self.pending.as_ref().ok_or(ProposalError::NonePending)?;
        let entry = OverrideEntry {
            dispatch_id: proposal.dispatch_id.clone(),
            warehouse_status: proposal.proposed_status.clone(),
            last_modified: proposal.timestamp.clone(),
        };
        self.store.set(&entry)?;
        self.audit.record(&audit_event(OverrideAuditOutcome::Committed, proposal));
        self.pending = None;
        Ok(entry)
    }

    /// Declines the pending proposal.
    ///
    /// A decline is a no-op rollback: neither the store nor any in-memory
    /// record is touched, and no timestamp is updated. The dropped proposal
    /// is returned so the caller can restore widget state.
    ///
    /// # Errors
    ///
    /// Returns [`ProposalError::NonePending`] when the slot is empty.
    pub fn decline(&mut self) -> Result<StatusChangeProposal, ProposalError> {
        let proposal = self.pending.take().ok_or(ProposalError::NonePending)?;
        self.audit.record(&audit_event(OverrideAuditOutcome::Declined, &proposal));
        Ok(proposal)
    }

    /// Returns a reference to the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// Builds an audit event for a proposal at the given lifecycle stage.
fn audit_event(
    outcome: OverrideAuditOutcome,
    proposal: &StatusChangeProposal,
) -> OverrideAuditEvent {
    OverrideAuditEvent {
        outcome,
        dispatch_id: proposal.dispatch_id.clone(),
        previous_status: proposal.previous_status.clone(),
        proposed_status: proposal.proposed_status.clone(),
        timestamp: proposal.timestamp.clone(),
    }
}
