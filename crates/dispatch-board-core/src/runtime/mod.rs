// crates/dispatch-board-core/src/runtime/mod.rs
// ============================================================================
// Module: Dispatch Board Runtime
// Description: Override merge, commit protocol, stores, and audit logging.
// Purpose: Apply persisted overrides and coordinate confirmed status changes.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules cover everything that touches state: the in-memory
//! override store, the merge that layers persisted overrides onto canonical
//! dispatches, the propose/confirm/decline protocol, and the audit sinks
//! that record its lifecycle.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod memory;
pub mod overrides;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileOverrideAuditSink;
pub use audit::NoopOverrideAuditSink;
pub use audit::OverrideAuditEvent;
pub use audit::OverrideAuditOutcome;
pub use audit::OverrideAuditSink;
pub use audit::WriterOverrideAuditSink;
pub use memory::InMemoryOverrideStore;
pub use overrides::OverrideCoordinator;
pub use overrides::ProposalError;
pub use overrides::StatusChangeProposal;
pub use overrides::apply_all;
pub use overrides::apply_one;
