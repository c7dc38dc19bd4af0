// crates/dispatch-board-core/src/lib.rs
// ============================================================================
// Module: Dispatch Board Core Library
// Description: Public API surface for the Dispatch Board core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Dispatch Board core normalizes a loosely-structured tabular feed into
//! canonical order and dispatch records, clusters geocoded orders into zone
//! summaries, filters both record sets, and merges a locally persisted
//! override layer onto dispatches. It owns no I/O: feed fetching, parsing,
//! and rendering are external collaborators wired through explicit
//! interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::OverrideStore;
pub use interfaces::StoreError;
pub use runtime::FileOverrideAuditSink;
pub use runtime::InMemoryOverrideStore;
pub use runtime::NoopOverrideAuditSink;
pub use runtime::OverrideAuditEvent;
pub use runtime::OverrideAuditOutcome;
pub use runtime::OverrideAuditSink;
pub use runtime::OverrideCoordinator;
pub use runtime::ProposalError;
pub use runtime::StatusChangeProposal;
pub use runtime::WriterOverrideAuditSink;
pub use runtime::apply_all;
pub use runtime::apply_one;
