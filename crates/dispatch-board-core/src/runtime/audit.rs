// crates/dispatch-board-core/src/runtime/audit.rs
// ============================================================================
// Module: Dispatch Board Override Audit Log
// Description: JSON-lines audit records for override lifecycle events.
// Purpose: Record proposals, commits, and declines for offline review.
// Dependencies: serde, serde_json, std
// ============================================================================

//! ## Overview
//! Every override proposal, commit, and decline can be recorded as a JSON
//! line through an audit sink. Sinks never fail the caller: serialization
//! or write errors drop the record silently, because auditability must not
//! block the override protocol.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// Override lifecycle stage recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideAuditOutcome {
    /// A status change was proposed and is pending confirmation.
    Proposed,
    /// A pending change was confirmed and committed to the store.
    Committed,
    /// A pending change was declined; nothing was written.
    Declined,
}

/// Audit record for one override lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideAuditEvent {
    /// Lifecycle stage.
    pub outcome: OverrideAuditOutcome,
    /// Dispatch identifier the change targets.
    pub dispatch_id: String,
    /// Warehouse status before the change.
    pub previous_status: String,
    /// Proposed warehouse status.
    pub proposed_status: String,
    /// Free-form timestamp supplied with the proposal.
    pub timestamp: String,
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for override lifecycle events.
pub trait OverrideAuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &OverrideAuditEvent);
}

/// No-op audit sink.
pub struct NoopOverrideAuditSink;

impl OverrideAuditSink for NoopOverrideAuditSink {
    fn record(&self, _event: &OverrideAuditEvent) {}
}

/// Audit sink that logs JSON lines to a file.
pub struct FileOverrideAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileOverrideAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl OverrideAuditSink for FileOverrideAuditSink {
    fn record(&self, event: &OverrideAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Audit sink that logs JSON lines to an arbitrary writer.
pub struct WriterOverrideAuditSink<W: Write + Send> {
    /// Output writer for audit records.
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterOverrideAuditSink<W> {
    /// Creates a sink over the provided writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> OverrideAuditSink for WriterOverrideAuditSink<W> {
    fn record(&self, event: &OverrideAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut writer) = self.writer.lock()
        {
            let _ = writeln!(writer, "{payload}");
        }
    }
}
