// crates/dispatch-board-feed/src/source/mod.rs
// ============================================================================
// Module: Dispatch Board Feed Sources
// Description: Source trait and reference implementations for row ingestion.
// Purpose: Resolve a configured feed into a full parsed row set.
// Dependencies: dispatch-board-core, thiserror
// ============================================================================

//! ## Overview
//! A row source performs exactly one fetch per data load and returns the
//! complete row set; the core never sees partial or streamed input.
//! Implementations fail closed on invalid targets, fetch errors, and
//! oversized feeds. All source inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dispatch_board_core::RawRow;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum feed size accepted by row sources.
pub const MAX_FEED_BYTES: usize = 8 * 1024 * 1024;

// ============================================================================
// SECTION: Source Errors
// ============================================================================

/// Errors emitted by row sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Unsupported or missing URI scheme.
    #[error("unsupported uri scheme: {0}")]
    UnsupportedScheme(String),
    /// Target failed to parse or resolve.
    #[error("invalid feed target: {0}")]
    InvalidTarget(String),
    /// Resource was not found.
    #[error("feed not found: {0}")]
    NotFound(String),
    /// Source reported an I/O failure.
    #[error("io failure: {0}")]
    Io(String),
    /// HTTP source failed.
    #[error("http failure: {0}")]
    Http(String),
    /// Feed bytes failed to decode as CSV.
    #[error("csv decode failure: {0}")]
    Decode(String),
    /// Feed exceeded the configured byte limit.
    #[error("feed exceeds size limit: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual feed size in bytes.
        actual_bytes: usize,
    },
}

/// Returns an error when a feed exceeds the configured size cap.
pub(crate) fn enforce_max_bytes(actual_bytes: usize) -> Result<(), SourceError> {
    if actual_bytes > MAX_FEED_BYTES {
        return Err(SourceError::TooLarge {
            max_bytes: MAX_FEED_BYTES,
            actual_bytes,
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Source Trait
// ============================================================================

/// Resolves a configured feed into a full parsed row set.
pub trait RowSource: Send + Sync {
    /// Fetches and decodes the complete row set for one data load.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the feed cannot be resolved or decoded.
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError>;
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod file;
pub mod http;
pub mod inline;

pub use file::FileSource;
pub use http::HttpSource;
pub use http::HttpSourceConfig;
pub use inline::InlineSource;
