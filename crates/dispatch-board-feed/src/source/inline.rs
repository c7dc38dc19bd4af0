// crates/dispatch-board-feed/src/source/inline.rs
// ============================================================================
// Module: Dispatch Board Inline Source
// Description: Preloaded row source for tests and demos.
// Purpose: Hand the core a fixed row set without touching I/O.
// Dependencies: dispatch-board-core
// ============================================================================

//! ## Overview
//! `InlineSource` returns rows it was constructed with. It also accepts raw
//! CSV bytes, which exercises the real decoder without a network or
//! filesystem dependency.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dispatch_board_core::RawRow;

use crate::decode::decode_csv;
use crate::source::RowSource;
use crate::source::SourceError;

// ============================================================================
// SECTION: Inline Source
// ============================================================================

/// Preloaded row source.
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    /// Rows returned on every fetch.
    rows: Vec<RawRow>,
}

impl InlineSource {
    /// Creates a source over preloaded rows.
    #[must_use]
    pub const fn new(rows: Vec<RawRow>) -> Self {
        Self {
            rows,
        }
    }

    /// Creates a source by decoding CSV bytes up front.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Decode`] when the bytes are not valid CSV.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, SourceError> {
        Ok(Self {
            rows: decode_csv(bytes)?,
        })
    }
}

impl RowSource for InlineSource {
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        Ok(self.rows.clone())
    }
}
