// crates/dispatch-board-feed/src/lib.rs
// ============================================================================
// Module: Dispatch Board Feed Library
// Description: Feed ingestion collaborators for the Dispatch Board core.
// Purpose: Fetch and decode tabular feeds into raw rows.
// Dependencies: csv, dispatch-board-core, reqwest, url
// ============================================================================

//! ## Overview
//! The core treats feed fetching and parsing as external collaborators: a
//! row source performs one blocking fetch per data load and hands the core
//! the full parsed row set, never a stream. This crate provides the CSV
//! decoder (header-preserving, no type inference) and three sources:
//! inline rows for tests, root-confined local files, and HTTP for published
//! sheets.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod decode;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decode::decode_csv;
pub use source::FileSource;
pub use source::HttpSource;
pub use source::HttpSourceConfig;
pub use source::InlineSource;
pub use source::MAX_FEED_BYTES;
pub use source::RowSource;
pub use source::SourceError;
