// crates/dispatch-board-feed/src/source/file.rs
// ============================================================================
// Module: Dispatch Board File Source
// Description: File-backed row source for local feed exports.
// Purpose: Read and decode a CSV feed from the local filesystem.
// Dependencies: dispatch-board-core, std
// ============================================================================

//! ## Overview
//! `FileSource` reads a CSV feed from a local path. A root directory can be
//! configured to fail closed on path traversal: the feed path must resolve
//! inside the root after canonicalization. File paths are untrusted input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;
use std::path::PathBuf;

use dispatch_board_core::RawRow;

use crate::decode::decode_csv;
use crate::source::RowSource;
use crate::source::SourceError;
use crate::source::enforce_max_bytes;

// ============================================================================
// SECTION: File Source
// ============================================================================

/// File-backed row source.
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Path to the CSV feed.
    path: PathBuf,
    /// Optional root directory for path traversal protection.
    root: Option<PathBuf>,
}

impl FileSource {
    /// Creates a file source with no root restrictions.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: None,
        }
    }

    /// Creates a file source that must resolve inside the provided root.
    #[must_use]
    pub fn rooted(root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: Some(root.into()),
        }
    }

    /// Resolves and validates the feed path.
    fn resolve_path(&self) -> Result<PathBuf, SourceError> {
        let resolved = std::fs::canonicalize(&self.path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SourceError::NotFound(err.to_string())
            } else {
                SourceError::Io(err.to_string())
            }
        })?;
        if let Some(root) = &self.root {
            let root =
                std::fs::canonicalize(root).map_err(|err| SourceError::Io(err.to_string()))?;
            if !resolved.starts_with(&root) {
                return Err(SourceError::InvalidTarget(
                    "feed path escapes the configured root".to_string(),
                ));
            }
        }
        Ok(resolved)
    }
}

impl RowSource for FileSource {
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let path = self.resolve_path()?;
        let metadata = std::fs::metadata(&path).map_err(|err| SourceError::Io(err.to_string()))?;
        let length = usize::try_from(metadata.len())
            .map_err(|_| SourceError::Io("feed length exceeds addressable size".to_string()))?;
        enforce_max_bytes(length)?;
        let bytes = std::fs::read(&path).map_err(|err| SourceError::Io(err.to_string()))?;
        enforce_max_bytes(bytes.len())?;
        decode_csv(&bytes)
    }
}
