// crates/dispatch-board-feed/src/decode.rs
// ============================================================================
// Module: Dispatch Board CSV Decoder
// Description: CSV bytes into raw feed rows.
// Purpose: Preserve verbatim headers and string values for normalization.
// Dependencies: csv, dispatch-board-core
// ============================================================================

//! ## Overview
//! The decoder performs no type inference and no header normalization:
//! header strings are preserved verbatim (casing included) and every value
//! arrives as a string, exactly as the core's field resolution expects.
//! Ragged rows are tolerated; trailing fields a row does not carry are
//! simply absent keys. Rows whose every field is empty are skipped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dispatch_board_core::RawRow;

use crate::source::SourceError;

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Decodes CSV bytes into raw rows keyed by verbatim header strings.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when the byte stream is not valid CSV or
/// the header row cannot be read.
pub fn decode_csv(bytes: &[u8]) -> Result<Vec<RawRow>, SourceError> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|err| SourceError::Decode(err.to_string()))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<String>>();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| SourceError::Decode(err.to_string()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
