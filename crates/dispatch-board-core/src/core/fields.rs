// crates/dispatch-board-core/src/core/fields.rs
// ============================================================================
// Module: Dispatch Board Field Resolution
// Description: Alias-group resolution for drifting spreadsheet headers.
// Purpose: Map inconsistent column names onto logical fields.
// Dependencies: crate::core::record
// ============================================================================

//! ## Overview
//! Source sheets do not agree on header casing or wording, so each logical
//! field carries an ordered list of candidate headers. Resolution walks the
//! list and takes the first value that is non-empty after trimming. Lookup
//! is case-sensitive on purpose: the alias lists enumerate the casing
//! variants actually seen in the wild instead of folding keys, which keeps
//! resolution a pure lookup with no surprises for unusual headers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::record::RawRow;

// ============================================================================
// SECTION: Alias Groups
// ============================================================================

/// Headers carrying the order identifier.
pub const ORDER_ID: &[&str] = &["PEDIDO #", "PEDIDO", "Pedido", "pedido", "id", "ID"];

/// Headers carrying the customer name.
pub const CUSTOMER: &[&str] = &["NOMBRE", "Nombre", "cliente", "Cliente", "CLIENTE"];

/// Headers carrying the record date.
pub const DATE: &[&str] = &["FECHA", "Fecha", "fecha"];

/// Headers carrying the order status.
pub const ORDER_STATUS: &[&str] = &["ESTADO", "Estado", "estado"];

/// Headers naming the approving user.
///
/// First tier of the responsible-party fallback: only when this whole group
/// resolves empty does resolution move on to [`CARRIER_OWNER`].
pub const APPROVAL_USER: &[&str] = &["USUARIO APRUEBA", "Usuario Aprueba", "APROBADO", "aprobado"];

/// Headers naming the carrier or responsible party.
///
/// Second tier of the responsible-party fallback.
pub const CARRIER_OWNER: &[&str] = &["CHOFER", "Chofer", "RESPONSABLE", "Responsable"];

/// Headers carrying the package quantity.
pub const QUANTITY: &[&str] = &["CANTIDAD", "Cantidad", "cantidad"];

/// Headers carrying the latitude.
pub const LATITUDE: &[&str] = &["LATITUD", "Latitud", "latitud"];

/// Headers carrying the longitude.
pub const LONGITUDE: &[&str] = &["LONGITUD", "Longitud", "longitud"];

/// Headers carrying the dispatch code.
pub const DISPATCH_ID: &[&str] = &["COD.", "COD", "Cod.", "Cod", "cod"];

/// Headers carrying the order reference on dispatch rows.
pub const DISPATCH_ORDER_ID: &[&str] = &["PEDIDO #", "PEDIDO", "Pedido", "pedido"];

/// Headers naming the dispatch carrier.
pub const DISPATCH_CARRIER: &[&str] = &["CHOFER", "Chofer", "TRANSPORTISTA", "Transportista"];

/// Headers carrying the warehouse status.
///
/// Some sheets only carry the shared `ESTADO` header; the dedicated
/// warehouse variants are listed first so they win whenever present.
pub const WAREHOUSE_STATUS: &[&str] =
    &["ESTATUS ALMACEN", "Estatus Almacen", "Estatus Almacén", "ESTADO", "estado"];

/// Headers carrying the approval/modification date on dispatch rows.
pub const APPROVAL_DATE: &[&str] =
    &["FECHA APROBACION", "Fecha Aprobacion", "Fecha Aprobación", "FECHA APROB"];

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves a logical field from a raw row.
///
/// Tries each alias in order and returns the first value that is non-empty
/// after trimming, trimmed. Falls back to `default` when no alias matches.
/// Pure: no case-folding, no side effects.
#[must_use]
pub fn resolve(row: &RawRow, aliases: &[&str], default: &str) -> String {
    for alias in aliases {
        if let Some(value) = row.get(alias) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    default.to_string()
}

/// Resolves the responsible party for an order.
///
/// Two-tier fallback across alias groups: the approval-user group is tried
/// first; the carrier group is consulted only when the entire first group
/// resolves empty. An empty-after-trim approval value counts as absent.
#[must_use]
pub fn resolve_owner(row: &RawRow) -> String {
    let approver = resolve(row, APPROVAL_USER, "");
    if approver.is_empty() {
        return resolve(row, CARRIER_OWNER, "");
    }
    approver
}
