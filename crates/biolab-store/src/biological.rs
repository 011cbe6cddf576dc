//! Biological sample CRUD and filtered search.
//!
//! Mirrors the chemical module over the `biological` table: insert,
//! full-row update, delete by id, and the four-field AND search. The
//! table has no uniqueness constraint and no relation to `chemicals`.

use biolab_core::{build_filter, dates};
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Row};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::Store;
use crate::error::{validate_expiry, StoreError};

/// SELECT list in [`BiologicalRecord`] field order.
const COLUMNS: &str =
    "id, name, sample_type, organism, medium, container, quantity, biosafety_level, expiry";

/// A persisted biological sample row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiologicalRecord {
    /// Rowid assigned at insertion; never reused or mutated.
    pub id: i64,
    pub name: String,
    /// Sample type (e.g., "Culture", "Tissue").
    pub sample_type: String,
    pub organism: String,
    /// Growth or storage medium.
    pub medium: String,
    pub container: String,
    pub quantity: String,
    /// Biosafety containment level (BSL) classification.
    pub biosafety_level: String,
    /// ISO `YYYY-MM-DD` expiry date.
    pub expiry: String,
}

impl BiologicalRecord {
    /// Advisory expiry classification relative to `reference`; fail-open
    /// on malformed dates.
    #[must_use]
    pub fn is_expired(&self, reference: NaiveDate) -> bool {
        dates::is_expired(&self.expiry, reference)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            sample_type: row.get(2)?,
            organism: row.get(3)?,
            medium: row.get(4)?,
            container: row.get(5)?,
            quantity: row.get(6)?,
            biosafety_level: row.get(7)?,
            expiry: row.get(8)?,
        })
    }
}

/// Field values for inserting or fully updating a biological row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiologicalFields {
    pub name: String,
    pub sample_type: String,
    pub organism: String,
    pub medium: String,
    pub container: String,
    pub quantity: String,
    pub biosafety_level: String,
    pub expiry: String,
}

/// Per-column search strings; empty fields match anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiologicalFilter {
    pub name: String,
    pub sample_type: String,
    pub biosafety_level: String,
    /// Substring match against the expiry text, typically a year.
    pub expiry: String,
}

/// Insert a new biological record, returning its assigned id.
///
/// # Errors
///
/// - [`StoreError::InvalidExpiry`] if the expiry string is rejected.
/// - [`StoreError::Database`] if the INSERT fails.
pub fn insert_biological(store: &Store, fields: &BiologicalFields) -> Result<i64, StoreError> {
    validate_expiry(&fields.expiry)?;
    let id = store.insert(
        "INSERT INTO biological (name, sample_type, organism, medium, container, quantity, \
         biosafety_level, expiry) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            fields.name,
            fields.sample_type,
            fields.organism,
            fields.medium,
            fields.container,
            fields.quantity,
            fields.biosafety_level,
            fields.expiry,
        ],
    )?;
    info!("inventory add: biological '{}' created as id {id}", fields.name);
    Ok(id)
}

/// Fetch a single biological record by id.
///
/// # Errors
///
/// - [`StoreError::RecordNotFound`] if no row matches.
/// - [`StoreError::Database`] if the query fails.
pub fn get_biological(store: &Store, id: i64) -> Result<BiologicalRecord, StoreError> {
    let rows = store.query(
        &format!("SELECT {COLUMNS} FROM biological WHERE id = ?1"),
        params![id],
        BiologicalRecord::from_row,
    )?;
    rows.into_iter().next().ok_or(StoreError::RecordNotFound(id))
}

/// Load the entire biological inventory in id order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] if the query fails.
pub fn list_biologicals(store: &Store) -> Result<Vec<BiologicalRecord>, StoreError> {
    store.query(
        &format!("SELECT {COLUMNS} FROM biological ORDER BY id"),
        [],
        BiologicalRecord::from_row,
    )
}

/// Multi-criteria substring search: name AND type AND BSL AND expiry.
///
/// # Errors
///
/// Returns [`StoreError::Database`] if the query fails.
pub fn search_biologicals(
    store: &Store,
    filter: &BiologicalFilter,
) -> Result<Vec<BiologicalRecord>, StoreError> {
    let like = build_filter(&[
        ("name", filter.name.as_str()),
        ("sample_type", filter.sample_type.as_str()),
        ("biosafety_level", filter.biosafety_level.as_str()),
        ("expiry", filter.expiry.as_str()),
    ]);
    let sql = format!(
        "SELECT {COLUMNS} FROM biological WHERE {} ORDER BY id",
        like.clause
    );
    store.query(&sql, params_from_iter(like.params), BiologicalRecord::from_row)
}

/// Replace every field of the record with the given id.
///
/// # Errors
///
/// - [`StoreError::InvalidExpiry`] if the expiry string is rejected.
/// - [`StoreError::RecordNotFound`] if no row has that id.
/// - [`StoreError::Database`] if the UPDATE fails.
pub fn update_biological(
    store: &Store,
    id: i64,
    fields: &BiologicalFields,
) -> Result<(), StoreError> {
    validate_expiry(&fields.expiry)?;
    let affected = store.execute(
        "UPDATE biological SET name = ?1, sample_type = ?2, organism = ?3, medium = ?4, \
         container = ?5, quantity = ?6, biosafety_level = ?7, expiry = ?8 WHERE id = ?9",
        params![
            fields.name,
            fields.sample_type,
            fields.organism,
            fields.medium,
            fields.container,
            fields.quantity,
            fields.biosafety_level,
            fields.expiry,
            id,
        ],
    )?;
    if affected == 0 {
        return Err(StoreError::RecordNotFound(id));
    }
    info!("inventory update: biological id {id} modified");
    Ok(())
}

/// Permanently remove a biological record.
///
/// # Errors
///
/// - [`StoreError::RecordNotFound`] if no row has that id.
/// - [`StoreError::Database`] if the DELETE fails.
pub fn delete_biological(store: &Store, id: i64) -> Result<(), StoreError> {
    let affected = store.execute("DELETE FROM biological WHERE id = ?1", params![id])?;
    if affected == 0 {
        return Err(StoreError::RecordNotFound(id));
    }
    warn!("inventory delete: biological id {id} removed");
    Ok(())
}
