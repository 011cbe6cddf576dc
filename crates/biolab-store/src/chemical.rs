//! Chemical reagent CRUD and filtered search.
//!
//! Records are created via insert, mutated in place via full-row update
//! keyed by id, and removed via delete keyed by id — no soft-delete, no
//! versioning. The `chemicals` table carries no uniqueness constraint,
//! so two inserts with identical fields produce two distinct rows.

use biolab_core::{build_filter, dates};
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Row};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::Store;
use crate::error::{validate_expiry, StoreError};

/// SELECT list for every chemical read, in [`ChemicalRecord`] field
/// order. Mapping is by this explicit list, never by `SELECT *`, so a
/// schema reorder cannot silently shift columns.
const COLUMNS: &str = "id, name, synonyms, class, formula_info, quantity, hazard_code, expiry";

/// A persisted chemical reagent row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalRecord {
    /// Rowid assigned at insertion; never reused or mutated.
    pub id: i64,
    pub name: String,
    pub synonyms: String,
    /// Chemical class (e.g., "Corrosive").
    pub class: String,
    /// Formula and/or molecular weight, free text.
    pub formula_info: String,
    pub quantity: String,
    /// GHS hazard classification string.
    pub hazard_code: String,
    /// ISO `YYYY-MM-DD` expiry date.
    pub expiry: String,
}

impl ChemicalRecord {
    /// Advisory expiry classification relative to `reference`.
    ///
    /// Fail-open: a malformed expiry never reads as expired. Rendering
    /// hints only — this never affects query results or stored data.
    #[must_use]
    pub fn is_expired(&self, reference: NaiveDate) -> bool {
        dates::is_expired(&self.expiry, reference)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            synonyms: row.get(2)?,
            class: row.get(3)?,
            formula_info: row.get(4)?,
            quantity: row.get(5)?,
            hazard_code: row.get(6)?,
            expiry: row.get(7)?,
        })
    }
}

/// Field values for inserting or fully updating a chemical row.
///
/// Free-text fields are stored verbatim and may be empty; only `expiry`
/// is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalFields {
    pub name: String,
    pub synonyms: String,
    pub class: String,
    pub formula_info: String,
    pub quantity: String,
    pub hazard_code: String,
    pub expiry: String,
}

/// Per-column search strings for the quad-filter; empty fields match
/// anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChemicalFilter {
    pub name: String,
    pub class: String,
    pub hazard_code: String,
    /// Substring match against the expiry text, typically a year.
    pub expiry: String,
}

/// Insert a new chemical record, returning its assigned id.
///
/// # Errors
///
/// - [`StoreError::InvalidExpiry`] if the expiry string is rejected at
///   the edge (nothing reaches the database).
/// - [`StoreError::Database`] if the INSERT fails.
pub fn insert_chemical(store: &Store, fields: &ChemicalFields) -> Result<i64, StoreError> {
    validate_expiry(&fields.expiry)?;
    let id = store.insert(
        "INSERT INTO chemicals (name, synonyms, class, formula_info, quantity, hazard_code, expiry) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            fields.name,
            fields.synonyms,
            fields.class,
            fields.formula_info,
            fields.quantity,
            fields.hazard_code,
            fields.expiry,
        ],
    )?;
    info!("inventory add: chemical '{}' created as id {id}", fields.name);
    Ok(id)
}

/// Fetch a single chemical record by id.
///
/// # Errors
///
/// - [`StoreError::RecordNotFound`] if no row matches.
/// - [`StoreError::Database`] if the query fails.
pub fn get_chemical(store: &Store, id: i64) -> Result<ChemicalRecord, StoreError> {
    let rows = store.query(
        &format!("SELECT {COLUMNS} FROM chemicals WHERE id = ?1"),
        params![id],
        ChemicalRecord::from_row,
    )?;
    rows.into_iter().next().ok_or(StoreError::RecordNotFound(id))
}

/// Load the entire chemical inventory in id order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] if the query fails.
pub fn list_chemicals(store: &Store) -> Result<Vec<ChemicalRecord>, StoreError> {
    store.query(
        &format!("SELECT {COLUMNS} FROM chemicals ORDER BY id"),
        [],
        ChemicalRecord::from_row,
    )
}

/// Multi-criteria substring search: name AND class AND hazard AND
/// expiry.
///
/// Empty filter fields match anything, so an all-empty filter returns
/// every row. Filter values are bound, never spliced into the SQL.
///
/// # Errors
///
/// Returns [`StoreError::Database`] if the query fails.
pub fn search_chemicals(
    store: &Store,
    filter: &ChemicalFilter,
) -> Result<Vec<ChemicalRecord>, StoreError> {
    let like = build_filter(&[
        ("name", filter.name.as_str()),
        ("class", filter.class.as_str()),
        ("hazard_code", filter.hazard_code.as_str()),
        ("expiry", filter.expiry.as_str()),
    ]);
    let sql = format!(
        "SELECT {COLUMNS} FROM chemicals WHERE {} ORDER BY id",
        like.clause
    );
    store.query(&sql, params_from_iter(like.params), ChemicalRecord::from_row)
}

/// Replace every field of the record with the given id.
///
/// # Errors
///
/// - [`StoreError::InvalidExpiry`] if the expiry string is rejected.
/// - [`StoreError::RecordNotFound`] if no row has that id.
/// - [`StoreError::Database`] if the UPDATE fails.
pub fn update_chemical(
    store: &Store,
    id: i64,
    fields: &ChemicalFields,
) -> Result<(), StoreError> {
    validate_expiry(&fields.expiry)?;
    let affected = store.execute(
        "UPDATE chemicals SET name = ?1, synonyms = ?2, class = ?3, formula_info = ?4, \
         quantity = ?5, hazard_code = ?6, expiry = ?7 WHERE id = ?8",
        params![
            fields.name,
            fields.synonyms,
            fields.class,
            fields.formula_info,
            fields.quantity,
            fields.hazard_code,
            fields.expiry,
            id,
        ],
    )?;
    if affected == 0 {
        return Err(StoreError::RecordNotFound(id));
    }
    info!("inventory update: chemical id {id} modified");
    Ok(())
}

/// Permanently remove a chemical record.
///
/// # Errors
///
/// - [`StoreError::RecordNotFound`] if no row has that id.
/// - [`StoreError::Database`] if the DELETE fails.
pub fn delete_chemical(store: &Store, id: i64) -> Result<(), StoreError> {
    let affected = store.execute("DELETE FROM chemicals WHERE id = ?1", params![id])?;
    if affected == 0 {
        return Err(StoreError::RecordNotFound(id));
    }
    warn!("inventory delete: chemical id {id} removed");
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
