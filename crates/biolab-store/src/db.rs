//! SQLite store: schema creation and the generic read/write primitives.
//!
//! The [`Store`] owns the database path and opens a scoped connection
//! per call — no pooling, no shared handle, no async. The connection is
//! released on every exit path, error paths included. Every statement
//! binds its parameters; user input never lands in SQL text.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Params, Row};
use tracing::{error, info, warn};

use crate::error::StoreError;

/// Idempotent DDL for the three inventory tables.
///
/// `CREATE TABLE IF NOT EXISTS` makes this safe to run on every process
/// start; existing tables and their data are never altered.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE,
        password TEXT)",
    "CREATE TABLE IF NOT EXISTS chemicals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT, synonyms TEXT, class TEXT, formula_info TEXT,
        quantity TEXT, hazard_code TEXT, expiry TEXT)",
    "CREATE TABLE IF NOT EXISTS biological (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT, sample_type TEXT, organism TEXT, medium TEXT,
        container TEXT, quantity TEXT, biosafety_level TEXT, expiry TEXT)",
];

/// Handle to the on-disk inventory database.
///
/// Cheap to clone and pass around; holds only the path. This is the one
/// component allowed to open a connection — callers get rows and counts,
/// never handles.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open (or create) the inventory database at `path` and ensure the
    /// schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] only if the database file cannot
    /// be opened at all. DDL failures on an openable database are logged
    /// and tolerated — the table may already exist under an older
    /// convention, and later operations surface any real fault.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Path of the underlying database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Idempotently create the `users`, `chemicals`, and `biological`
    /// tables.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the database cannot be
    /// opened. Individual DDL failures are logged at `error` and
    /// skipped.
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        for ddl in SCHEMA {
            if let Err(e) = conn.execute_batch(ddl) {
                error!("schema creation failed: {e} | SQL: {ddl}");
            }
        }
        info!("database schema verified at {}", self.path.display());
        Ok(())
    }

    /// Execute a read-only statement with bound positional parameters,
    /// mapping each row through `map_row`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on any execution failure, with
    /// the failing statement logged. An `Ok(vec![])` therefore really
    /// means "no rows matched".
    pub fn query<T, P, F>(&self, sql: &str, params: P, map_row: F) -> Result<Vec<T>, StoreError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.connect()?;
        run_query(&conn, sql, params, map_row).map_err(|e| {
            error!("query failed: {e} | SQL: {sql}");
            StoreError::from(e)
        })
    }

    /// Execute a mutating statement (UPDATE or DELETE), auto-committing
    /// on success.
    ///
    /// Returns the affected-row count so callers can distinguish a
    /// successful no-op from a real mutation.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Duplicate`] on a uniqueness-constraint violation.
    /// - [`StoreError::Database`] on any other failure.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, StoreError> {
        let conn = self.connect()?;
        conn.execute(sql, params).map_err(|e| log_exec_err(e, sql))
    }

    /// Execute an INSERT and return the rowid it assigned.
    ///
    /// The rowid is read from the same scoped connection that ran the
    /// INSERT — connections here live for one call only, so it cannot be
    /// fetched later.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(sql, params).map_err(|e| log_exec_err(e, sql))?;
        Ok(conn.last_insert_rowid())
    }

    /// Open a connection scoped to a single store call.
    fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.path).map_err(|e| {
            error!("cannot open database {}: {e}", self.path.display());
            StoreError::from(e)
        })
    }
}

/// Prepare, bind, and collect a SELECT on an open connection.
fn run_query<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map_row: F,
) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row)?;
    rows.collect()
}

/// Log a write failure with its statement and translate the error.
fn log_exec_err(e: rusqlite::Error, sql: &str) -> StoreError {
    let err = StoreError::from(e);
    if matches!(err, StoreError::Duplicate) {
        warn!("integrity error: duplicate entry or constraint violation | SQL: {sql}");
    } else {
        error!("execute failed: {err} | SQL: {sql}");
    }
    err
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
