//! Store error types for `biolab-store`.

use thiserror::Error;

/// Errors produced by store operations.
///
/// The original collapse of every failure into an empty row set or a
/// `false` flag left callers unable to tell "no match" from "broken
/// query"; typed variants keep the no-panic contract while preserving
/// the distinction.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness or other constraint violation (duplicate username).
    #[error("constraint violation: duplicate or conflicting row")]
    Duplicate,

    /// SQLite execution error.
    #[error("database error: {0}")]
    Database(String),

    /// Expiry string rejected before reaching the database.
    #[error("invalid expiry date (expected YYYY-MM-DD): {0:?}")]
    InvalidExpiry(String),

    /// No record with the given id.
    #[error("record not found: id {0}")]
    RecordNotFound(i64),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        // SQLITE_CONSTRAINT covers the UNIQUE username column; everything
        // else is a plain execution failure.
        if let rusqlite::Error::SqliteFailure(ref ffi_err, _) = err {
            if ffi_err.code == rusqlite::ffi::ErrorCode::ConstraintViolation {
                return Self::Duplicate;
            }
        }
        Self::Database(err.to_string())
    }
}

/// Reject an expiry string before it reaches the database.
///
/// Free-text columns are stored verbatim, but `expiry` must be a real
/// `YYYY-MM-DD` date — invalid strings never hit a statement.
pub(crate) fn validate_expiry(expiry: &str) -> Result<(), StoreError> {
    if biolab_core::is_valid_date(expiry) {
        Ok(())
    } else {
        Err(StoreError::InvalidExpiry(expiry.to_owned()))
    }
}
