//! Credential service: registration and login validation.
//!
//! Passwords are stored as unsalted SHA-256 hex digests (see
//! [`biolab_core::digest`]). A credential is either absent or
//! registered; there is no update or delete path. Every attempt is
//! logged with the username only — never the password or its digest.

use biolab_core::hash_password;
use rusqlite::params;
use tracing::{info, warn};

use crate::db::Store;
use crate::error::StoreError;

/// Validate a username/password pair against the stored credentials.
///
/// Empty username or password is rejected immediately, without a query.
/// Otherwise the password is hashed and a row must match both the
/// username and the digest exactly. A store-layer failure degrades to
/// `false` (the store already logged the cause).
#[must_use]
pub fn login(store: &Store, username: &str, password: &str) -> bool {
    if username.is_empty() || password.is_empty() {
        return false;
    }

    let digest = hash_password(password);
    let matched = store.query(
        "SELECT id FROM users WHERE username = ?1 AND password = ?2",
        params![username, digest],
        |row| row.get::<_, i64>(0),
    );

    if matches!(matched, Ok(ref rows) if !rows.is_empty()) {
        info!("AUDIT: successful login for user '{username}'");
        true
    } else {
        warn!("SECURITY: failed login attempt for '{username}'");
        false
    }
}

/// Create a new credential with a hashed password.
///
/// Empty fields are rejected without a store call. A duplicate username
/// returns `false` and leaves the existing credential untouched, as does
/// any other execution failure.
#[must_use]
pub fn register(store: &Store, username: &str, password: &str) -> bool {
    if username.is_empty() || password.is_empty() {
        return false;
    }

    let digest = hash_password(password);
    match store.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, digest],
    ) {
        Ok(_) => {
            info!("AUDIT: registered new user '{username}'");
            true
        }
        Err(StoreError::Duplicate) => {
            warn!("registration rejected: username '{username}' already exists");
            false
        }
        Err(_) => false,
    }
}
