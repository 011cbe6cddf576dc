//! `biolab-store` — persistence and query layer for the BioLab
//! inventory.
//!
//! Owns the on-disk SQLite database: idempotent schema creation,
//! parameterized read/write primitives, credential validation, and typed
//! CRUD plus filtered search for chemical and biological records. A
//! presentation layer calls into this crate and renders whatever it
//! returns; expiry classification from [`biolab_core`] is attached per
//! row on the way out.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod auth;
pub mod biological;
pub mod chemical;
pub mod db;
pub mod error;

pub use auth::{login, register};
pub use biological::{
    delete_biological, get_biological, insert_biological, list_biologicals, search_biologicals,
    update_biological, BiologicalFields, BiologicalFilter, BiologicalRecord,
};
pub use chemical::{
    delete_chemical, get_chemical, insert_chemical, list_chemicals, search_chemicals,
    update_chemical, ChemicalFields, ChemicalFilter, ChemicalRecord,
};
pub use db::Store;
pub use error::StoreError;
