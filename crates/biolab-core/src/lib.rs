//! `biolab-core` — Pure inventory logic for BioLab.
//!
//! Zero I/O: password digests, ISO date validation, expiry
//! classification, and the dynamic LIKE-filter builder. Everything that
//! touches SQLite lives in `biolab-store`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod dates;
pub mod digest;
pub mod filter;

pub use dates::{is_expired, is_valid_date, today};
pub use digest::hash_password;
pub use filter::{build_filter, LikeFilter};
