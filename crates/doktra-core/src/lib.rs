//! doktra-core
//!
//! Pure domain types, storage key conventions, and patient identifier
//! generation. No I/O: this is the shared vocabulary of the Doktra
//! system.

pub mod error;
pub mod ident;
pub mod keys;
pub mod models;
