//! doktra-screening
//!
//! Deterministic screening computations. Pure data, no storage
//! dependency. Defines the symptom-checker rule tables, the ten-question
//! wellness assessment, and the scoring for each.

pub mod assessment;
pub mod error;
pub mod symptoms;
pub mod triage;
pub mod wizard;
