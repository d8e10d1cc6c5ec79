use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tri-level classification produced by the health assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WellnessStatus {
    Good,
    Fair,
    Attention,
}

/// The persisted result of a completed health assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessReport {
    pub status: WellnessStatus,
    /// Mean of the ten question scores, rounded to one decimal.
    pub score: f64,
    pub message: String,
}
