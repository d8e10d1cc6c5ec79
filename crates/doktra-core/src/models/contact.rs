use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Someone to call in an emergency.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub name: String,
    pub relation: String,
    pub phone: String,
}
