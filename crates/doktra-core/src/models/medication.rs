use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A medication the patient is taking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    /// Free-form, e.g. "Twice daily with meals".
    pub frequency: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
    pub reminders: bool,
    pub quantity: Option<String>,
    pub refills: Option<String>,
    pub prescribed_by: Option<String>,
    pub created_at: jiff::Timestamp,
}

/// Medications likely due within the next day, capped at `limit`.
///
/// Frequency strings are free-form; anything mentioning "daily" or
/// "twice" counts. This backs the dashboard's reminder card, not a
/// dosing schedule.
pub fn due_soon(medications: &[Medication], limit: usize) -> Vec<&Medication> {
    medications
        .iter()
        .filter(|m| {
            let f = m.frequency.to_lowercase();
            f.contains("daily") || f.contains("twice")
        })
        .take(limit)
        .collect()
}
