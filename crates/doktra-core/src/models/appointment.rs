use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A scheduled appointment with a healthcare provider.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_name: String,
    pub specialty: String,
    pub date: Date,
    pub time: Time,
    pub location: String,
    pub reason: String,
    pub appointment_type: String,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl Appointment {
    /// The scheduled start as a civil datetime.
    pub fn start(&self) -> DateTime {
        self.date.to_datetime(self.time)
    }
}

/// The earliest appointment strictly after `now`, if any.
pub fn next_upcoming(appointments: &[Appointment], now: DateTime) -> Option<&Appointment> {
    appointments
        .iter()
        .filter(|a| a.start() > now)
        .min_by_key(|a| a.start())
}
