//! Storage key conventions.
//!
//! Pure string functions, no filesystem dependency. These define the
//! canonical layout of documents in a Doktra store. Everything belonging
//! to a patient lives under their identifier, so a patient's entire
//! dataset can be listed or deleted by prefix.

pub fn patient(id: &str) -> String {
    format!("patients/{id}.json")
}

pub const PATIENTS_PREFIX: &str = "patients/";

pub fn appointments(id: &str) -> String {
    format!("patients/{id}/appointments.json")
}

pub fn medications(id: &str) -> String {
    format!("patients/{id}/medications.json")
}

pub fn medical_records(id: &str) -> String {
    format!("patients/{id}/medical_records.json")
}

pub fn uploads(id: &str) -> String {
    format!("patients/{id}/uploads.json")
}

pub fn emergency_contacts(id: &str) -> String {
    format!("patients/{id}/emergency_contacts.json")
}

pub fn wellness(id: &str) -> String {
    format!("patients/{id}/wellness.json")
}

/// Per-patient collection documents live under this prefix.
pub fn patient_prefix(id: &str) -> String {
    format!("patients/{id}/")
}

pub const CURRENT_PATIENT: &str = "_session/current-patient.json";
