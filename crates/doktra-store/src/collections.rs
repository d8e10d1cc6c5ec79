//! Typed per-patient collections.
//!
//! Each collection is one JSON array document under the patient's
//! prefix. A collection that has never been written reads as empty.

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use doktra_core::keys;
use doktra_core::models::{
    Appointment, EmergencyContact, MedicalRecord, Medication, UploadedDocument, WellnessReport,
};

use crate::error::StoreError;
use crate::objects::DocumentStore;
use crate::state;

fn load_list<T: DeserializeOwned>(store: &DocumentStore, key: &str) -> Result<Vec<T>, StoreError> {
    match state::load_state(store, key) {
        Ok(list) => Ok(list),
        Err(StoreError::NotFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

fn save_list<T: Serialize>(
    store: &DocumentStore,
    key: &str,
    list: &[T],
) -> Result<(), StoreError> {
    state::save_state(store, key, &list)
}

pub fn load_appointments(
    store: &DocumentStore,
    patient_id: &str,
) -> Result<Vec<Appointment>, StoreError> {
    load_list(store, &keys::appointments(patient_id))
}

pub fn save_appointments(
    store: &DocumentStore,
    patient_id: &str,
    appointments: &[Appointment],
) -> Result<(), StoreError> {
    save_list(store, &keys::appointments(patient_id), appointments)
}

pub fn add_appointment(
    store: &DocumentStore,
    patient_id: &str,
    appointment: Appointment,
) -> Result<(), StoreError> {
    let mut appointments = load_appointments(store, patient_id)?;
    appointments.push(appointment);
    save_appointments(store, patient_id, &appointments)
}

pub fn load_medications(
    store: &DocumentStore,
    patient_id: &str,
) -> Result<Vec<Medication>, StoreError> {
    load_list(store, &keys::medications(patient_id))
}

pub fn save_medications(
    store: &DocumentStore,
    patient_id: &str,
    medications: &[Medication],
) -> Result<(), StoreError> {
    save_list(store, &keys::medications(patient_id), medications)
}

pub fn add_medication(
    store: &DocumentStore,
    patient_id: &str,
    medication: Medication,
) -> Result<(), StoreError> {
    let mut medications = load_medications(store, patient_id)?;
    medications.push(medication);
    save_medications(store, patient_id, &medications)
}

pub fn load_medical_records(
    store: &DocumentStore,
    patient_id: &str,
) -> Result<Vec<MedicalRecord>, StoreError> {
    load_list(store, &keys::medical_records(patient_id))
}

pub fn save_medical_records(
    store: &DocumentStore,
    patient_id: &str,
    records: &[MedicalRecord],
) -> Result<(), StoreError> {
    save_list(store, &keys::medical_records(patient_id), records)
}

pub fn add_medical_record(
    store: &DocumentStore,
    patient_id: &str,
    record: MedicalRecord,
) -> Result<(), StoreError> {
    let mut records = load_medical_records(store, patient_id)?;
    records.push(record);
    save_medical_records(store, patient_id, &records)
}

pub fn load_uploads(
    store: &DocumentStore,
    patient_id: &str,
) -> Result<Vec<UploadedDocument>, StoreError> {
    load_list(store, &keys::uploads(patient_id))
}

pub fn save_uploads(
    store: &DocumentStore,
    patient_id: &str,
    uploads: &[UploadedDocument],
) -> Result<(), StoreError> {
    save_list(store, &keys::uploads(patient_id), uploads)
}

pub fn add_upload(
    store: &DocumentStore,
    patient_id: &str,
    upload: UploadedDocument,
) -> Result<(), StoreError> {
    let mut uploads = load_uploads(store, patient_id)?;
    uploads.push(upload);
    save_uploads(store, patient_id, &uploads)
}

pub fn load_emergency_contacts(
    store: &DocumentStore,
    patient_id: &str,
) -> Result<Vec<EmergencyContact>, StoreError> {
    load_list(store, &keys::emergency_contacts(patient_id))
}

pub fn save_emergency_contacts(
    store: &DocumentStore,
    patient_id: &str,
    contacts: &[EmergencyContact],
) -> Result<(), StoreError> {
    save_list(store, &keys::emergency_contacts(patient_id), contacts)
}

pub fn add_emergency_contact(
    store: &DocumentStore,
    patient_id: &str,
    contact: EmergencyContact,
) -> Result<(), StoreError> {
    let mut contacts = load_emergency_contacts(store, patient_id)?;
    contacts.push(contact);
    save_emergency_contacts(store, patient_id, &contacts)
}

/// Remove one contact by id. Returns whether anything was removed.
pub fn remove_emergency_contact(
    store: &DocumentStore,
    patient_id: &str,
    contact_id: Uuid,
) -> Result<bool, StoreError> {
    let mut contacts = load_emergency_contacts(store, patient_id)?;
    let before = contacts.len();
    contacts.retain(|c| c.id != contact_id);
    if contacts.len() == before {
        return Ok(false);
    }
    save_emergency_contacts(store, patient_id, &contacts)?;
    Ok(true)
}

/// The patient's latest assessment result, if they have completed one.
pub fn load_wellness(
    store: &DocumentStore,
    patient_id: &str,
) -> Result<Option<WellnessReport>, StoreError> {
    match state::load_state(store, &keys::wellness(patient_id)) {
        Ok(report) => Ok(Some(report)),
        Err(StoreError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn save_wellness(
    store: &DocumentStore,
    patient_id: &str,
    report: &WellnessReport,
) -> Result<(), StoreError> {
    state::save_state(store, &keys::wellness(patient_id), report)
}
