//! Patient registration and login.
//!
//! There is no account server: a profile document plus its generated
//! identifier is the whole account, and presenting the identifier is
//! the whole login.

use tracing::info;

use doktra_core::keys;
use doktra_core::models::{NewPatient, Patient};

use crate::error::StoreError;
use crate::objects::{self, DocumentStore};
use crate::session;
use crate::state;

/// Register a new patient: validate the form, generate the identifier,
/// persist the profile, and sign them in.
pub fn register(store: &DocumentStore, form: NewPatient) -> Result<Patient, StoreError> {
    let patient = form.into_patient()?;
    state::save_state(store, &keys::patient(&patient.id), &patient)?;
    session::set_current_patient(store, &patient.id)?;
    info!(patient_id = %patient.id, "patient registered");
    Ok(patient)
}

/// Load a profile by identifier.
pub fn load_patient(store: &DocumentStore, id: &str) -> Result<Patient, StoreError> {
    state::load_state(store, &keys::patient(id))
}

/// Scan all stored profiles for one matching `id`.
///
/// Tolerant of other documents under the patients prefix: anything that
/// does not deserialize as a profile is skipped.
pub fn find_patient(store: &DocumentStore, id: &str) -> Result<Option<Patient>, StoreError> {
    for key in objects::list_objects(store, keys::PATIENTS_PREFIX)? {
        let body = match objects::get_object(store, &key) {
            Ok(body) => body,
            Err(StoreError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        };
        if let Ok(patient) = serde_json::from_slice::<Patient>(&body)
            && patient.id == id
        {
            return Ok(Some(patient));
        }
    }
    Ok(None)
}

/// Sign in with an identifier. Fails with `UnknownPatient` when no
/// stored profile matches.
pub fn sign_in(store: &DocumentStore, id: &str) -> Result<Patient, StoreError> {
    let Some(patient) = find_patient(store, id)? else {
        return Err(StoreError::UnknownPatient { id: id.to_string() });
    };
    session::set_current_patient(store, &patient.id)?;
    Ok(patient)
}

/// Sign out the current patient.
pub fn sign_out(store: &DocumentStore) -> Result<(), StoreError> {
    session::clear_current_patient(store)
}

/// Delete a patient's profile and every document stored under it.
pub fn delete_patient(store: &DocumentStore, id: &str) -> Result<(), StoreError> {
    objects::delete_object(store, &keys::patient(id))?;
    objects::delete_objects_by_prefix(store, &keys::patient_prefix(id))?;
    if session::current_patient(store)?.as_deref() == Some(id) {
        session::clear_current_patient(store)?;
    }
    Ok(())
}
