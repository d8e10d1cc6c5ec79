//! The signed-in patient pointer.
//!
//! Stored as a document like everything else; callers pass the store
//! handle explicitly, so there is no process-global session state.

use serde::{Deserialize, Serialize};
use tracing::info;

use doktra_core::keys;

use crate::error::StoreError;
use crate::objects::{self, DocumentStore};
use crate::state;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CurrentPatient {
    patient_id: String,
    signed_in_at: jiff::Timestamp,
}

/// Record `patient_id` as the signed-in patient.
pub fn set_current_patient(store: &DocumentStore, patient_id: &str) -> Result<(), StoreError> {
    state::save_state(
        store,
        keys::CURRENT_PATIENT,
        &CurrentPatient {
            patient_id: patient_id.to_string(),
            signed_in_at: jiff::Timestamp::now(),
        },
    )?;
    info!(patient_id, "patient signed in");
    Ok(())
}

/// The signed-in patient's identifier, if any.
pub fn current_patient(store: &DocumentStore) -> Result<Option<String>, StoreError> {
    match state::load_state::<CurrentPatient>(store, keys::CURRENT_PATIENT) {
        Ok(current) => Ok(Some(current.patient_id)),
        Err(StoreError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Clear the signed-in patient, if any.
pub fn clear_current_patient(store: &DocumentStore) -> Result<(), StoreError> {
    objects::delete_object(store, keys::CURRENT_PATIENT)?;
    info!("patient signed out");
    Ok(())
}
