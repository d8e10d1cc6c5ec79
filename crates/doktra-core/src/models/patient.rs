use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::ident;

/// A registered patient profile.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    /// Generated identifier, also the login credential.
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub id_number: String,
    pub registered_at: jiff::Timestamp,
}

/// User-entered registration details, validated before a [`Patient`]
/// is created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub id_number: String,
}

impl NewPatient {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().chars().count() < 2 {
            return Err(CoreError::NameTooShort);
        }
        if !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::PhoneNotNumeric);
        }
        if self.phone.len() < 10 {
            return Err(CoreError::PhoneTooShort);
        }
        if !is_plausible_email(&self.email) {
            return Err(CoreError::InvalidEmail(self.email.clone()));
        }
        if self.id_number.trim().is_empty() {
            return Err(CoreError::MissingIdNumber);
        }
        Ok(())
    }

    /// Validate and promote to a full [`Patient`] with a freshly
    /// generated identifier.
    pub fn into_patient(self) -> Result<Patient, CoreError> {
        self.validate()?;
        let id = ident::generate_patient_id(&self.name, &self.phone);
        Ok(Patient {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            id_number: self.id_number,
            registered_at: jiff::Timestamp::now(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
