pub mod appointment;
pub mod contact;
pub mod medication;
pub mod patient;
pub mod record;
pub mod wellness;

pub use self::appointment::Appointment;
pub use self::contact::EmergencyContact;
pub use self::medication::Medication;
pub use self::patient::{NewPatient, Patient};
pub use self::record::{MedicalRecord, UploadedDocument};
pub use self::wellness::{WellnessReport, WellnessStatus};
