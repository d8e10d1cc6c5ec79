use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("name must be at least 2 characters")]
    NameTooShort,

    #[error("phone number must be at least 10 digits")]
    PhoneTooShort,

    #[error("phone number must contain only digits")]
    PhoneNotNumeric,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("ID number is required")]
    MissingIdNumber,
}
