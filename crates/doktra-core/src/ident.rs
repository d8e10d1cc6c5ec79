//! Patient identifier generation.
//!
//! Doktra has no server-side accounts; a patient's identifier is derived
//! from their name and phone number plus a random component, and doubles
//! as their login credential.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Generate a patient identifier from a name and phone number.
///
/// The identifier is built from up to three characters of the name
/// (lowercased, whitespace removed), the last four digits of the phone
/// number, four random alphanumeric characters, and the last four digits
/// of the current millisecond timestamp, then uppercased, e.g.
/// `JOH7890-K3QF-8241`.
pub fn generate_patient_id(name: &str, phone: &str) -> String {
    let clean: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let name_prefix: String = clean.chars().take(3).collect();

    let digits: Vec<char> = phone.chars().collect();
    let phone_suffix: String = digits[digits.len().saturating_sub(4)..].iter().collect();

    let random: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(char::from)
        .collect();

    let millis = jiff::Timestamp::now().as_millisecond().to_string();
    let stamp = &millis[millis.len().saturating_sub(4)..];

    format!("{name_prefix}{phone_suffix}-{random}-{stamp}").to_uppercase()
}
