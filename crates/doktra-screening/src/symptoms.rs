//! The fixed vocabulary of user-reportable symptoms.

/// Symptoms offered by the symptom-checker UI, in display order.
///
/// Free-text entries outside this list are legal input to the triage
/// scorer; they simply never match a reference list.
pub const COMMON_SYMPTOMS: &[&str] = &[
    "Fever",
    "Cough",
    "Headache",
    "Fatigue",
    "Sore throat",
    "Shortness of breath",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Muscle pain",
    "Joint pain",
    "Chest pain",
    "Abdominal pain",
    "Dizziness",
    "Rash",
    "Blurred vision",
    "Ringing in ears",
    "Loss of appetite",
    "Swollen lymph nodes",
    "Runny nose",
    "Sneezing",
    "Chills",
    "Night sweats",
    "Insomnia",
    "Back pain",
    "Neck pain",
    "Ear pain",
    "Eye pain",
    "Numbness",
    "Tingling",
];
