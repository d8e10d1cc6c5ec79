//! Rule-based symptom triage.
//!
//! Maps a set of reported symptoms to candidate conditions with rough
//! probability estimates. The rules are fixed data: each condition
//! category carries a reference symptom list, a qualification threshold,
//! and a saturating linear probability curve. No category is exclusive:
//! a symptom contributes to every category that references it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Matching rules and scoring constants for one condition category.
#[derive(Debug, Clone, Copy)]
pub struct ConditionCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Symptoms that count toward this category.
    pub symptoms: &'static [&'static str],
    /// Minimum number of matching symptoms before the category is
    /// reported at all.
    pub min_matches: usize,
    pub base_probability: f64,
    pub per_symptom: f64,
    pub cap: f64,
    pub recommendation: &'static str,
}

/// One candidate condition in a triage report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionMatch {
    pub name: String,
    pub description: String,
    /// Estimated match probability in [0, 1]. Derived from the match
    /// count, not learned.
    pub probability: f64,
    pub recommendation: String,
}

/// The full result of one triage evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageReport {
    /// Candidate conditions, descending by probability.
    pub conditions: Vec<ConditionMatch>,
    pub advice: String,
}

/// Attached to every report, regardless of what matched.
pub const DISCLAIMER: &str =
    "Please consult with a healthcare professional for an accurate diagnosis.";

/// The built-in category table.
pub const CATEGORIES: &[ConditionCategory] = &[
    ConditionCategory {
        id: "cold_flu",
        name: "Common Cold or Flu",
        description: "A viral infection affecting the upper respiratory tract",
        symptoms: &[
            "Fever",
            "Cough",
            "Sore throat",
            "Fatigue",
            "Headache",
            "Runny nose",
            "Sneezing",
            "Chills",
        ],
        min_matches: 2,
        base_probability: 0.3,
        per_symptom: 0.15,
        cap: 0.95,
        recommendation: "Rest, stay hydrated, and take over-the-counter medications for symptom \
                         relief. Consult a doctor if symptoms worsen or persist beyond a week.",
    },
    ConditionCategory {
        id: "allergies",
        name: "Seasonal Allergies",
        description: "An immune response to environmental triggers like pollen",
        symptoms: &[
            "Cough",
            "Sore throat",
            "Shortness of breath",
            "Rash",
            "Runny nose",
            "Sneezing",
            "Eye pain",
            "Blurred vision",
        ],
        min_matches: 2,
        base_probability: 0.2,
        per_symptom: 0.15,
        cap: 0.9,
        recommendation: "Consider over-the-counter antihistamines and avoiding allergen \
                         exposure. Consult with an allergist if symptoms are severe or \
                         persistent.",
    },
    ConditionCategory {
        id: "migraine",
        name: "Migraine",
        description: "A neurological condition causing severe headaches and other symptoms",
        symptoms: &[
            "Headache",
            "Nausea",
            "Dizziness",
            "Fatigue",
            "Blurred vision",
            "Ringing in ears",
        ],
        min_matches: 2,
        base_probability: 0.3,
        per_symptom: 0.2,
        cap: 0.9,
        recommendation: "Rest in a dark, quiet room. Consider over-the-counter pain relievers. \
                         If migraines are frequent or severe, schedule an appointment with a \
                         neurologist.",
    },
    ConditionCategory {
        id: "gastroenteritis",
        name: "Gastroenteritis",
        description: "Inflammation of the digestive tract, often from infection",
        symptoms: &[
            "Nausea",
            "Vomiting",
            "Diarrhea",
            "Abdominal pain",
            "Fever",
            "Loss of appetite",
        ],
        min_matches: 2,
        base_probability: 0.3,
        per_symptom: 0.15,
        cap: 0.95,
        recommendation: "Stay hydrated, rest, and eat bland foods. Seek medical attention if \
                         symptoms are severe or persist beyond 48 hours.",
    },
    ConditionCategory {
        id: "covid19",
        name: "Possible COVID-19",
        description: "A respiratory illness caused by the SARS-CoV-2 virus",
        symptoms: &[
            "Fever",
            "Cough",
            "Shortness of breath",
            "Fatigue",
            "Muscle pain",
            "Loss of appetite",
            "Diarrhea",
            "Headache",
        ],
        min_matches: 3,
        base_probability: 0.3,
        per_symptom: 0.1,
        cap: 0.85,
        recommendation: "Consider getting tested for COVID-19. Self-isolate and contact a \
                         healthcare provider for guidance.",
    },
    ConditionCategory {
        id: "anxiety",
        name: "Anxiety",
        description: "A mental health condition characterized by feelings of worry, \
                      nervousness, or unease",
        symptoms: &[
            "Chest pain",
            "Shortness of breath",
            "Dizziness",
            "Fatigue",
            "Insomnia",
            "Headache",
        ],
        min_matches: 3,
        base_probability: 0.2,
        per_symptom: 0.15,
        cap: 0.8,
        recommendation: "Practice relaxation techniques and consider speaking with a mental \
                         health professional.",
    },
    ConditionCategory {
        id: "musculoskeletal",
        name: "Musculoskeletal Issue",
        description: "Problems affecting the muscles, bones, or joints of the back",
        symptoms: &["Back pain", "Neck pain", "Numbness", "Tingling", "Muscle pain"],
        min_matches: 2,
        base_probability: 0.3,
        per_symptom: 0.15,
        cap: 0.9,
        recommendation: "Rest, apply ice/heat, and consider over-the-counter pain relievers. \
                         If pain is severe or persistent, consult with a doctor.",
    },
];

/// Score `symptoms` against the built-in category table.
pub fn evaluate<S: AsRef<str>>(symptoms: &[S]) -> TriageReport {
    evaluate_with(CATEGORIES, symptoms)
}

/// Score `symptoms` against an explicit category table.
///
/// Total over any input: an empty or entirely unrecognized symptom set
/// yields the single "Insufficient Information" fallback record.
pub fn evaluate_with<S: AsRef<str>>(
    categories: &[ConditionCategory],
    symptoms: &[S],
) -> TriageReport {
    let reported: BTreeSet<&str> = symptoms.iter().map(|s| s.as_ref()).collect();

    let mut conditions: Vec<ConditionMatch> = Vec::new();
    for category in categories {
        let count = category
            .symptoms
            .iter()
            .filter(|&&s| reported.contains(s))
            .count();
        if count < category.min_matches {
            continue;
        }
        let probability =
            (category.base_probability + count as f64 * category.per_symptom).min(category.cap);
        conditions.push(ConditionMatch {
            name: category.name.to_string(),
            description: category.description.to_string(),
            probability,
            recommendation: category.recommendation.to_string(),
        });
    }

    if conditions.is_empty() {
        conditions.push(ConditionMatch {
            name: "Insufficient Information".to_string(),
            description: "Not enough symptoms to determine a specific condition".to_string(),
            probability: 0.5,
            recommendation: "Monitor your symptoms and consult with a healthcare professional \
                             if they worsen or persist."
                .to_string(),
        });
    }

    // Stable: ties keep the category table's order.
    conditions.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    TriageReport {
        conditions,
        advice: DISCLAIMER.to_string(),
    }
}
