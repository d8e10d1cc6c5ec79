//! The ten-question wellness self-assessment.
//!
//! Question and option tables are fixed data; scoring is the mean of the
//! ten option scores, thresholded into a three-level status.

use std::collections::HashMap;

use doktra_core::models::{WellnessReport, WellnessStatus};

use crate::error::ScreeningError;

/// One selectable answer with its fixed score.
#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    /// 1–10; higher is healthier.
    pub score: u8,
}

/// One assessment question with its four options.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

const fn option(value: &'static str, label: &'static str, score: u8) -> AnswerOption {
    AnswerOption { value, label, score }
}

/// The fixed questionnaire, in presentation order.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: "general",
        prompt: "How would you rate your overall health?",
        options: &[
            option("excellent", "Excellent", 10),
            option("good", "Good", 8),
            option("fair", "Fair", 5),
            option("poor", "Poor", 2),
        ],
    },
    Question {
        id: "sleep",
        prompt: "How many hours of sleep do you get on average per night?",
        options: &[
            option("less-than-5", "Less than 5 hours", 2),
            option("5-6", "5-6 hours", 5),
            option("7-8", "7-8 hours", 10),
            option("more-than-8", "More than 8 hours", 8),
        ],
    },
    Question {
        id: "exercise",
        prompt: "How often do you exercise?",
        options: &[
            option("daily", "Daily", 10),
            option("few-times-week", "A few times a week", 8),
            option("once-week", "Once a week", 5),
            option("rarely", "Rarely or never", 2),
        ],
    },
    Question {
        id: "diet",
        prompt: "How would you describe your diet?",
        options: &[
            option("very-healthy", "Very healthy and balanced", 10),
            option("mostly-healthy", "Mostly healthy", 8),
            option("somewhat-healthy", "Somewhat healthy", 5),
            option("unhealthy", "Mostly unhealthy", 2),
        ],
    },
    Question {
        id: "stress",
        prompt: "How would you rate your stress level?",
        options: &[
            option("very-low", "Very low", 10),
            option("low", "Low", 8),
            option("moderate", "Moderate", 5),
            option("high", "High", 2),
        ],
    },
    Question {
        id: "chronic",
        prompt: "Do you have any chronic health conditions?",
        options: &[
            option("none", "None", 10),
            option("one", "One condition, well managed", 7),
            option("multiple-managed", "Multiple conditions, well managed", 5),
            option("multiple-unmanaged", "Multiple conditions, not well managed", 2),
        ],
    },
    Question {
        id: "medication",
        prompt: "How many medications do you take daily?",
        options: &[
            option("none", "None", 10),
            option("1-2", "1-2 medications", 8),
            option("3-5", "3-5 medications", 5),
            option("more-than-5", "More than 5 medications", 3),
        ],
    },
    Question {
        id: "checkup",
        prompt: "When was your last medical checkup?",
        options: &[
            option("within-6-months", "Within the last 6 months", 10),
            option("within-year", "Within the last year", 8),
            option("1-2-years", "1-2 years ago", 5),
            option("more-than-2-years", "More than 2 years ago", 2),
        ],
    },
    Question {
        id: "mental",
        prompt: "How would you rate your mental health?",
        options: &[
            option("excellent", "Excellent", 10),
            option("good", "Good", 8),
            option("fair", "Fair", 5),
            option("poor", "Poor", 2),
        ],
    },
    Question {
        id: "energy",
        prompt: "How would you rate your energy levels?",
        options: &[
            option("high", "High energy all day", 10),
            option("moderate", "Moderate energy with some dips", 7),
            option("low", "Low energy, frequent fatigue", 4),
            option("very-low", "Very low energy, constant fatigue", 1),
        ],
    },
];

/// Map of question id to the selected option value.
pub type AnswerMap = HashMap<String, String>;

/// Mean at or above this is "good".
const GOOD_THRESHOLD: f64 = 8.0;
/// Mean at or above this (but below good) is "fair".
const FAIR_THRESHOLD: f64 = 5.0;

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Score a completed answer map.
///
/// Every question must be answered with one of its option values;
/// anything less is a precondition failure, never a zero-filled score.
/// Entries under unknown question ids are ignored.
pub fn score(answers: &AnswerMap) -> Result<WellnessReport, ScreeningError> {
    let missing: Vec<String> = QUESTIONS
        .iter()
        .filter(|q| !answers.contains_key(q.id))
        .map(|q| q.id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ScreeningError::IncompleteAssessment { missing });
    }

    let mut total = 0u32;
    for question in QUESTIONS {
        let value = &answers[question.id];
        let selected = question
            .options
            .iter()
            .find(|o| o.value == value.as_str())
            .ok_or_else(|| ScreeningError::UnknownOption {
                question: question.id.to_string(),
                value: value.clone(),
            })?;
        total += u32::from(selected.score);
    }

    let mean = f64::from(total) / QUESTIONS.len() as f64;
    let status = if mean >= GOOD_THRESHOLD {
        WellnessStatus::Good
    } else if mean >= FAIR_THRESHOLD {
        WellnessStatus::Fair
    } else {
        WellnessStatus::Attention
    };

    Ok(WellnessReport {
        status,
        score: (mean * 10.0).round() / 10.0,
        message: status_message(status).to_string(),
    })
}

/// The fixed message shown for each status.
pub fn status_message(status: WellnessStatus) -> &'static str {
    match status {
        WellnessStatus::Good => {
            "Your health indicators look good. Continue maintaining your healthy habits."
        }
        WellnessStatus::Fair => {
            "Your health is fair. There are some areas that could use improvement."
        }
        WellnessStatus::Attention => {
            "Some aspects of your health need attention. Consider consulting a healthcare \
             professional."
        }
    }
}
