use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("assessment incomplete: unanswered questions: {}", missing.join(", "))]
    IncompleteAssessment { missing: Vec<String> },

    #[error("question '{question}' has no option '{value}'")]
    UnknownOption { question: String, value: String },

    #[error("question '{0}' has not been answered")]
    Unanswered(String),
}
