//! Linear assessment flow.
//!
//! Presents one question at a time, advancing only once the current
//! question has an answer; advancing past the last question scores the
//! completed map. No branching, skipping, or cycles.

use doktra_core::models::WellnessReport;

use crate::assessment::{self, AnswerMap, QUESTIONS, Question};
use crate::error::ScreeningError;

/// What a call to [`AssessmentWizard::advance`] produced.
#[derive(Debug)]
pub enum Step {
    /// Moved to the question at this index (0-based).
    Question(usize),
    /// All questions answered; the assessment has been scored.
    Complete(WellnessReport),
}

/// A strictly linear walk through the assessment questions.
#[derive(Debug, Clone, Default)]
pub struct AssessmentWizard {
    current: usize,
    answers: AnswerMap,
}

impl AssessmentWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently presented.
    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.current]
    }

    /// 1-based position, for "Question 3 of 10" displays.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        QUESTIONS.len()
    }

    /// Progress through the questionnaire as a percentage.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / QUESTIONS.len() as f64 * 100.0
    }

    /// The answer recorded for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        self.answers.get(self.question().id).map(String::as_str)
    }

    /// Record an answer for the current question. Re-answering replaces
    /// the previous selection.
    pub fn answer(&mut self, value: &str) -> Result<(), ScreeningError> {
        let question = self.question();
        if !question.options.iter().any(|o| o.value == value) {
            return Err(ScreeningError::UnknownOption {
                question: question.id.to_string(),
                value: value.to_string(),
            });
        }
        self.answers
            .insert(question.id.to_string(), value.to_string());
        Ok(())
    }

    /// Move forward. On the last question this scores the assessment.
    ///
    /// Fails if the current question has no recorded answer; the flow
    /// cannot skip ahead or finish early.
    pub fn advance(&mut self) -> Result<Step, ScreeningError> {
        let question = self.question();
        if !self.answers.contains_key(question.id) {
            return Err(ScreeningError::Unanswered(question.id.to_string()));
        }
        if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
            Ok(Step::Question(self.current))
        } else {
            Ok(Step::Complete(assessment::score(&self.answers)?))
        }
    }

    /// Step back one question. Returns false at the first question.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// The answers recorded so far.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }
}
