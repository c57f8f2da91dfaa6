use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of options a multiple-choice question must offer.
pub const MIN_OPTIONS: usize = 2;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestionDraft {
    /// Check the draft against the question shape.
    ///
    /// # Errors
    ///
    /// Returns `QuizQuestionError` when the text is blank, fewer than two options are
    /// offered, an option is blank, or the answer is not one of the options.
    pub fn validate(self) -> Result<QuizQuestion, QuizQuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }

        if self.options.len() < MIN_OPTIONS {
            return Err(QuizQuestionError::TooFewOptions {
                len: self.options.len(),
            });
        }

        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuizQuestionError::EmptyOption { index });
        }

        // Exact match: the answer is compared to the selection byte-for-byte later on.
        if !self.options.iter().any(|o| *o == self.answer) {
            return Err(QuizQuestionError::AnswerNotInOptions {
                answer: self.answer,
            });
        }

        Ok(QuizQuestion {
            question: self.question,
            options: self.options,
            answer: self.answer,
        })
    }
}

/// A validated multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl QuizQuestion {
    /// Build a question from its parts.
    ///
    /// # Errors
    ///
    /// See [`QuizQuestionDraft::validate`].
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuizQuestionError> {
        QuizQuestionDraft {
            question: question.into(),
            options,
            answer: answer.into(),
        }
        .validate()
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True when `selected` is exactly the correct answer (no trimming or case folding).
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizQuestionError {
    #[error("question text must not be empty")]
    EmptyQuestion,

    #[error("question needs at least {MIN_OPTIONS} options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
