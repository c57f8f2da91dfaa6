use serde::Serialize;
use thiserror::Error;

use crate::model::question::QuizQuestion;

/// Number of questions in every generated quiz.
pub const QUIZ_LENGTH: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("quiz must have exactly {QUIZ_LENGTH} questions, got {len}")]
    WrongLength { len: usize },
}

/// An ordered set of exactly [`QUIZ_LENGTH`] validated questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty list and `QuizError::WrongLength`
    /// for any other count than [`QUIZ_LENGTH`].
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        if questions.len() != QUIZ_LENGTH {
            return Err(QuizError::WrongLength {
                len: questions.len(),
            });
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// False for every constructed quiz.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}
