use serde::Serialize;
use thiserror::Error;

/// Minimum length (in characters, after trimming) of the field and topic inputs.
pub const MIN_INPUT_CHARS: usize = 2;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizRequestError {
    #[error("Field must be at least {MIN_INPUT_CHARS} characters.")]
    FieldTooShort,

    #[error("Topic must be at least {MIN_INPUT_CHARS} characters.")]
    TopicTooShort,
}

/// A validated `(field, topic)` pair for quiz generation. Only built through [`QuizRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    field: String,
    topic: String,
}

impl QuizRequest {
    /// Validate the user input. Surrounding whitespace is trimmed; the remaining text is
    /// kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `QuizRequestError` if either value is shorter than [`MIN_INPUT_CHARS`].
    pub fn new(field: &str, topic: &str) -> Result<Self, QuizRequestError> {
        let field = field.trim();
        let topic = topic.trim();

        if field.chars().count() < MIN_INPUT_CHARS {
            return Err(QuizRequestError::FieldTooShort);
        }
        if topic.chars().count() < MIN_INPUT_CHARS {
            return Err(QuizRequestError::TopicTooShort);
        }

        Ok(Self {
            field: field.to_string(),
            topic: topic.to_string(),
        })
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }
}
