//! Shared error types for the services crate.

use thiserror::Error;

use quizify_core::model::{QuizOutcomeError, QuizQuestionError, QuizRequestError};

use crate::sessions::SessionPhase;

/// Errors emitted by a `QuizModel` transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("quiz generation is not configured")]
    Disabled,
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("model request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Ways the model output can fail the quiz schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaViolation {
    #[error("response content was empty")]
    EmptyContent,
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("response has no `questions` field")]
    MissingQuestions,
    #[error("`questions` is not an array")]
    QuestionsNotArray,
    #[error("expected {expected} questions, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("question {index} has the wrong shape: {reason}")]
    QuestionShape { index: usize, reason: String },
    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuizQuestionError,
    },
}

/// Coarse failure class of a generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    ServiceUnavailable,
    MalformedOutput,
    EmptyResult,
    Unknown,
}

/// Errors emitted by a `QuizGenerator`. Every variant is recoverable by retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("AI service unavailable: {message}")]
    ServiceUnavailable { message: String },
    #[error("model output failed validation: {0}")]
    MalformedOutput(#[from] SchemaViolation),
    #[error("model returned no questions")]
    EmptyResult,
    #[error("{message}")]
    Unknown { message: String },
}

impl GenerationError {
    #[must_use]
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            Self::ServiceUnavailable { .. } => GenerationErrorKind::ServiceUnavailable,
            Self::MalformedOutput(_) => GenerationErrorKind::MalformedOutput,
            Self::EmptyResult => GenerationErrorKind::EmptyResult,
            Self::Unknown { .. } => GenerationErrorKind::Unknown,
        }
    }
}

/// Errors emitted by `QuizSession` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{operation} is not allowed while the session is {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },
    #[error("generation result belongs to a request that is no longer pending")]
    StaleResult,
    #[error(transparent)]
    InvalidInput(#[from] QuizRequestError),
    #[error(transparent)]
    Outcome(#[from] QuizOutcomeError),
}
