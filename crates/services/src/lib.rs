#![forbid(unsafe_code)]

pub mod error;
pub mod generation;
pub mod sessions;

pub use quizify_core::Clock;

pub use error::{GenerationError, GenerationErrorKind, ModelError, SchemaViolation, SessionError};
pub use generation::{
    OpenAiQuizModel, QuizGenConfig, QuizGenerationService, QuizGenerator, QuizModel, QuizPrompt,
};
pub use sessions::{
    ActiveQuiz, CompletedQuiz, PendingQuiz, QuizAnswerResult, QuizSession, SessionFailure,
    SessionPhase, SessionState,
};
