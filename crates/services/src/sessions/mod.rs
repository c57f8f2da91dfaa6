mod controller;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{
    QuizAnswerResult, QuizSession, TITLE_GENERATION_FAILED, TITLE_NO_QUESTIONS,
    TITLE_SERVICE_BUSY, failure_for,
};
pub use state::{
    ActiveQuiz, CompletedQuiz, PendingQuiz, SessionFailure, SessionPhase, SessionState,
};
