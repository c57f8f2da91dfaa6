use std::fmt;

use tracing::{debug, info, warn};

use quizify_core::Clock;
use quizify_core::model::{Quiz, QuizOutcome, QuizRequest};

use super::state::{
    ActiveQuiz, CompletedQuiz, PendingQuiz, SessionFailure, SessionPhase, SessionState,
};
use crate::error::{GenerationError, GenerationErrorKind, SessionError};
use crate::generation::QuizGenerator;

pub const TITLE_SERVICE_BUSY: &str = "AI Service Busy";
pub const TITLE_NO_QUESTIONS: &str = "No Questions Generated";
pub const TITLE_GENERATION_FAILED: &str = "Quiz Generation Failed";

const MESSAGE_SERVICE_BUSY: &str =
    "The AI service is currently busy or unavailable. Please wait a moment and try again.";
const MESSAGE_NO_QUESTIONS: &str = "The AI couldn't generate questions for this topic, or the generated quiz was empty. Please try a different field or topic.";
const MESSAGE_UNKNOWN: &str =
    "An unknown error occurred while generating the quiz. Please try again.";

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Owns one quiz session and is the only place its state changes.
///
/// `start` is the only suspending operation. It can also be driven in two halves
/// (`begin_start` / `finish_start`) so a UI can render Loading while the request runs
/// without holding the session across the await.
#[derive(Default)]
pub struct QuizSession {
    state: SessionState,
    clock: Clock,
    next_ticket: u64,
}

impl QuizSession {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: SessionState::Setup,
            clock,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Generate a quiz for `(field, topic)` and enter Active or Error.
    ///
    /// A failed generation is not an `Err`: it moves the session to Error with a
    /// user-facing title and message.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if the input fails pre-flight validation and
    /// `SessionError::InvalidPhase` unless the session is in Setup or Error. The state is
    /// left untouched in both cases and the generator is not called.
    pub async fn start(
        &mut self,
        generator: &dyn QuizGenerator,
        field: &str,
        topic: &str,
    ) -> Result<SessionPhase, SessionError> {
        let pending = self.begin_start(field, topic)?;
        let result = generator.generate(pending.request()).await;
        self.finish_start(&pending, result)
    }

    /// Validate input and enter Loading. Returns the handle to pass back to `finish_start`.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::start`].
    pub fn begin_start(&mut self, field: &str, topic: &str) -> Result<PendingQuiz, SessionError> {
        let phase = self.phase();
        if !matches!(phase, SessionPhase::Setup | SessionPhase::Error) {
            return Err(SessionError::InvalidPhase {
                operation: "start",
                phase,
            });
        }

        let request = QuizRequest::new(field, topic)?;
        self.next_ticket += 1;
        let pending = PendingQuiz {
            ticket: self.next_ticket,
            request,
        };
        debug!(
            field = pending.request.field(),
            topic = pending.request.topic(),
            ticket = pending.ticket,
            "quiz session loading"
        );
        self.state = SessionState::Loading(pending.clone());
        Ok(pending)
    }

    /// Apply the generator's result for `pending` to a Loading session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` if the session is not Loading and
    /// `SessionError::StaleResult` if `pending` is not the request currently loading.
    /// The state is not changed in either case.
    pub fn finish_start(
        &mut self,
        pending: &PendingQuiz,
        result: Result<Quiz, GenerationError>,
    ) -> Result<SessionPhase, SessionError> {
        let SessionState::Loading(current) = &self.state else {
            return Err(SessionError::InvalidPhase {
                operation: "finish_start",
                phase: self.phase(),
            });
        };
        if current.ticket != pending.ticket {
            debug!(
                expected = current.ticket,
                received = pending.ticket,
                "stale generation result dropped"
            );
            return Err(SessionError::StaleResult);
        }

        self.state = match result {
            Ok(quiz) => {
                info!(questions = quiz.len(), "quiz session active");
                SessionState::Active(ActiveQuiz::new(quiz, self.clock.now()))
            }
            Err(err) => {
                let failure = failure_for(&err);
                warn!(kind = ?failure.kind, error = %err, "quiz generation failed");
                SessionState::Error(failure)
            }
        };
        Ok(self.phase())
    }

    /// Score the current question and advance, or finish on the last one.
    ///
    /// Comparison is exact string equality with the stored answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside Active; the state is not changed.
    pub fn answer(&mut self, selected: &str) -> Result<QuizAnswerResult, SessionError> {
        let phase = self.phase();
        let SessionState::Active(active) = &mut self.state else {
            return Err(SessionError::InvalidPhase {
                operation: "answer",
                phase,
            });
        };

        let question = active.current_question();
        let is_correct = question.is_correct(selected);
        let correct_answer = question.answer().to_string();
        let new_score = active.score + u32::from(is_correct);

        if !active.is_last_question() {
            active.score = new_score;
            active.current += 1;
            return Ok(QuizAnswerResult {
                is_correct,
                correct_answer,
                is_complete: false,
            });
        }

        let total = u32::try_from(active.quiz.len()).unwrap_or(u32::MAX);
        // A wall clock stepping backwards must not keep the session on the last question.
        let completed_at = self.clock.now().max(active.started_at);
        let outcome = QuizOutcome::new(new_score, total, active.started_at, completed_at)?;
        let quiz = active.quiz.clone();
        info!(score = outcome.score(), total = outcome.total(), "quiz completed");
        self.state = SessionState::Results(CompletedQuiz { quiz, outcome });

        Ok(QuizAnswerResult {
            is_correct,
            correct_answer,
            is_complete: true,
        })
    }

    /// Reset to a fresh Setup state from any phase.
    pub fn play_again(&mut self) {
        debug!(from = ?self.phase(), "quiz session reset");
        self.state = SessionState::Setup;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase())
            .field("current_index", &self.state.current_index())
            .field("score", &self.state.score())
            .finish_non_exhaustive()
    }
}

/// Map a generation error to the title and message shown to the user.
#[must_use]
pub fn failure_for(err: &GenerationError) -> SessionFailure {
    let kind = err.kind();
    let (title, message) = match kind {
        GenerationErrorKind::ServiceUnavailable => {
            (TITLE_SERVICE_BUSY, MESSAGE_SERVICE_BUSY.to_string())
        }
        GenerationErrorKind::EmptyResult => (TITLE_NO_QUESTIONS, MESSAGE_NO_QUESTIONS.to_string()),
        GenerationErrorKind::MalformedOutput | GenerationErrorKind::Unknown => {
            let detail = err.to_string();
            let message = if detail.trim().is_empty() {
                MESSAGE_UNKNOWN.to_string()
            } else {
                detail
            };
            (TITLE_GENERATION_FAILED, message)
        }
    };

    SessionFailure {
        kind,
        title: title.to_string(),
        message,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
