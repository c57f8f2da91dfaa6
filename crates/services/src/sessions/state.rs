use chrono::{DateTime, Utc};

use quizify_core::model::{Quiz, QuizOutcome, QuizQuestion, QuizRequest};

use crate::error::GenerationErrorKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Setup,
    Loading,
    Active,
    Results,
    Error,
}

/// A quiz being answered. `current` always indexes into `quiz`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveQuiz {
    pub(crate) quiz: Quiz,
    pub(crate) current: usize,
    pub(crate) score: u32,
    pub(crate) started_at: DateTime<Utc>,
}

impl ActiveQuiz {
    pub(crate) fn new(quiz: Quiz, started_at: DateTime<Utc>) -> Self {
        Self {
            quiz,
            current: 0,
            score: 0,
            started_at,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.quiz.questions()[self.current]
    }

    /// 1-based position of the current question.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current == self.quiz.last_index()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// A fully answered quiz and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuiz {
    pub(crate) quiz: Quiz,
    pub(crate) outcome: QuizOutcome,
}

impl CompletedQuiz {
    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn outcome(&self) -> &QuizOutcome {
        &self.outcome
    }
}

/// Handle for one in-flight generation, returned by `begin_start`.
///
/// Only the handle of the current Loading phase is accepted by `finish_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuiz {
    pub(crate) ticket: u64,
    pub(crate) request: QuizRequest,
}

impl PendingQuiz {
    #[must_use]
    pub fn request(&self) -> &QuizRequest {
        &self.request
    }
}

/// User-facing description of a failed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFailure {
    pub(crate) kind: GenerationErrorKind,
    pub(crate) title: String,
    pub(crate) message: String,
}

impl SessionFailure {
    #[must_use]
    pub fn kind(&self) -> GenerationErrorKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Session state; each variant carries only the data valid in that phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Setup,
    Loading(PendingQuiz),
    Active(ActiveQuiz),
    Results(CompletedQuiz),
    Error(SessionFailure),
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Setup => SessionPhase::Setup,
            Self::Loading(_) => SessionPhase::Loading,
            Self::Active(_) => SessionPhase::Active,
            Self::Results(_) => SessionPhase::Results,
            Self::Error(_) => SessionPhase::Error,
        }
    }

    /// Questions of the current quiz; empty outside Active and Results.
    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        match self {
            Self::Active(active) => active.quiz.questions(),
            Self::Results(done) => done.quiz.questions(),
            Self::Setup | Self::Loading(_) | Self::Error(_) => &[],
        }
    }

    /// Index of the question being shown. Stays on the last index once results are in.
    #[must_use]
    pub fn current_index(&self) -> usize {
        match self {
            Self::Active(active) => active.current,
            Self::Results(done) => done.quiz.last_index(),
            Self::Setup | Self::Loading(_) | Self::Error(_) => 0,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            Self::Active(active) => active.score,
            Self::Results(done) => done.outcome.score(),
            Self::Setup | Self::Loading(_) | Self::Error(_) => 0,
        }
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&SessionFailure> {
        match self {
            Self::Error(failure) => Some(failure),
            _ => None,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveQuiz> {
        match self {
            Self::Active(active) => Some(active),
            _ => None,
        }
    }

    #[must_use]
    pub fn completed(&self) -> Option<&CompletedQuiz> {
        match self {
            Self::Results(done) => Some(done),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_request(&self) -> Option<&QuizRequest> {
        match self {
            Self::Loading(pending) => Some(&pending.request),
            _ => None,
        }
    }
}
