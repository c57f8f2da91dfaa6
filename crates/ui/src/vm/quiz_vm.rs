use quizify_core::model::{MIN_INPUT_CHARS, QuizRequestError};
use services::{ActiveQuiz, CompletedQuiz, GenerationErrorKind, SessionFailure, SessionState};

use crate::vm::time_fmt::format_elapsed;

/// Everything the quiz page renders for one session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPageVm {
    pub banner: Option<ErrorBannerVm>,
    pub screen: QuizScreenVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    /// Setup form; `loading` disables it while a quiz is generated.
    Setup { loading: bool },
    Question(QuestionVm),
    Results(ResultsVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBannerVm {
    pub title: String,
    pub message: String,
    pub service_issue: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percentage_label: String,
    pub message: &'static str,
    pub elapsed_label: String,
}

#[must_use]
pub fn map_quiz_page(state: &SessionState) -> QuizPageVm {
    match state {
        SessionState::Setup => QuizPageVm {
            banner: None,
            screen: QuizScreenVm::Setup { loading: false },
        },
        SessionState::Loading(_) => QuizPageVm {
            banner: None,
            screen: QuizScreenVm::Setup { loading: true },
        },
        // The form stays up under the banner so the user can retry.
        SessionState::Error(failure) => QuizPageVm {
            banner: Some(map_error_banner(failure)),
            screen: QuizScreenVm::Setup { loading: false },
        },
        SessionState::Active(active) => QuizPageVm {
            banner: None,
            screen: QuizScreenVm::Question(map_question(active)),
        },
        SessionState::Results(done) => QuizPageVm {
            banner: None,
            screen: QuizScreenVm::Results(map_results(done)),
        },
    }
}

#[must_use]
pub fn map_error_banner(failure: &SessionFailure) -> ErrorBannerVm {
    ErrorBannerVm {
        title: failure.title().to_string(),
        message: failure.message().to_string(),
        service_issue: matches!(
            failure.kind(),
            GenerationErrorKind::ServiceUnavailable | GenerationErrorKind::EmptyResult
        ),
    }
}

#[must_use]
pub fn map_question(active: &ActiveQuiz) -> QuestionVm {
    let question = active.current_question();
    let number = active.question_number();
    QuestionVm {
        index: active.current_index(),
        heading: format!("Question {number}"),
        progress_label: format!("{number} / {}", active.total_questions()),
        prompt: question.question().to_string(),
        options: question.options().to_vec(),
        submit_label: if active.is_last_question() {
            "Finish Quiz"
        } else {
            "Next Question"
        },
    }
}

#[must_use]
pub fn map_results(done: &CompletedQuiz) -> ResultsVm {
    let outcome = done.outcome();
    ResultsVm {
        score_label: format!("{} / {}", outcome.score(), outcome.total()),
        percentage_label: format!("({}%)", outcome.percentage()),
        message: outcome.message(),
        elapsed_label: format!(
            "Finished in {}",
            format_elapsed(outcome.started_at(), outcome.completed_at())
        ),
    }
}

//
// ─── SETUP FORM ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupFormErrors {
    pub field: Option<String>,
    pub topic: Option<String>,
}

impl SetupFormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.topic.is_none()
    }
}

/// Per-input checks for the setup form, reported together so both messages can show.
///
/// # Errors
///
/// Returns `SetupFormErrors` naming each input that is too short.
pub fn validate_setup_form(field: &str, topic: &str) -> Result<(), SetupFormErrors> {
    let too_short = |value: &str| value.trim().chars().count() < MIN_INPUT_CHARS;
    let errors = SetupFormErrors {
        field: too_short(field).then(|| QuizRequestError::FieldTooShort.to_string()),
        topic: too_short(topic).then(|| QuizRequestError::TopicTooShort.to_string()),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
