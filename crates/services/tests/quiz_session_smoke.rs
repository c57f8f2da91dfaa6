use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quizify_core::model::{Quiz, QuizQuestion, QuizRequest};
use quizify_core::time::fixed_clock;
use serde_json::json;
use services::{
    GenerationError, GenerationErrorKind, ModelError, QuizGenerationService, QuizGenerator,
    QuizModel, QuizPrompt, QuizSession, SessionError, SessionPhase, SessionState,
};

/// Generator that returns a canned result and counts calls.
struct CannedGenerator {
    result: Result<Quiz, GenerationError>,
    calls: AtomicUsize,
}

impl CannedGenerator {
    fn new(result: Result<Quiz, GenerationError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuizGenerator for CannedGenerator {
    async fn generate(&self, _request: &QuizRequest) -> Result<Quiz, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Model that replies with fixed text.
struct TextModel(String);

#[async_trait]
impl QuizModel for TextModel {
    async fn complete(&self, _prompt: &QuizPrompt) -> Result<String, ModelError> {
        Ok(self.0.clone())
    }
}

fn history_quiz() -> Quiz {
    let questions = (1..=10)
        .map(|n| {
            QuizQuestion::new(
                format!("World War II question {n}"),
                vec![
                    format!("answer {n}"),
                    format!("decoy {n}"),
                    format!("other {n}"),
                ],
                format!("answer {n}"),
            )
            .unwrap()
        })
        .collect();
    Quiz::new(questions).unwrap()
}

#[tokio::test]
async fn history_quiz_with_seven_correct_answers() {
    let generator = CannedGenerator::new(Ok(history_quiz()));
    let mut session = QuizSession::new(fixed_clock());

    let phase = session
        .start(&generator, "History", "World War II")
        .await
        .unwrap();
    assert_eq!(phase, SessionPhase::Active);
    assert_eq!(session.state().current_index(), 0);
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.state().questions().len(), 10);

    let questions = session.state().questions().to_vec();
    for (index, question) in questions.iter().enumerate() {
        let selection = if index < 7 {
            question.answer().to_string()
        } else {
            question.options()[1].clone()
        };
        session.answer(&selection).unwrap();
    }

    assert_eq!(session.phase(), SessionPhase::Results);
    assert_eq!(session.state().score(), 7);
    let outcome = session.state().completed().unwrap().outcome();
    assert_eq!(outcome.percentage(), 70);
    assert_eq!(outcome.message(), "Great job! You know your stuff!");
}

#[tokio::test]
async fn all_correct_answers_score_ten() {
    let generator = CannedGenerator::new(Ok(history_quiz()));
    let mut session = QuizSession::new(fixed_clock());
    session
        .start(&generator, "History", "World War II")
        .await
        .unwrap();

    for _ in 0..10 {
        let expected = session
            .state()
            .active()
            .unwrap()
            .current_question()
            .answer()
            .to_string();
        session.answer(&expected).unwrap();
    }

    assert_eq!(session.phase(), SessionPhase::Results);
    assert_eq!(session.state().score(), 10);
}

#[tokio::test]
async fn score_matches_number_of_correct_answers() {
    for k in 0..=10 {
        let generator = CannedGenerator::new(Ok(history_quiz()));
        let mut session = QuizSession::new(fixed_clock());
        session
            .start(&generator, "History", "World War II")
            .await
            .unwrap();

        for index in 0..10 {
            let question = session.state().active().unwrap().current_question().clone();
            let selection = if index < k {
                question.answer()
            } else {
                question.options()[2].as_str()
            };
            session.answer(selection).unwrap();
            assert!(session.state().score() as usize <= index + 1);
        }

        assert_eq!(session.phase(), SessionPhase::Results);
        assert_eq!(session.state().score() as usize, k);
    }
}

#[tokio::test]
async fn overloaded_service_shows_busy_error() {
    let generator = CannedGenerator::new(Err(GenerationError::from_upstream_message(
        "503 overloaded",
    )));
    let mut session = QuizSession::new(fixed_clock());

    let phase = session.start(&generator, "Science", "xy").await.unwrap();

    assert_eq!(phase, SessionPhase::Error);
    let failure = session.state().last_error().unwrap();
    assert_eq!(failure.title(), "AI Service Busy");
    assert_eq!(failure.kind(), GenerationErrorKind::ServiceUnavailable);
}

#[tokio::test]
async fn single_character_topic_is_rejected_before_generation() {
    let generator = CannedGenerator::new(Ok(history_quiz()));
    let mut session = QuizSession::new(fixed_clock());

    let err = session.start(&generator, "Science", "x").await.unwrap_err();

    assert!(matches!(err, SessionError::InvalidInput(_)));
    assert_eq!(session.state(), &SessionState::Setup);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_question_list_shows_no_questions_error() {
    let service = QuizGenerationService::new(Arc::new(TextModel(
        json!({ "questions": [] }).to_string(),
    )));
    let mut session = QuizSession::new(fixed_clock());

    let phase = session.start(&service, "Art", "Cubism").await.unwrap();

    assert_eq!(phase, SessionPhase::Error);
    let failure = session.state().last_error().unwrap();
    assert_eq!(failure.title(), "No Questions Generated");
    assert_eq!(failure.kind(), GenerationErrorKind::EmptyResult);
    assert!(session.state().questions().is_empty());
}

#[tokio::test]
async fn malformed_output_shows_generation_failed() {
    let service = QuizGenerationService::new(Arc::new(TextModel(
        json!({ "questions": [{ "question": "Q", "options": ["a", "b"], "answer": "c" }] })
            .to_string(),
    )));
    let mut session = QuizSession::new(fixed_clock());

    session.start(&service, "Art", "Cubism").await.unwrap();

    let failure = session.state().last_error().unwrap();
    assert_eq!(failure.title(), "Quiz Generation Failed");
    assert_eq!(failure.kind(), GenerationErrorKind::MalformedOutput);
}

#[tokio::test]
async fn retry_from_error_then_play_again() {
    let failing = CannedGenerator::new(Err(GenerationError::Unknown {
        message: "connection refused".into(),
    }));
    let working = CannedGenerator::new(Ok(history_quiz()));
    let mut session = QuizSession::new(fixed_clock());

    session.start(&failing, "History", "Rome").await.unwrap();
    assert_eq!(session.phase(), SessionPhase::Error);
    assert_eq!(
        session.state().last_error().unwrap().message(),
        "connection refused"
    );

    session.start(&working, "History", "Rome").await.unwrap();
    assert_eq!(session.phase(), SessionPhase::Active);
    assert!(session.state().last_error().is_none());

    session.answer("answer 1").unwrap();
    session.play_again();
    assert_eq!(session.state(), &SessionState::Setup);
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.state().current_index(), 0);
}

#[tokio::test]
async fn start_is_rejected_while_active() {
    let generator = CannedGenerator::new(Ok(history_quiz()));
    let mut session = QuizSession::new(fixed_clock());
    session
        .start(&generator, "History", "World War II")
        .await
        .unwrap();

    let err = session
        .start(&generator, "History", "Napoleon")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidPhase {
            operation: "start",
            phase: SessionPhase::Active
        }
    );
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}
