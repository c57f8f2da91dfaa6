use std::sync::Arc;

use services::{GenerationError, SessionPhase};

use super::quiz::QuizIntent;
use super::test_harness::{CannedGenerator, PendingGenerator, ViewHarness, sample_quiz};

fn assert_contains(html: &str, needle: &str) {
    assert!(html.contains(needle), "missing {needle:?} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_renders_form() {
    let harness = ViewHarness::new(Arc::new(CannedGenerator(Ok(sample_quiz()))));

    let html = harness.render();
    assert_contains(&html, "Quizify");
    assert_contains(&html, "Enter a field and topic to generate your quiz!");
    assert_contains(&html, "Start Quiz");
    assert_eq!(harness.phase(), SessionPhase::Setup);
}

#[tokio::test(flavor = "current_thread")]
async fn short_topic_shows_validation_message() {
    let mut harness = ViewHarness::new(Arc::new(CannedGenerator(Ok(sample_quiz()))));

    harness.start("Science", "x");

    let html = harness.render();
    assert_contains(&html, "Topic must be at least 2 characters.");
    assert!(!html.contains("Field must be at least 2 characters."));
    assert_eq!(harness.phase(), SessionPhase::Setup);
}

#[tokio::test(flavor = "current_thread")]
async fn pending_generation_shows_loading_form() {
    let mut harness = ViewHarness::new(Arc::new(PendingGenerator));

    harness.start("History", "Rome");
    harness.drive_async().await;

    assert_eq!(harness.phase(), SessionPhase::Loading);
    assert_contains(&harness.render(), "Generating Quiz...");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_runs_from_first_question_to_results() {
    let mut harness = ViewHarness::new(Arc::new(CannedGenerator(Ok(sample_quiz()))));

    harness.start("History", "World War II");
    harness.drive_async().await;

    assert_eq!(harness.phase(), SessionPhase::Active);
    let html = harness.render();
    assert_contains(&html, "Question 1");
    assert_contains(&html, "1 / 10");
    assert_contains(&html, "History question 1");
    assert_contains(&html, "Next Question");

    for n in 1..=10 {
        let answer = if n <= 7 {
            harness.current_answer()
        } else {
            format!("wrong {n}")
        };
        if n == 10 {
            assert_contains(&harness.render(), "Finish Quiz");
        }
        harness.dispatch(QuizIntent::Answer(answer));
        if n == 1 {
            let html = harness.render();
            assert_contains(&html, "Question 2");
            assert_contains(&html, "2 / 10");
        }
    }

    assert_eq!(harness.phase(), SessionPhase::Results);
    let html = harness.render();
    assert_contains(&html, "Quiz Completed!");
    assert_contains(&html, "7 / 10");
    assert_contains(&html, "(70%)");
    assert_contains(&html, "Great job! You know your stuff!");

    harness.dispatch(QuizIntent::PlayAgain);
    assert_eq!(harness.phase(), SessionPhase::Setup);
    assert_contains(&harness.render(), "Start Quiz");
}

#[tokio::test(flavor = "current_thread")]
async fn overloaded_service_shows_banner_above_form() {
    let mut harness = ViewHarness::new(Arc::new(CannedGenerator(Err(
        GenerationError::from_upstream_message("503 overloaded"),
    ))));

    harness.start("Science", "xy");
    harness.drive_async().await;

    assert_eq!(harness.phase(), SessionPhase::Error);
    let html = harness.render();
    assert_contains(&html, "AI Service Busy");
    assert_contains(
        &html,
        "The AI service is currently busy or unavailable. Please wait a moment and try again.",
    );
    assert_contains(&html, "Start Quiz");
}

#[tokio::test(flavor = "current_thread")]
async fn retry_after_empty_result_stays_in_error() {
    let mut failing =
        ViewHarness::new(Arc::new(CannedGenerator(Err(GenerationError::EmptyResult))));
    failing.start("Art", "Cubism");
    failing.drive_async().await;
    assert_contains(&failing.render(), "No Questions Generated");

    failing.start("Art", "Cubism");
    failing.drive_async().await;
    assert_eq!(failing.phase(), SessionPhase::Error);
}

#[tokio::test(flavor = "current_thread")]
async fn play_again_while_loading_returns_to_setup() {
    let mut harness = ViewHarness::new(Arc::new(PendingGenerator));

    harness.start("History", "Rome");
    harness.drive_async().await;
    assert_eq!(harness.phase(), SessionPhase::Loading);

    harness.dispatch(QuizIntent::PlayAgain);
    harness.drive_async().await;

    assert_eq!(harness.phase(), SessionPhase::Setup);
    let html = harness.render();
    assert_contains(&html, "Start Quiz");
    assert!(!html.contains("Generating Quiz..."));
}
