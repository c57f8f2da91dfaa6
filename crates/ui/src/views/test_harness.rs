use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quizify_core::model::{Quiz, QuizQuestion, QuizRequest};
use quizify_core::time::fixed_now;
use services::{Clock, GenerationError, QuizGenerator, SessionPhase};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::{QuizIntent, QuizTestHandles};

/// Generator that answers every request with the same result.
pub struct CannedGenerator(pub Result<Quiz, GenerationError>);

#[async_trait]
impl QuizGenerator for CannedGenerator {
    async fn generate(&self, _request: &QuizRequest) -> Result<Quiz, GenerationError> {
        self.0.clone()
    }
}

/// Generator that never resolves, leaving the session in `Loading`.
pub struct PendingGenerator;

#[async_trait]
impl QuizGenerator for PendingGenerator {
    async fn generate(&self, _request: &QuizRequest) -> Result<Quiz, GenerationError> {
        std::future::pending().await
    }
}

/// Ten questions whose correct answer is always the first option.
pub fn sample_quiz() -> Quiz {
    let questions = (1..=10)
        .map(|n| {
            QuizQuestion::new(
                format!("History question {n}"),
                vec![format!("right {n}"), format!("wrong {n}")],
                format!("right {n}"),
            )
            .expect("valid question")
        })
        .collect();
    Quiz::new(questions).expect("ten questions")
}

struct TestApp {
    generator: Arc<dyn QuizGenerator>,
}

impl UiApp for TestApp {
    fn quiz_generator(&self) -> Arc<dyn QuizGenerator> {
        Arc::clone(&self.generator)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn new(generator: Arc<dyn QuizGenerator>) -> Self {
        let handles = QuizTestHandles::default();
        let mut dom = VirtualDom::new_with_props(
            QuizHarness,
            QuizHarnessProps {
                app: Arc::new(TestApp { generator }),
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, handles }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn start(&mut self, field: &str, topic: &str) {
        self.dispatch(QuizIntent::Start {
            field: field.to_string(),
            topic: topic.to_string(),
        });
    }

    pub fn phase(&self) -> SessionPhase {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().phase())
    }

    /// Correct answer for the question currently on screen.
    pub fn current_answer(&self) -> String {
        let session = self.handles.session();
        self.dom.in_runtime(|| {
            session
                .peek()
                .state()
                .active()
                .map(|active| active.current_question().answer().to_string())
                .expect("active quiz")
        })
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
