use std::sync::Arc;

use services::{Clock, QuizGenerator};

pub trait UiApp: Send + Sync {
    fn quiz_generator(&self) -> Arc<dyn QuizGenerator>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_generator: Arc<dyn QuizGenerator>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_generator: app.quiz_generator(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn quiz_generator(&self) -> Arc<dyn QuizGenerator> {
        Arc::clone(&self.quiz_generator)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
