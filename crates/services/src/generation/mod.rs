mod classify;
mod client;
mod prompt;
mod service;
mod validate;

use async_trait::async_trait;

use quizify_core::model::{Quiz, QuizRequest};

use crate::error::{GenerationError, ModelError};

pub use classify::{UpstreamFailure, classify_upstream_failure};
pub use client::{OpenAiQuizModel, QuizGenConfig};
pub use prompt::QuizPrompt;
pub use service::QuizGenerationService;
pub use validate::{validate_quiz_output, validate_quiz_value};

/// Raw text completion from a generative model.
#[async_trait]
pub trait QuizModel: Send + Sync {
    async fn complete(&self, prompt: &QuizPrompt) -> Result<String, ModelError>;
}

/// Produces a validated quiz for a request.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, request: &QuizRequest) -> Result<Quiz, GenerationError>;
}
