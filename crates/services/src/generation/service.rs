use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use quizify_core::model::{Quiz, QuizRequest};

use super::client::OpenAiQuizModel;
use super::prompt::QuizPrompt;
use super::validate::validate_quiz_output;
use super::{QuizGenerator, QuizModel};
use crate::error::{GenerationError, ModelError};

/// Prompt → model → validator pipeline. Holds no state between calls and never retries.
#[derive(Clone)]
pub struct QuizGenerationService {
    model: Arc<dyn QuizModel>,
}

impl QuizGenerationService {
    #[must_use]
    pub fn new(model: Arc<dyn QuizModel>) -> Self {
        Self { model }
    }

    /// Service backed by `OpenAiQuizModel::from_env`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ModelError> {
        Ok(Self::new(Arc::new(OpenAiQuizModel::from_env()?)))
    }
}

#[async_trait]
impl QuizGenerator for QuizGenerationService {
    /// Generate and validate a quiz.
    ///
    /// # Errors
    ///
    /// Returns a classified `GenerationError`; see `GenerationErrorKind`.
    async fn generate(&self, request: &QuizRequest) -> Result<Quiz, GenerationError> {
        let prompt = QuizPrompt::for_request(request);
        info!(field = request.field(), topic = request.topic(), "generating quiz");

        let raw = match self.model.complete(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                let err = GenerationError::from(err);
                warn!(kind = ?err.kind(), error = %err, "quiz model call failed");
                return Err(err);
            }
        };

        match validate_quiz_output(&raw) {
            Ok(quiz) => {
                info!(questions = quiz.len(), "quiz generated");
                Ok(quiz)
            }
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "quiz output rejected");
                Err(err)
            }
        }
    }
}
