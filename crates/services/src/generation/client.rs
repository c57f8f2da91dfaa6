use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::QuizModel;
use super::prompt::QuizPrompt;
use crate::error::ModelError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Clone, Debug)]
pub struct QuizGenConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
}

impl QuizGenConfig {
    /// Config with defaults for everything but the key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Read `QUIZIFY_AI_*` variables. Returns `None` when no usable API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("QUIZIFY_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("QUIZIFY_AI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("QUIZIFY_AI_MODEL") {
            config.model = model;
        }
        if let Some(secs) = env::var("QUIZIFY_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(temperature) = env::var("QUIZIFY_AI_TEMPERATURE")
            .ok()
            .and_then(|value| value.parse::<f32>().ok())
        {
            config.temperature = temperature;
        }
        Some(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// `QuizModel` backed by an OpenAI-compatible chat-completions endpoint in JSON mode.
#[derive(Clone)]
pub struct OpenAiQuizModel {
    client: Client,
    config: Option<QuizGenConfig>,
}

impl OpenAiQuizModel {
    /// # Errors
    ///
    /// See [`OpenAiQuizModel::new`].
    pub fn from_env() -> Result<Self, ModelError> {
        Self::new(QuizGenConfig::from_env())
    }

    /// A `None` config yields a disabled model whose calls fail with `ModelError::Disabled`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Http` if the HTTP client cannot be built with the configured
    /// timeout.
    pub fn new(config: Option<QuizGenConfig>) -> Result<Self, ModelError> {
        let mut builder = Client::builder();
        if let Some(config) = config.as_ref() {
            builder = builder.timeout(config.timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.config.as_ref().map(|config| config.model.as_str())
    }
}

#[async_trait]
impl QuizModel for OpenAiQuizModel {
    async fn complete(&self, prompt: &QuizPrompt) -> Result<String, ModelError> {
        let config = self.config.as_ref().ok_or(ModelError::Disabled)?;

        let payload = ChatRequest::for_prompt(config, prompt);
        debug!(model = %config.model, "sending chat completion request");

        let response = self
            .client
            .post(config.completions_url())
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        body.into_content()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

impl ChatRequest {
    fn for_prompt(config: &QuizGenConfig, prompt: &QuizPrompt) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.user().to_string(),
                },
            ],
            temperature: config.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl ChatResponse {
    fn into_content(self) -> Result<String, ModelError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ModelError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
