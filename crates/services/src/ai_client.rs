use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AiClientError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a neutral mentor for traders. Produce a motivating yet \
realistic summary under 300 words. Avoid hype, avoid financial-advice phrasing, and highlight \
clear direction plus pitfalls.";

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl AiConfig {
    /// Read the AI endpoint configuration from the environment.
    ///
    /// Returns `None` when `PATHBUILDER_AI_API_KEY` is unset or blank, which
    /// leaves the client disabled.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("PATHBUILDER_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("PATHBUILDER_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("PATHBUILDER_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let temperature = clamp_temperature(
            env::var("PATHBUILDER_AI_TEMPERATURE")
                .ok()
                .and_then(|value| value.parse().ok()),
        );
        let max_output_tokens = clamp_max_output_tokens(
            env::var("PATHBUILDER_AI_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|value| value.parse().ok()),
        );

        Some(Self {
            base_url,
            api_key,
            model,
            temperature,
            max_output_tokens,
        })
    }
}

// The knobs accept overrides but stay inside a narrow band that keeps the
// mentor tone stable.
fn clamp_temperature(raw: Option<f32>) -> f32 {
    raw.filter(|value| value.is_finite())
        .unwrap_or(0.7)
        .clamp(0.6, 0.8)
}

fn clamp_max_output_tokens(raw: Option<u32>) -> u32 {
    raw.unwrap_or(500).clamp(100, 900)
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    config: Option<AiConfig>,
}

impl AiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Generate text from a prompt.
    ///
    /// # Errors
    ///
    /// Returns `AiClientError` when the client is disabled, the request
    /// fails, or the completion comes back empty.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiClientError> {
        let config = self.config.as_ref().ok_or(AiClientError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_output_tokens,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiClientError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AiClientError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
