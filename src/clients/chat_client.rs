use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::ChatMessage,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the conversation to `model` and returns the content of the
    /// first completion choice.
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    fn into_first_content(self) -> AppResult<String> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::UpstreamError("chat completion returned no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| {
                AppError::UpstreamError("chat completion choice has no message content".to_string())
            })
    }
}

/// Mistral chat completions client (OpenAI-compatible wire format).
pub struct MistralChatClient {
    client: Client,
    api_url: String,
    api_key: SecretString,
}

impl MistralChatClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build chat client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.chat_api_url.clone(),
            api_key: config.mistral_api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatClient for MistralChatClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> AppResult<String> {
        let request = CompletionRequest { model, messages };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::info!("Chat API status: {}", status);
        log::debug!("Chat API response: {}", body);

        if !status.is_success() {
            return Err(AppError::UpstreamError(format!(
                "chat completion returned {}: {}",
                status, body
            )));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        parsed.into_first_content()
    }
}
