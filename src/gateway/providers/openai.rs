//! OpenAI-compatible gateway using the Chat Completions API.
//!
//! Each exchange is context-free: the request carries exactly one user
//! message and no prior turns. Only the first returned choice is consumed.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::gateway::{CompletionGateway, CompletionRequest, GatewayError};

// ============================================================================
// Chat Completions API Types
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

/// The request body for the Chat Completions endpoint.
#[derive(Serialize, Debug)]
struct ChatCompletionRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

// ============================================================================
// Gateway Implementation
// ============================================================================

pub struct OpenAiGateway {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiGateway {
    /// Creates a new gateway against an OpenAI-style API.
    ///
    /// # Arguments
    /// * `api_key` - bearer credential
    /// * `model` - completion model identifier
    /// * `base_url` - optional custom base URL (defaults to OpenAI's API)
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url
                .unwrap_or_else(|| crate::core::config::DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            max_tokens: request.max_tokens,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt.to_string(),
            }],
        };

        info!(
            "chat completion request: model={}, max_tokens={}, prompt_len={}",
            self.model,
            request.max_tokens,
            request.prompt.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        debug!("chat completion response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("chat completion API error: {} - {}", status, message);
            return Err(GatewayError::Api { status, message });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        // First choice only; anything further the API returned is discarded.
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Parse("response carried no choices".to_string()))?;

        debug!(
            "chat completion finished: finish_reason={:?}, reply_len={}",
            choice.finish_reason,
            choice.message.content.len()
        );
        Ok(choice.message.content)
    }
}
