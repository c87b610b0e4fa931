//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::{DEFAULT_BASE_URL, ResolvedConfig};
use crate::core::state::Session;
use crate::gateway::{CompletionGateway, CompletionRequest, GatewayError};

/// Replies with a fixed string, standing in for a live completion API.
pub struct StaticGateway {
    pub reply: String,
}

#[async_trait]
impl CompletionGateway for StaticGateway {
    fn name(&self) -> &str {
        "static"
    }

    async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        Ok(self.reply.clone())
    }
}

/// Always fails with a network error.
pub struct FailingGateway;

#[async_trait]
impl CompletionGateway for FailingGateway {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        Err(GatewayError::Network("connection refused".to_string()))
    }
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        api_key: None,
        model: "test-model".to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        max_tokens: 100,
    }
}

/// Creates a test Session wired to a StaticGateway replying "hi there".
pub fn test_session() -> Session {
    Session::new(
        Arc::new(StaticGateway { reply: "hi there".to_string() }),
        &test_config(),
    )
}
