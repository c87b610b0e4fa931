use std::fmt;

use async_trait::async_trait;

/// Errors that can occur during a completion exchange.
/// Every variant is non-fatal to the session: the caller reports and moves on.
#[derive(Debug)]
pub enum GatewayError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API returned a non-success status.
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GatewayError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Everything a gateway needs for one completion exchange.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    pub max_tokens: u32,
}

/// Boundary to the text-generation API: one request, one reply.
///
/// Implementations issue at most a single exchange per call. No retry, no
/// backoff, no timeout override beyond the transport's own.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Returns the name of the gateway.
    fn name(&self) -> &str;

    /// Performs one completion exchange and returns the first choice's text.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError>;
}
