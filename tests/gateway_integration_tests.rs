use artchat::gateway::{
    CompletionGateway, CompletionRequest, GatewayError, OfflineGateway, OpenAiGateway,
    PLACEHOLDER_ART,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn request(prompt: &str) -> CompletionRequest<'_> {
    CompletionRequest { prompt, max_tokens: 100 }
}

fn choices_body(contents: &[&str]) -> serde_json::Value {
    json!({
        "choices": contents
            .iter()
            .map(|c| json!({
                "message": {"role": "assistant", "content": c},
                "finish_reason": "stop"
            }))
            .collect::<Vec<_>>()
    })
}

fn mock_gateway(server: &MockServer) -> OpenAiGateway {
    OpenAiGateway::new(
        "test-key".to_string(),
        "test-model".to_string(),
        Some(server.uri()),
    )
}

// ============================================================================
// OpenAI Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_openai_returns_first_choice_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body(&["hi there"])))
        .mount(&mock_server)
        .await;

    let gateway = mock_gateway(&mock_server);
    let result = gateway.complete(request("hello")).await;

    assert_eq!(result.unwrap(), "hi there");
}

#[tokio::test]
async fn test_openai_discards_additional_choices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(choices_body(&["first", "second", "third"])),
        )
        .mount(&mock_server)
        .await;

    let gateway = mock_gateway(&mock_server);
    let result = gateway.complete(request("hello")).await;

    assert_eq!(result.unwrap(), "first");
}

#[tokio::test]
async fn test_openai_sends_single_user_message_with_token_ceiling() {
    let mock_server = MockServer::start().await;

    // The request is context-free: exactly one user message, no prior turns.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "max_tokens": 42,
            "messages": [{"role": "user", "content": "draw me a cat"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(choices_body(&["ok"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = mock_gateway(&mock_server);
    let result = gateway
        .complete(CompletionRequest { prompt: "draw me a cat", max_tokens: 42 })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_openai_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let gateway = mock_gateway(&mock_server);
    let result = gateway.complete(request("hello")).await;

    assert!(matches!(result, Err(GatewayError::Api { status: 401, .. })));
}

#[tokio::test]
async fn test_openai_malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let gateway = mock_gateway(&mock_server);
    let result = gateway.complete(request("hello")).await;

    assert!(matches!(result, Err(GatewayError::Parse(_))));
}

#[tokio::test]
async fn test_openai_empty_choices_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let gateway = mock_gateway(&mock_server);
    let result = gateway.complete(request("hello")).await;

    assert!(matches!(result, Err(GatewayError::Parse(_))));
}

// ============================================================================
// Offline Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_offline_gateway_is_deterministic() {
    let gateway = OfflineGateway;

    let first = gateway.complete(request("draw a dragon")).await.unwrap();
    let second = gateway.complete(request("anything else")).await.unwrap();

    assert_eq!(first, PLACEHOLDER_ART);
    assert_eq!(second, PLACEHOLDER_ART);
}
