use gemini_client::{Config, GeminiClient, GenerationClient, GenerationError};
use secrecy::SecretString;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    let cfg = Config::new(Some(SecretString::new("tok".into())))
        .with_base_url(server.uri())
        .with_model("gemini-test");
    GeminiClient::new(cfg).expect("client")
}

#[tokio::test]
async fn generate_posts_prompt_with_key_and_aggregates_text() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "candidates": [
            {
                "content": {"parts": [{"text": "```json\n{\"poses\":[]}"}, {"text": "```"}]},
                "safetyRatings": [{"category": "HARM_CATEGORY_HARASSMENT", "probability": "NEGLIGIBLE"}]
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "tok"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "contents": [{"parts": [{"text": "make a plan"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client.generate("make a plan").await.expect("text");
    assert_eq!(text, "```json\n{\"poses\":[]}\n```");
}

#[tokio::test]
async fn non_success_status_is_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.generate("prompt").await {
        Err(GenerationError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_payload_with_success_status_is_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Upstream(_)));
}

#[tokio::test]
async fn empty_body_is_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyBody));
}

#[tokio::test]
async fn non_json_body_is_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Decode(_)));
}

#[tokio::test]
async fn missing_key_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let cfg = Config::new(None).with_base_url(server.uri());
    let client = GeminiClient::new(cfg).expect("client");
    let err = client.generate("prompt").await.unwrap_err();
    assert!(err.is_config());

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn slow_upstream_hits_read_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(serde_json::json!({
                    "candidates": [{"content": {"parts": [{"text": "late"}]}}]
                })),
        )
        .mount(&server)
        .await;

    let cfg = Config::new(Some(SecretString::new("tok".into())))
        .with_base_url(server.uri())
        .with_model("gemini-test")
        .with_timeouts(Duration::from_secs(1), Duration::from_millis(200));
    let client = GeminiClient::new(cfg).expect("client");
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Http(_)));
    assert!(!err.to_string().contains("key="));
}

#[tokio::test]
async fn transport_error_text_never_contains_api_key() {
    let key = "gm-private-key-7731";
    let cfg = Config::new(Some(SecretString::new(key.into())))
        .with_base_url("http://127.0.0.1:1")
        .with_timeouts(Duration::from_millis(500), Duration::from_millis(500));
    let client = GeminiClient::new(cfg).expect("client");
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Http(_)));
    assert!(!err.to_string().contains(key), "display leaked key: {err}");
    assert!(!format!("{err:?}").contains(key), "debug leaked key");
}

#[tokio::test]
async fn unreachable_host_is_no_result() {
    let cfg = Config::new(Some(SecretString::new("tok".into())))
        .with_base_url("http://127.0.0.1:1")
        .with_timeouts(Duration::from_millis(500), Duration::from_millis(500));
    let client = GeminiClient::new(cfg).expect("client");
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Http(_)));
}
