//! The RAG client against a mock service.
//!
//! `ask` must never fail: every transport or server problem comes back as a
//! displayable answer with no sources.

use std::time::Duration;

use rag_chat::config::ApiConfig;
use rag_chat::{ApiHealth, QueryResult, RagClient, ReasoningDepth, new_session_id};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: client pointed at `base_url` with one-second timeouts.
fn client_for(base_url: &str) -> RagClient {
    RagClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        query_timeout_secs: 1,
        health_timeout_secs: 1,
        ..ApiConfig::default()
    })
    .expect("client should build")
}

/// Helper: an address nothing listens on.
fn dead_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn depth(value: u8) -> ReasoningDepth {
    ReasoningDepth::new(value).unwrap()
}

#[tokio::test]
async fn ask_returns_body_unmodified_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "X",
            "sources": null,
            "score": null,
            "confidence": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("Who?", depth(3), &new_session_id())
        .await;

    assert_eq!(
        result,
        QueryResult {
            answer: "X".to_string(),
            sources: None,
            score: None,
            confidence: None,
        }
    );
}

#[tokio::test]
async fn ask_passes_metadata_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "She built a RAG chatbot.",
            "sources": "- portfolio.pdf (p. 3)",
            "score": 91,
            "confidence": "high"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("Projects?", depth(2), &new_session_id())
        .await;

    assert_eq!(result.answer, "She built a RAG chatbot.");
    assert_eq!(result.sources.as_deref(), Some("- portfolio.pdf (p. 3)"));
    assert_eq!(result.score, Some(91.0));
    assert_eq!(result.confidence.as_deref(), Some("high"));
}

#[tokio::test]
async fn ask_sends_question_depth_and_session() {
    let server = MockServer::start().await;
    let session = new_session_id();

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({
            "question": "What are the main skills?",
            "max_iterations": 4,
            "session_id": session.as_str()
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Rust."})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("What are the main skills?", depth(4), &session)
        .await;

    assert_eq!(result.answer, "Rust.");
}

#[tokio::test]
async fn ask_reports_server_error_with_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("Hello?", depth(3), &new_session_id())
        .await;

    assert!(result.answer.contains("500"), "answer was {:?}", result.answer);
    assert_eq!(result.sources, None);
}

#[tokio::test]
async fn ask_reports_unreachable_server() {
    let result = client_for(&dead_address())
        .ask("Anyone there?", depth(3), &new_session_id())
        .await;

    assert!(!result.answer.is_empty());
    assert!(result.answer.contains("Unable to contact the server"));
    assert_eq!(result.sources, None);
}

#[tokio::test]
async fn ask_reports_timeout_as_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "too late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("Slow?", depth(5), &new_session_id())
        .await;

    assert!(result.answer.contains("unexpected error"), "answer was {:?}", result.answer);
    assert_eq!(result.sources, None);
}

#[tokio::test]
async fn ask_reports_malformed_body_as_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("Broken?", depth(1), &new_session_id())
        .await;

    assert!(result.answer.starts_with("⚠️ An unexpected error occurred:"));
    assert_eq!(result.sources, None);
}

#[tokio::test]
async fn ask_defaults_missing_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sources": null})))
        .mount(&server)
        .await;

    let result = client_for(&server.uri())
        .ask("Anything?", depth(3), &new_session_id())
        .await;

    assert_eq!(result.answer, "No answer provided.");
}

#[tokio::test]
async fn probe_health_connected_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client_for(&server.uri()).probe_health().await, ApiHealth::Connected);
}

#[tokio::test]
async fn probe_health_unstable_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server.uri()).probe_health().await, ApiHealth::Unstable);
}

#[tokio::test]
async fn probe_health_unreachable_on_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server.uri()).probe_health().await, ApiHealth::Unreachable);
}

#[tokio::test]
async fn probe_health_unreachable_without_server() {
    assert_eq!(client_for(&dead_address()).probe_health().await, ApiHealth::Unreachable);
}
