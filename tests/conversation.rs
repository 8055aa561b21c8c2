//! Whole turns: session bookkeeping plus the client, the way the app drives them.

use rag_chat::config::ApiConfig;
use rag_chat::ui::projection;
use rag_chat::{ConversationSession, RagClient, ReasoningDepth, Role};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GREETING: &str = "Hello! How can I help you today?";

async fn run_turn(session: &mut ConversationSession, client: &RagClient, question: &str) {
    let request = session.begin_turn(question).expect("turn should start");
    let result = client
        .ask(&request.question, request.depth, &request.session_id)
        .await;
    session
        .complete_turn(&request.session_id, result)
        .expect("turn should complete");
}

fn client_for(server: &MockServer) -> RagClient {
    RagClient::new(&ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn transcript_grows_by_two_per_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "An answer.",
            "sources": "- cv.pdf",
            "score": 75,
            "confidence": "medium"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = ConversationSession::new(GREETING, ReasoningDepth::default());

    for n in 1..=3 {
        run_turn(&mut session, &client, &format!("question {n}")).await;
        assert_eq!(session.transcript().len(), 1 + 2 * n);
        assert!(!session.is_waiting());
    }

    let messages = session.transcript().all();
    assert_eq!(projection::sources_indices(messages), [2, 4, 6]);
}

#[tokio::test]
async fn reset_after_turns_leaves_greeting_and_new_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "ok"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = ConversationSession::new(GREETING, ReasoningDepth::default());
    run_turn(&mut session, &client, "first").await;
    run_turn(&mut session, &client, "second").await;

    let before = session.id().clone();
    session.reset();

    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.transcript().all()[0].content, GREETING);
    assert_ne!(session.id(), &before);
}

#[tokio::test]
async fn server_failure_still_lands_in_transcript_without_sources() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = ConversationSession::new(GREETING, ReasoningDepth::default());
    run_turn(&mut session, &client, "are you up?").await;

    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.content.contains("503"));

    let views = projection::project(session.transcript().all());
    assert!(views.iter().all(|v| v.details.is_none()));
}

#[tokio::test]
async fn stringified_none_sources_render_without_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "No documents matched.",
            "sources": "None",
            "score": 10,
            "confidence": "low"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = ConversationSession::new(GREETING, ReasoningDepth::default());
    run_turn(&mut session, &client, "anything on mars?").await;

    let views = projection::project(session.transcript().all());
    assert_eq!(views.len(), 3);
    assert!(views[2].details.is_none());
}
