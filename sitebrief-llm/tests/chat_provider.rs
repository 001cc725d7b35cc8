mod common;

use std::time::Duration;

use serde_json::json;
use sitebrief_llm::chat::ChatCompletionProvider;
use sitebrief_llm::traits::SummaryProvider;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gpt-4o-mini";

fn provider_for(server: &MockServer) -> ChatCompletionProvider {
    ChatCompletionProvider::new(
        "sk-test".to_string(),
        MODEL.to_string(),
        &server.uri(),
        Duration::from_secs(5),
    )
    .expect("valid mock endpoint")
}

#[tokio::test]
async fn returns_first_choice_message_content() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": MODEL})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "# Summary\nA site."}},
                {"message": {"role": "assistant", "content": "ignored second choice"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let summary = provider
        .summarize("Home", "Hello")
        .await
        .expect("summary should succeed");

    assert_eq!(summary, "# Summary\nA site.");
}

#[tokio::test]
async fn sends_system_and_user_messages() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    // The request must carry the fixed system instruction first and the
    // title-bearing user message second.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system"},
                {"role": "user"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    provider
        .summarize("Release Notes", "v2 shipped")
        .await
        .expect("summary should succeed");
}

#[tokio::test]
async fn endpoint_without_trailing_slash_keeps_its_path() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    // "<base>/v1" without a trailing slash must still resolve requests to
    // "<base>/v1/chat/completions", not "<base>/chat/completions".
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = ChatCompletionProvider::new(
        "sk-test".to_string(),
        MODEL.to_string(),
        &format!("{}/v1", server.uri()),
        Duration::from_secs(5),
    )
    .expect("valid endpoint");

    provider
        .summarize("Home", "Hello")
        .await
        .expect("summary should succeed");
}

#[tokio::test]
async fn http_500_surfaces_status_and_raw_body() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .summarize("Home", "Hello")
        .await
        .expect_err("500 must fail");

    let msg = err.to_string();
    assert!(msg.contains("500"), "missing status in: {msg}");
    assert!(msg.contains("upstream exploded"), "missing body in: {msg}");
}

#[tokio::test]
async fn empty_choices_is_a_backend_error() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .summarize("Home", "Hello")
        .await
        .expect_err("no choices must fail");
    assert!(err.to_string().contains("no choices"));
}
