mod support;

use std::net::SocketAddr;
use std::sync::Arc;
use vermeer_core::{ChatMessage, ImageContent, VisionConfig};
use vermeer_error::VermeerErrorKind;
use vermeer_vision::{Analyzer, ChatClient};

fn config_for(addr: SocketAddr, timeout_ms: &str) -> Arc<VisionConfig> {
    let base = format!("http://{}/v1", addr);
    let timeout = timeout_ms.to_string();
    Arc::new(
        VisionConfig::from_lookup(move |key| match key {
            "VISION_MCP_API_KEY" => Some("sk-test-abc".to_string()),
            "VISION_MCP_API_URL" => Some(base.clone()),
            "VISION_MCP_TIMEOUT" => Some(timeout.clone()),
            _ => None,
        })
        .unwrap(),
    )
}

fn sample_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a vision assistant."),
        ChatMessage::multimodal(
            &[ImageContent::inline("image/png", "aGVsbG8=")],
            "describe this",
        ),
    ]
}

#[tokio::test]
async fn send_returns_the_first_choice_content() {
    let body = br#"{"choices":[{"index":0,"message":{"role":"assistant","content":"It is a login form."},"finish_reason":"stop"}]}"#;
    let addr =
        support::serve_once(support::http_response("200 OK", "application/json", body)).await;

    let client = ChatClient::new(config_for(addr, "5000"));
    let reply = client.send(sample_messages()).await.unwrap();
    assert_eq!(reply, "It is a login form.");
}

#[tokio::test]
async fn non_2xx_status_is_an_api_error_with_status_and_body() {
    let addr = support::serve_once(support::http_response(
        "500 Internal Server Error",
        "application/json",
        br#"{"error":"model overloaded"}"#,
    ))
    .await;

    let client = ChatClient::new(config_for(addr, "5000"));
    let err = client.send(sample_messages()).await.unwrap_err();
    match err.kind() {
        VermeerErrorKind::Api(e) => {
            assert!(e.message.contains("HTTP 500"), "{}", e.message);
            assert!(e.message.contains("model overloaded"), "{}", e.message);
        }
        other => panic!("expected Api, got {other}"),
    }
}

#[tokio::test]
async fn missing_content_in_a_2xx_reply_is_an_api_error() {
    for body in [
        br#"{"choices":[]}"#.to_vec(),
        br#"{"choices":[{"message":{"role":"assistant","content":""}}]}"#.to_vec(),
        br#"{"choices":[{"message":{"role":"assistant"}}]}"#.to_vec(),
    ] {
        let addr =
            support::serve_once(support::http_response("200 OK", "application/json", &body))
                .await;
        let client = ChatClient::new(config_for(addr, "5000"));
        let err = client.send(sample_messages()).await.unwrap_err();
        match err.kind() {
            VermeerErrorKind::Api(e) => {
                assert!(e.message.contains("missing content"), "{}", e.message);
            }
            other => panic!("expected Api, got {other}"),
        }
    }
}

#[tokio::test]
async fn malformed_json_is_an_api_error() {
    let addr = support::serve_once(support::http_response(
        "200 OK",
        "application/json",
        b"not json at all",
    ))
    .await;
    let client = ChatClient::new(config_for(addr, "5000"));
    let err = client.send(sample_messages()).await.unwrap_err();
    assert!(matches!(err.kind(), VermeerErrorKind::Api(_)));
}

#[tokio::test]
async fn timeout_names_the_configured_limit_and_target_url() {
    let addr = support::serve_stalled().await;
    let client = ChatClient::new(config_for(addr, "300"));
    let err = client.send(sample_messages()).await.unwrap_err();
    match err.kind() {
        VermeerErrorKind::Api(e) => {
            assert!(e.message.contains("300ms"), "{}", e.message);
            assert!(e.message.contains(&addr.to_string()), "{}", e.message);
        }
        other => panic!("expected Api, got {other}"),
    }
}

#[tokio::test]
async fn connection_refused_names_the_target_url() {
    // Bind then drop to find a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ChatClient::new(config_for(addr, "5000"));
    let err = client.send(sample_messages()).await.unwrap_err();
    match err.kind() {
        VermeerErrorKind::Api(e) => {
            assert!(e.message.contains("Network error"), "{}", e.message);
            assert!(e.message.contains(&addr.to_string()), "{}", e.message);
        }
        other => panic!("expected Api, got {other}"),
    }
}

#[tokio::test]
async fn orchestrator_wraps_client_failures_with_the_tool_name() {
    let addr = support::serve_once(support::http_response(
        "503 Service Unavailable",
        "application/json",
        br#"{"error":"down"}"#,
    ))
    .await;

    let analyzer = Analyzer::new(config_for(addr, "5000"));
    let err = analyzer
        .run_analysis(
            "You are a vision assistant.",
            "describe this",
            &[ImageContent::url("https://example.com/a.png")],
            "analyze_image",
        )
        .await
        .unwrap_err();

    match err.kind() {
        VermeerErrorKind::ToolExecution(e) => {
            assert_eq!(e.tool_name, "analyze_image");
            assert!(e.message.starts_with("analyze_image analysis failed:"), "{}", e.message);
            assert!(matches!(e.cause(), Some(VermeerErrorKind::Api(_))));
        }
        other => panic!("expected ToolExecution, got {other}"),
    }
}
