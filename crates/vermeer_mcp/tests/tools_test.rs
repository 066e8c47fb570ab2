mod support;

use serde_json::json;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use vermeer_core::VisionConfig;
use vermeer_mcp::tools::McpTool;
use vermeer_mcp::{GeneralImageTool, ToolRegistry, UiDiffTool, UiToArtifactTool};
use vermeer_vision::Analyzer;

fn analyzer_for(addr: SocketAddr, retry_count: &str) -> Analyzer {
    let base = format!("http://{}/v1", addr);
    let retries = retry_count.to_string();
    let config = VisionConfig::from_lookup(move |key| match key {
        "VISION_MCP_API_KEY" => Some("sk-test-abc".to_string()),
        "VISION_MCP_API_URL" => Some(base.clone()),
        "VISION_MCP_TIMEOUT" => Some("5000".to_string()),
        "VISION_MCP_RETRY_COUNT" => Some(retries.clone()),
        _ => None,
    })
    .unwrap();
    Analyzer::new(Arc::new(config))
}

/// An analyzer whose endpoint must never be contacted.
fn analyzer_offline() -> Analyzer {
    let config = VisionConfig::from_lookup(|key| match key {
        "VISION_MCP_API_KEY" => Some("sk-test-abc".to_string()),
        "VISION_MCP_API_URL" => Some("http://127.0.0.1:1/v1".to_string()),
        "VISION_MCP_RETRY_COUNT" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    Analyzer::new(Arc::new(config))
}

fn chat_reply(content: &str) -> Vec<u8> {
    let body = json!({
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string();
    support::http_response("200 OK", "application/json", body.as_bytes())
}

#[tokio::test]
async fn default_registry_exposes_all_seven_tools() {
    let registry = ToolRegistry::with_default_tools(analyzer_offline());
    assert_eq!(registry.len(), 7);

    let mut names: Vec<String> = registry
        .list()
        .iter()
        .map(|tool| tool.name().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "analyze_data_visualization",
            "analyze_image",
            "diagnose_error_screenshot",
            "extract_text_from_screenshot",
            "ui_diff_check",
            "ui_to_artifact",
            "understand_technical_diagram",
        ]
    );
}

#[tokio::test]
async fn registry_rejects_unknown_tool_names() {
    let registry = ToolRegistry::with_default_tools(analyzer_offline());
    let err = registry.execute("nonexistent_tool", json!({})).await.unwrap_err();
    assert_eq!(err.to_string(), "Tool not found: nonexistent_tool");
}

#[tokio::test]
async fn missing_parameters_produce_flagged_validation_replies() {
    let tool = GeneralImageTool::new(analyzer_offline());

    let reply = tool.execute(json!({ "prompt": "describe this" })).await;
    assert!(reply.is_error);
    assert_eq!(
        reply.content[0].text,
        "Error: Validation failed: Image source cannot be empty"
    );

    let reply = tool
        .execute(json!({ "image_source": "https://example.com/a.png" }))
        .await;
    assert!(reply.is_error);
    assert_eq!(
        reply.content[0].text,
        "Error: Validation failed: Prompt cannot be empty"
    );
}

#[tokio::test]
async fn whitespace_prompt_fails_before_any_io() {
    let tool = GeneralImageTool::new(analyzer_offline());
    let reply = tool
        .execute(json!({
            "image_source": "https://example.com/a.png",
            "prompt": "   "
        }))
        .await;
    assert!(reply.is_error);
    assert_eq!(
        reply.content[0].text,
        "Error: Unexpected error: Prompt is required for image analysis"
    );
}

#[tokio::test]
async fn missing_local_file_is_reported_in_band() {
    let tool = GeneralImageTool::new(analyzer_offline());
    let reply = tool
        .execute(json!({
            "image_source": "/no/such/dir/shot.png",
            "prompt": "describe this"
        }))
        .await;
    assert!(reply.is_error);
    assert_eq!(
        reply.content[0].text,
        "Error: Image file not found: /no/such/dir/shot.png"
    );
}

#[tokio::test]
async fn invalid_output_type_is_a_validation_error() {
    let tool = UiToArtifactTool::new(analyzer_offline());
    let reply = tool
        .execute(json!({
            "image_source": "https://example.com/ui.png",
            "output_type": "pdf",
            "prompt": "convert this"
        }))
        .await;
    assert!(reply.is_error);
    assert_eq!(
        reply.content[0].text,
        "Error: Validation error: Invalid output_type 'pdf'. Must be one of: code, prompt, spec, description"
    );
}

#[tokio::test]
async fn api_failures_stay_in_band_through_the_registry() {
    let addr = support::serve_once(support::http_response(
        "502 Bad Gateway",
        "application/json",
        br#"{"error":"upstream down"}"#,
    ))
    .await;

    let registry = ToolRegistry::with_default_tools(analyzer_for(addr, "0"));
    let reply = registry
        .execute(
            "analyze_image",
            json!({
                "image_source": "https://example.com/a.png",
                "prompt": "describe this"
            }),
        )
        .await
        .unwrap();

    assert!(reply.is_error);
    assert!(
        reply.content[0].text.starts_with("Error: Unexpected error:"),
        "{}",
        reply.content[0].text
    );
    assert!(reply.content[0].text.contains("HTTP 502"), "{}", reply.content[0].text);
}

#[tokio::test]
async fn general_analysis_succeeds_end_to_end_with_a_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("login.png");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"\x89PNG\r\n\x1a\nfakepixels")
        .unwrap();

    let addr = support::serve_once(chat_reply("The image shows a login form.")).await;
    let tool = GeneralImageTool::new(analyzer_for(addr, "0"));

    let reply = tool
        .execute(json!({
            "image_source": path.to_str().unwrap(),
            "prompt": "what is in this screenshot?"
        }))
        .await;

    assert!(!reply.is_error);
    assert_eq!(reply.content.len(), 1);
    assert_eq!(reply.content[0].text, "The image shows a login form.");
}

#[tokio::test]
async fn ui_diff_sends_both_images_in_order_with_the_positional_preamble() {
    let (addr, request) = support::serve_once_capture(chat_reply("The buttons differ.")).await;
    let tool = UiDiffTool::new(analyzer_for(addr, "0"));

    let reply = tool
        .execute(json!({
            "expected_image_source": "https://example.com/expected.png",
            "actual_image_source": "https://example.com/actual.png",
            "prompt": "compare the buttons"
        }))
        .await;
    assert!(!reply.is_error);

    let request = request.await.unwrap();
    assert!(request.contains("The first image is EXPECTED/REFERENCE design (the target)."));
    assert!(request.contains("The second image is ACTUAL/CURRENT implementation"));
    assert!(request.contains("compare the buttons"));

    let expected_at = request.find("https://example.com/expected.png").unwrap();
    let actual_at = request.find("https://example.com/actual.png").unwrap();
    assert!(expected_at < actual_at, "expected image must be sent first");
}

#[tokio::test]
async fn transient_api_failures_are_retried() {
    let addr = support::serve_sequence(vec![
        support::http_response(
            "500 Internal Server Error",
            "application/json",
            br#"{"error":"overloaded"}"#,
        ),
        chat_reply("Second attempt succeeded."),
    ])
    .await;

    let tool = GeneralImageTool::new(analyzer_for(addr, "1"));
    let reply = tool
        .execute(json!({
            "image_source": "https://example.com/a.png",
            "prompt": "describe this"
        }))
        .await;

    assert!(!reply.is_error, "{}", reply.content[0].text);
    assert_eq!(reply.content[0].text, "Second attempt succeeded.");
}
