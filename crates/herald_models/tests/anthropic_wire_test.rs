//! Tests for the Anthropic wire format and the driver boundary.

use herald_core::{GenerateRequest, GenerateResponse, Output};
use herald_error::{GenerationErrorKind, HeraldResult};
use herald_models::{AnthropicClient, AnthropicRequest, AnthropicResponse, GenerationDriver};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_request_body_shape() -> anyhow::Result<()> {
    let request = GenerateRequest::builder()
        .model("claude-haiku-4-5-20251001")
        .prompt("최근 10회차 당첨번호:")
        .build()?;

    let body = serde_json::to_value(AnthropicRequest::from(&request))?;
    assert_eq!(body["model"], "claude-haiku-4-5-20251001");
    assert_eq!(body["max_tokens"], 4000);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "최근 10회차 당첨번호:");
    Ok(())
}

#[test]
fn test_text_response_converts_to_text_output() -> anyhow::Result<()> {
    let raw = r###"{
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-haiku-4-5-20251001",
        "content": [{"type": "text", "text": "## 1100회 분석"}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 20}
    }"###;
    let response: AnthropicResponse = serde_json::from_str(raw)?;
    let response: GenerateResponse = response.into();

    assert_eq!(response.outputs, vec![Output::Text("## 1100회 분석".to_string())]);
    assert_eq!(response.into_text()?, "## 1100회 분석");
    Ok(())
}

#[test]
fn test_non_text_first_block_is_rejected() -> anyhow::Result<()> {
    let raw = r#"{
        "id": "msg_02",
        "content": [{"type": "tool_use", "id": "t1", "name": "lookup", "input": {}}]
    }"#;
    let response: GenerateResponse = serde_json::from_str::<AnthropicResponse>(raw)?.into();

    let err = response.into_text().unwrap_err();
    assert_eq!(
        err.kind,
        GenerationErrorKind::UnexpectedContentType("tool_use".to_string())
    );
    Ok(())
}

#[test]
fn test_empty_content_is_rejected() -> anyhow::Result<()> {
    let response: GenerateResponse =
        serde_json::from_str::<AnthropicResponse>(r#"{"id": "msg_03", "content": []}"#)?.into();

    assert_eq!(response.into_text().unwrap_err().kind, GenerationErrorKind::MissingContent);
    Ok(())
}

#[test]
fn test_debug_output_redacts_key() {
    let client = AnthropicClient::new("sk-ant-secret", "http://localhost");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("sk-ant-secret"));
    assert!(rendered.contains("REDACTED"));
}

/// Driver returning canned text and counting calls.
struct MockDriver {
    text: String,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> HeraldResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GenerateResponse::text(self.text.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[tokio::test]
async fn test_driver_is_object_safe() -> anyhow::Result<()> {
    let mock = MockDriver {
        text: "## 본문".to_string(),
        calls: AtomicUsize::new(0),
    };
    let driver: &dyn GenerationDriver = &mock;

    let request = GenerateRequest::builder()
        .model("m")
        .prompt("p")
        .build()?;
    let text = driver.generate(&request).await?.into_text()?;

    assert_eq!(text, "## 본문");
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
    Ok(())
}
