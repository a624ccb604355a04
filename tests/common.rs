//! Test helper utilities for interview-outline integration tests
//!
//! This module provides reusable fixtures for running the DeepSeek provider
//! against a wiremock server.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use interview_outline::{
    ConnectionSettings, DeepSeekProvider, InterviewRequest, ModelId, OutlineForm,
};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-test-key";

/// Outline text returned by the mock server, with the whitespace a model
/// typically produces
pub const SAMPLE_OUTLINE: &str = "# 张三 · 团队管理访谈提纲\n\n\
## 一、访谈目标（对齐）\n- 目标拆解：8人扩到20人  \n- 预期成果：带教 SOP\n\n\
## 二、时间分配（总时长 60 分钟可调）\n| 环节 | 时长 |\n|---|---|\n| 导入 | 5 分钟 |\n\n\
## 三、关键场景深挖\n| 场景 | 触发条件 |\n|---|---|\n| 新人入职 | 【待补】 |\n\n\
## 四、主持人提示语\n- 您提到带教 SOP，这非常关键。\n\n\
## 五、风险与红旗\n| 风险 | 对策 |\n|---|---|\n| 只谈个例 | 追问SOP |\n\n\
## 六、缺失证据清单\n1. 【待补】流失率口径\n";

/// Create a provider with a short transport timeout for mock-server tests
pub fn create_test_provider() -> DeepSeekProvider {
    create_test_provider_with_timeout(Duration::from_secs(5))
}

pub fn create_test_provider_with_timeout(timeout: Duration) -> DeepSeekProvider {
    DeepSeekProvider::new(timeout).expect("Failed to create test DeepSeek provider")
}

/// Connection settings pointing at the mock server
pub fn create_test_settings(base_url: &str) -> ConnectionSettings {
    ConnectionSettings::new(TEST_API_KEY, base_url)
}

/// The sample interview from the default form
pub fn create_test_request() -> InterviewRequest {
    InterviewRequest::new(
        "张三",
        "店东",
        "团队管理",
        "半年内从8人扩到20人且流失率<10%",
        "商圈经理/课程研发",
        ModelId::DeepseekChat,
    )
}

/// Default form filled with the test key and pointing at `base_url`
pub fn create_test_form(base_url: &str) -> OutlineForm {
    OutlineForm {
        api_key: TEST_API_KEY.to_string(),
        base_url: base_url.to_string(),
        ..OutlineForm::default()
    }
}

// ============================================================================
// Mock Response Helpers (for wiremock)
// ============================================================================

/// Create a successful chat-completion response carrying `content`
pub fn create_completion_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 812,
            "completion_tokens": 1430,
            "total_tokens": 2242
        }
    })
}

/// Create an OpenAI-style error response template
pub fn create_error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "error": {
            "message": message,
            "type": "invalid_request_error"
        }
    }))
}

/// Mount a chat-completion mock answering with `template`
pub async fn mount_completion(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Parse the JSON body of the only request the server received
pub async fn single_request_body(server: &MockServer) -> serde_json::Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one provider call");
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}
