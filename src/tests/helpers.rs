// Test helper utilities for interview-outline unit tests
//
// IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::{GenerationParams, ModelId};
use crate::core_types::messages::ChatMessage;
use crate::core_types::provider::{CompletionProvider, CompletionResult};
use crate::error::OutlineResult;
use crate::form::OutlineForm;
use crate::prompt::InterviewRequest;
use mockall::mock;
use reqwest::Url;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

mock! {
    pub Provider {}

    #[async_trait::async_trait]
    impl CompletionProvider for Provider {
        async fn generate(
            &self,
            endpoint: &Url,
            api_key: &str,
            model_id: &str,
            messages: &[ChatMessage],
            params: &GenerationParams,
        ) -> OutlineResult<CompletionResult>;

        fn provider_name(&self) -> &'static str;
    }
}

/// Mock provider that must never be called
pub fn never_called_provider() -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_provider_name().return_const("mock");
    provider.expect_generate().never();
    provider
}

/// Mock provider answering every call with `text`
pub fn answering_provider(text: &'static str) -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_provider_name().return_const("mock");
    provider
        .expect_generate()
        .returning(move |_, _, _, _, _| Ok(CompletionResult::new(text)));
    provider
}

/// The interview used throughout the examples
pub fn sample_request() -> InterviewRequest {
    InterviewRequest::new(
        "张三",
        "店东",
        "团队管理",
        "半年内从8人扩到20人且流失率<10%",
        "商圈经理/课程研发",
        ModelId::DeepseekChat,
    )
}

pub fn empty_request() -> InterviewRequest {
    InterviewRequest::new("", "", "", "", "", ModelId::DeepseekReasoner)
}

/// Default form with a usable key
pub fn filled_form() -> OutlineForm {
    OutlineForm {
        api_key: "test-key".to_string(),
        ..OutlineForm::default()
    }
}

/// An outline that contains every required section
pub fn complete_outline() -> String {
    crate::prompt::SECTION_HEADERS
        .iter()
        .map(|header| format!("{header}\n- 【待补】\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Provider that blocks until the test opens the gate
pub struct GatedProvider {
    pub gate: Arc<Notify>,
    pub calls: Arc<AtomicUsize>,
}

impl GatedProvider {
    pub fn new() -> (Self, Arc<Notify>, Arc<AtomicUsize>) {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                gate: gate.clone(),
                calls: calls.clone(),
            },
            gate,
            calls,
        )
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GatedProvider {
    async fn generate(
        &self,
        _endpoint: &Url,
        _api_key: &str,
        _model_id: &str,
        _messages: &[ChatMessage],
        _params: &GenerationParams,
    ) -> OutlineResult<CompletionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(CompletionResult::new("## 一、访谈目标（对齐）"))
    }

    fn provider_name(&self) -> &'static str {
        "gated"
    }
}
