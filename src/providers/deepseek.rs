//! DeepSeek provider implementation
//!
//! DeepSeek speaks the OpenAI chat-completion schema, so this provider is a
//! thin binding over the shared OpenAI-compatible client.

use super::openai_shared::{
    build_chat_request, chat_completions_url, http::OpenAICompatibleClient, OpenAIResponse,
};
use crate::config::{GenerationParams, DEFAULT_REQUEST_TIMEOUT};
use crate::core_types::messages::ChatMessage;
use crate::core_types::provider::{CompletionProvider, CompletionResult};
use crate::error::{OutlineError, OutlineResult};
use crate::logging::{log_debug, log_info};
use chrono::Utc;
use reqwest::Url;
use std::time::{Duration, Instant};

/// DeepSeek provider implementation
#[derive(Debug, Clone)]
pub struct DeepSeekProvider {
    http_client: OpenAICompatibleClient,
}

impl DeepSeekProvider {
    /// Create a provider whose calls time out after `request_timeout`
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::ConfigurationError`] if the HTTP client
    /// cannot be initialized.
    pub fn new(request_timeout: Duration) -> OutlineResult<Self> {
        log_debug!(
            provider = "deepseek",
            request_timeout_secs = request_timeout.as_secs(),
            "Creating DeepSeek provider"
        );

        Ok(Self {
            http_client: OpenAICompatibleClient::new(request_timeout)?,
        })
    }

    /// Create a provider with the default 120s transport timeout
    pub fn with_default_timeout() -> OutlineResult<Self> {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Turn the provider response into a completion: first choice, verbatim.
    pub(crate) fn parse_response(response: OpenAIResponse) -> OutlineResult<CompletionResult> {
        let usage = response.usage.map(Into::into);
        let model = response.model;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OutlineError::malformed_response("No choices in provider response"))?;

        let text = choice.message.content.ok_or_else(|| {
            OutlineError::malformed_response("First choice carries no message content")
        })?;

        Ok(CompletionResult {
            text,
            model,
            usage,
            generated_at: Utc::now(),
        })
    }
}

#[async_trait::async_trait]
impl CompletionProvider for DeepSeekProvider {
    async fn generate(
        &self,
        endpoint: &Url,
        api_key: &str,
        model_id: &str,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> OutlineResult<CompletionResult> {
        let url = chat_completions_url(endpoint)?;
        let headers = OpenAICompatibleClient::build_auth_headers(api_key)?;
        let request = build_chat_request(model_id, messages, params);

        let start_time = Instant::now();
        let api_response = self
            .http_client
            .execute_chat_request(&url, &headers, &request)
            .await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        let result = Self::parse_response(api_response)?;

        log_info!(
            provider = "deepseek",
            model = %model_id,
            duration_ms = duration_ms,
            output_chars = result.text.chars().count(),
            total_tokens = result.usage.map(|u| u.total_tokens),
            "Chat completion received"
        );

        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "deepseek"
    }
}
