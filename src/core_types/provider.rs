//! Provider contract and completion types
//!
//! Defines the `CompletionProvider` trait that the generation flow depends on,
//! along with the result it produces. Concrete HTTP bindings live in
//! [`crate::providers`].

use crate::config::GenerationParams;
use crate::core_types::messages::ChatMessage;
use crate::error::OutlineResult;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Token usage information reported by the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used (prompt + completion)
    pub total_tokens: u32,
}

/// Text of one completion, plus what the provider told us about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Content of the first choice, verbatim
    pub text: String,
    /// Model that generated the response
    pub model: Option<String>,
    /// Token usage information
    pub usage: Option<TokenUsage>,
    /// When the response was received
    pub generated_at: DateTime<Utc>,
}

impl CompletionResult {
    /// Wrap provider text with no metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
            usage: None,
            generated_at: Utc::now(),
        }
    }
}

/// Capability contract for a chat-completion backend
///
/// Implementations perform exactly one request per call: no retry, no
/// caching. Connection parameters are passed on every call; providers hold no
/// credentials of their own.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `messages` to the chat-completion endpoint under `endpoint` and
    /// return the first choice's text.
    ///
    /// # Errors
    ///
    /// - Transport errors (`TransportFailed`, `Timeout`) when no response arrives
    /// - Provider errors (`AuthenticationFailed`, `RateLimitExceeded`,
    ///   `ProviderRejected`, `MalformedResponse`) when the response is unusable
    async fn generate(
        &self,
        endpoint: &Url,
        api_key: &str,
        model_id: &str,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> OutlineResult<CompletionResult>;

    /// Get provider name for logging and debugging
    fn provider_name(&self) -> &'static str;
}
