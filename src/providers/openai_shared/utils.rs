//! Request assembly and HTTP client for OpenAI-compatible providers

use super::types::*;
use crate::config::GenerationParams;
use crate::core_types::messages::ChatMessage;
use crate::error::{OutlineError, OutlineResult};
use crate::logging::{log_debug, log_error, log_warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;

/// Path appended to the base URL for chat completions
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Build the wire request for one completion call
pub fn build_chat_request(
    model_id: &str,
    messages: &[ChatMessage],
    params: &GenerationParams,
) -> OpenAIRequest {
    OpenAIRequest {
        model: model_id.to_string(),
        messages: messages.iter().map(OpenAIMessage::from).collect(),
        max_tokens: params.max_output_tokens,
        temperature: params.temperature,
        stream: false,
    }
}

/// Resolve `<base>/chat/completions`, keeping any path prefix such as `/v1`.
pub fn chat_completions_url(endpoint: &Url) -> OutlineResult<Url> {
    let mut base = endpoint.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CHAT_COMPLETIONS_PATH).map_err(|e| {
        OutlineError::configuration_error(format!(
            "Cannot build chat-completion URL from '{endpoint}': {e}"
        ))
    })
}

/// Pull a human-readable message out of an OpenAI-style error body
fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    json.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// HTTP client functionality for OpenAI-compatible providers
pub mod http {
    use super::*;
    use std::time::Duration;

    /// Shared HTTP client for OpenAI-compatible providers
    ///
    /// Sends exactly one request per call; there is no retry layer.
    #[derive(Debug, Clone)]
    pub struct OpenAICompatibleClient {
        client: reqwest::Client,
        request_timeout: Duration,
    }

    impl OpenAICompatibleClient {
        /// Create a client whose requests give up after `request_timeout`
        ///
        /// # Errors
        ///
        /// Returns [`OutlineError::ConfigurationError`] if the underlying
        /// HTTP client cannot be initialized (e.g. TLS backend failure).
        pub fn new(request_timeout: Duration) -> OutlineResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(request_timeout)
                .build()
                .map_err(|e| {
                    OutlineError::configuration_error(format!(
                        "Failed to initialize HTTP client: {e}"
                    ))
                })?;

            Ok(Self {
                client,
                request_timeout,
            })
        }

        pub fn request_timeout(&self) -> Duration {
            self.request_timeout
        }

        /// Build authentication headers for OpenAI-compatible APIs
        pub fn build_auth_headers(api_key: &str) -> OutlineResult<HeaderMap> {
            let mut headers = HeaderMap::new();

            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                OutlineError::configuration_error(format!("Invalid API key format: {e}"))
            })?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);

            Ok(headers)
        }

        /// Execute a single chat completion request
        pub async fn execute_chat_request(
            &self,
            url: &Url,
            headers: &HeaderMap,
            request: &OpenAIRequest,
        ) -> OutlineResult<OpenAIResponse> {
            log_debug!(
                url = %url,
                model = %request.model,
                message_count = request.messages.len(),
                max_tokens = request.max_tokens,
                temperature = request.temperature,
                "Sending chat completion request"
            );

            let response = self
                .client
                .post(url.clone())
                .headers(headers.clone())
                .json(request)
                .send()
                .await
                .map_err(|e| self.map_transport_error(url, e))?;

            if !response.status().is_success() {
                return Err(handle_error_response(response).await);
            }

            let raw_body = response
                .text()
                .await
                .map_err(|e| self.map_transport_error(url, e))?;

            parse_success_body(&raw_body)
        }

        fn map_transport_error(&self, url: &Url, error: reqwest::Error) -> OutlineError {
            log_error!(
                url = %url,
                error = %error,
                is_timeout = error.is_timeout(),
                is_connect = error.is_connect(),
                "HTTP request failed"
            );

            if error.is_timeout() {
                OutlineError::timeout(self.request_timeout.as_secs())
            } else {
                OutlineError::transport_failed(
                    format!("Request failed: {error}"),
                    Some(Box::new(error)),
                )
            }
        }
    }

    /// Handle non-success HTTP responses
    async fn handle_error_response(response: reqwest::Response) -> OutlineError {
        let status = response.status();
        let headers = response.headers().clone();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|e| {
            log_warn!(
                status = %status,
                error = %e,
                is_timeout = e.is_timeout(),
                "Failed to read error response body"
            );
            "Unknown error".to_string()
        });

        log_error!(
            status = %status,
            error_text = %error_text,
            "API error response"
        );

        let message = extract_error_message(&error_text).unwrap_or(error_text);

        match status.as_u16() {
            401 | 403 => OutlineError::authentication_failed(message),
            429 => {
                let retry_after_seconds = headers
                    .get("retry-after")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok());

                OutlineError::rate_limit_exceeded(retry_after_seconds)
            }
            code => OutlineError::provider_rejected(code, message),
        }
    }

    /// Parse a successful response body into OpenAIResponse
    fn parse_success_body(raw_body: &str) -> OutlineResult<OpenAIResponse> {
        serde_json::from_str(raw_body).map_err(|e| {
            log_error!(
                error = %e,
                raw_body = %raw_body,
                "Failed to parse response"
            );
            OutlineError::malformed_response(format!("Invalid response: {e}"))
        })
    }
}
