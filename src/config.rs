//! Configuration for outline generation
//!
//! Model selection and generation parameters are explicit, validated types
//! rather than strings resolved at call time. Nothing here reads the
//! environment; every value comes from the caller.

use crate::error::{OutlineError, OutlineResult};
use crate::logging::log_debug;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Base URL the form is prefilled with
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Transport timeout for a single completion call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Models the outline generator may be pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelId {
    /// General chat model
    #[default]
    #[serde(rename = "deepseek-chat")]
    DeepseekChat,
    /// Reasoning model
    #[serde(rename = "deepseek-reasoner")]
    DeepseekReasoner,
}

impl ModelId {
    /// All selectable models, in selector order
    pub const ALL: [ModelId; 2] = [ModelId::DeepseekChat, ModelId::DeepseekReasoner];

    /// Identifier sent as `model` on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::DeepseekChat => "deepseek-chat",
            ModelId::DeepseekReasoner => "deepseek-reasoner",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = OutlineError;

    /// Exact match only; unknown identifiers are never mapped to a default.
    fn from_str(s: &str) -> OutlineResult<Self> {
        ModelId::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| {
                OutlineError::configuration_error(format!(
                    "Unsupported model: '{s}'. Supported models: deepseek-chat, deepseek-reasoner"
                ))
            })
    }
}

/// Sampling parameters attached to every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl GenerationParams {
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 3000;
    pub const DEFAULT_TEMPERATURE: f64 = 0.3;

    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::ConfigurationError`] if `max_output_tokens` is
    /// zero or `temperature` lies outside `[0, 2]`.
    pub fn validate(&self) -> OutlineResult<()> {
        if self.max_output_tokens == 0 {
            return Err(OutlineError::configuration_error(
                "max_output_tokens must be a positive integer",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(OutlineError::configuration_error(format!(
                "temperature must be within [0, 2], got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }
}

/// Per-call connection parameters, supplied by the form on every generation.
/// The model travels with the [`crate::InterviewRequest`].
///
/// The API key is never serialized and is redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub base_url: String,
}

impl ConnectionSettings {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Validate the settings and return the parsed endpoint
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::ConfigurationError`] if:
    /// - The API key is empty or whitespace
    /// - The base URL does not parse or is not http(s)
    pub fn validate(&self) -> OutlineResult<Url> {
        if self.api_key.trim().is_empty() {
            return Err(OutlineError::configuration_error(
                "DeepSeek API key is required",
            ));
        }

        let endpoint = parse_base_url(&self.base_url)?;

        log_debug!(
            base_url = %endpoint,
            has_api_key = true,
            "Connection settings validated"
        );

        Ok(endpoint)
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> OutlineResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        OutlineError::configuration_error(format!("Invalid API base URL '{raw}': {e}"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(OutlineError::configuration_error(format!(
            "Unsupported URL scheme '{other}' in API base URL"
        ))),
    }
}
