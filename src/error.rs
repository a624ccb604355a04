//! Error types for outline generation.
//!
//! Every failure of a generation attempt is reported as an [`OutlineError`].
//! Errors are terminal to the attempt that produced them: nothing is retried
//! internally, and the caller may simply trigger a new generation with
//! corrected inputs.
//!
//! # Error Kinds
//!
//! [`OutlineError::kind()`] maps each variant onto a coarse [`ErrorKind`]:
//! - `Configuration`: missing API key, unknown model, bad endpoint, invalid
//!   generation parameters. Detected before any network call.
//! - `Transport`: network unreachable, TLS failure, timeout.
//! - `Provider`: non-2xx responses, authentication rejection, rate limiting,
//!   malformed or empty choice lists.
//! - `Busy`: a generation was triggered while another one was in flight.
//! - `Export`: writing `outline.md` failed.
//!
//! # Example
//!
//! ```rust
//! use interview_outline::{OutlineError, error::ErrorKind};
//!
//! let err = OutlineError::configuration_error("API key is required");
//! assert_eq!(err.kind(), ErrorKind::Configuration);
//! println!("{}", err.user_message());
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of an [`OutlineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or missing inputs; no network call was attempted.
    Configuration,
    /// The request never produced an HTTP response.
    Transport,
    /// The provider answered, but not with a usable completion.
    Provider,
    /// Another generation is still in flight.
    Busy,
    /// The outline could not be written to disk.
    Export,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed and needs attention (bad key, provider rejection).
    Error,
    /// Unexpected but recoverable (rate limits, timeouts, odd payloads).
    Warning,
    /// Expected outcome of normal use (double-click while busy).
    Info,
}

/// Convenient result type for outline operations.
pub type OutlineResult<T> = std::result::Result<T, OutlineError>;

/// Errors that can occur while generating or exporting an outline.
///
/// | Variant | Kind |
/// |---------|------|
/// | `ConfigurationError` | Configuration |
/// | `TransportFailed` | Transport |
/// | `Timeout` | Transport |
/// | `AuthenticationFailed` | Provider |
/// | `RateLimitExceeded` | Provider |
/// | `ProviderRejected` | Provider |
/// | `MalformedResponse` | Provider |
/// | `GenerationInProgress` | Busy |
/// | `ExportFailed` | Export |
#[derive(Error, Debug)]
pub enum OutlineError {
    /// Inputs are invalid or incomplete.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request could not be completed.
    #[error("Transport failure: {message}")]
    TransportFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider did not answer within the request timeout.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_seconds: u64,
    },

    /// The provider rejected the API key.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details returned by the provider.
        message: String,
    },

    /// The provider is throttling requests.
    #[error("Rate limit exceeded{}", retry_hint(.retry_after_seconds))]
    RateLimitExceeded {
        /// Wait time advertised through `Retry-After`, when present.
        retry_after_seconds: Option<u64>,
    },

    /// Any other non-2xx response.
    #[error("Provider returned HTTP {status}: {message}")]
    ProviderRejected {
        /// HTTP status code.
        status: u16,
        /// Response body or extracted error message.
        message: String,
    },

    /// The response could not be turned into a completion.
    #[error("Malformed provider response: {message}")]
    MalformedResponse {
        /// Details about what was wrong with the response.
        message: String,
    },

    /// A generation was requested while another one was still running.
    #[error("An outline generation is already in progress")]
    GenerationInProgress,

    /// Writing the Markdown export failed.
    #[error("Failed to export outline to {}: {source}", .path.display())]
    ExportFailed {
        /// Target path of the export.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn retry_hint(retry_after_seconds: &Option<u64>) -> String {
    match retry_after_seconds {
        Some(secs) => format!(", retry after {secs}s"),
        None => String::new(),
    }
}

impl OutlineError {
    /// Get the error kind for routing and display decisions.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigurationError { .. } => ErrorKind::Configuration,
            Self::TransportFailed { .. } | Self::Timeout { .. } => ErrorKind::Transport,
            Self::AuthenticationFailed { .. }
            | Self::RateLimitExceeded { .. }
            | Self::ProviderRejected { .. }
            | Self::MalformedResponse { .. } => ErrorKind::Provider,
            Self::GenerationInProgress => ErrorKind::Busy,
            Self::ExportFailed { .. } => ErrorKind::Export,
        }
    }

    /// Get the error severity for logging.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::TransportFailed { .. } => ErrorSeverity::Error,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::RateLimitExceeded { .. } => ErrorSeverity::Warning,
            Self::ProviderRejected { .. } => ErrorSeverity::Error,
            Self::MalformedResponse { .. } => ErrorSeverity::Warning,
            Self::GenerationInProgress => ErrorSeverity::Info,
            Self::ExportFailed { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to a message suitable for showing next to the form.
    ///
    /// Configuration errors keep their detail since the user has to fix the
    /// input; provider internals are summarized.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message } => {
                format!("Please check your settings: {message}")
            }
            Self::TransportFailed { .. } => {
                "Unable to reach the AI service. Please check the base URL and your network"
                    .to_string()
            }
            Self::Timeout { timeout_seconds } => {
                format!("The AI service did not answer within {timeout_seconds} seconds")
            }
            Self::AuthenticationFailed { .. } => {
                "The API key was rejected. Please check your key".to_string()
            }
            Self::RateLimitExceeded {
                retry_after_seconds: Some(secs),
            } => format!("Service is busy. Please wait {secs} seconds and try again"),
            Self::RateLimitExceeded { .. } => {
                "Service is busy. Please wait a moment and try again".to_string()
            }
            Self::ProviderRejected { status, .. } => {
                format!("The AI service returned an error (HTTP {status})")
            }
            Self::MalformedResponse { .. } => {
                "Received an invalid response from the AI service".to_string()
            }
            Self::GenerationInProgress => {
                "An outline is already being generated. Please wait".to_string()
            }
            Self::ExportFailed { .. } => "Unable to save outline.md".to_string(),
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Outline configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn transport_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "transport_failed",
            message = %message,
            has_source = source.is_some(),
            "Chat-completion request could not be delivered"
        );
        Self::TransportFailed { message, source }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Chat-completion request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "Provider rejected the API key"
        );
        Self::AuthenticationFailed { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: Option<u64>) -> Self {
        log_warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds = ?retry_after_seconds,
            "Provider rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn provider_rejected(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "provider_rejected",
            status = status,
            message = %message,
            "Provider returned an error response"
        );
        Self::ProviderRejected { status, message }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "malformed_response",
            message = %message,
            "Provider response could not be used"
        );
        Self::MalformedResponse { message }
    }

    pub fn generation_in_progress() -> Self {
        log_warn!(
            error_type = "generation_in_progress",
            "Ignoring generation trigger while a call is in flight"
        );
        Self::GenerationInProgress
    }

    pub fn export_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        log_error!(
            error_type = "export_failed",
            path = %path.display(),
            error = %source,
            "Failed to write outline export"
        );
        Self::ExportFailed { path, source }
    }
}
