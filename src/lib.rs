//! # interview-outline
//!
//! Generates Markdown interview outlines from a handful of form fields by
//! calling a DeepSeek (OpenAI-compatible) chat-completion endpoint.
//!
//! ## Key Features
//!
//! - **Deterministic requests**: a fixed system instruction plus a labelled
//!   user turn built from the five interview fields
//! - **Explicit configuration**: enumerated models, validated parameters,
//!   per-call credentials with no persisted key store
//! - **One call, no surprises**: no retry, no caching, no streaming; errors
//!   are classified as configuration, transport or provider failures
//! - **Presentation-ready**: a session that enforces one in-flight call and
//!   keeps the latest outline for display and `outline.md` export
//!
//! ## Example
//!
//! ```rust,no_run
//! use interview_outline::{DeepSeekProvider, OutlineForm, OutlineSession};
//!
//! # async fn example() -> interview_outline::OutlineResult<()> {
//! let session = OutlineSession::new(DeepSeekProvider::with_default_timeout()?);
//!
//! let form = OutlineForm {
//!     api_key: "sk-...".to_string(),
//!     ..OutlineForm::default()
//! };
//!
//! let outline = session.generate(&form).await?;
//! println!("{}", outline.text);
//!
//! if let Some(export) = session.last_export() {
//!     export.write_to_dir(".").await?;
//! }
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod error;
pub mod form;
pub mod outline;
pub mod prompt;
pub mod providers;
pub mod session;

#[cfg(test)]
pub mod tests;

pub use config::{ConnectionSettings, GenerationParams, ModelId, DEFAULT_BASE_URL};
pub use core_types::{ChatMessage, CompletionProvider, CompletionResult, MessageRole, TokenUsage};
pub use error::{OutlineError, OutlineResult};
pub use form::{GenerationInput, OutlineForm};
pub use outline::{MarkdownExport, OutlineCheck, OUTLINE_FILE_NAME, OUTLINE_MIME_TYPE};
pub use prompt::{build_messages, InterviewRequest, PromptTemplate, PLACEHOLDER_MARKER, SECTION_HEADERS};
pub use providers::DeepSeekProvider;
pub use session::OutlineSession;
