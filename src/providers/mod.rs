//! Completion provider implementations
//!
//! - **deepseek**: DeepSeek chat-completion binding
//! - **openai_shared**: OpenAI-compatible wire types and HTTP client
//!
//! ```text
//! openai_shared    <- wire schema, auth headers, status mapping
//!      |
//! deepseek.rs      <- CompletionProvider over the shared client
//! ```

pub mod deepseek;
pub mod openai_shared;

pub use deepseek::DeepSeekProvider;
