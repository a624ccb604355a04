//! Core types for the outline generator
//!
//! ## Organization
//! - `messages` - Role-tagged chat messages
//! - `provider` - Completion provider contract and result types

pub mod messages;
pub mod provider;

pub use messages::{ChatMessage, MessageRole};
pub use provider::{CompletionProvider, CompletionResult, TokenUsage};
