//! Shared OpenAI-compatible API structures and utilities
//!
//! - `types` - Wire request/response structures
//! - `utils` - Request assembly and the HTTP client

pub mod types;
pub mod utils;

pub use types::*;
pub use utils::*;
