//! Logging utilities for interview-outline
//!
//! Re-exports tracing macros with log_* naming convention for consistency.
//! The crate never installs a subscriber; that is left to the host application.

pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    warn as log_warn,
};
