//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `ChronosError` as one
//! variant where a lookup failure can surface through them.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `chronos-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ChronosError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `chronos-core`.
pub type ChronosResult<T> = Result<T, ChronosError>;
