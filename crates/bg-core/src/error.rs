//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Prefer whichever
//! keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, NodeId};

/// The top-level error type for `bg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `bg-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
