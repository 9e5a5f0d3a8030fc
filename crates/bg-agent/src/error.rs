//! Agent error type.

use thiserror::Error;

use bg_route::RouteError;

/// Errors that cross the agent/coordinator boundary.
///
/// Only routing failures do: strategy faults and state-variable underflow
/// are absorbed and logged where they happen.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("routing failed: {0}")]
    Routing(#[from] RouteError),
}

pub type AgentResult<T> = Result<T, AgentError>;
