//! Coordinator error type.

use thiserror::Error;

use bg_agent::AgentError;
use bg_core::AgentId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An agent's tick failed fatally and the routing-failure policy is
    /// set to halt the run.
    #[error("agent {agent} failed fatally")]
    Agent {
        agent: AgentId,
        #[source]
        source: AgentError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
