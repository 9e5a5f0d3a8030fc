//! Route-engine error type.

use thiserror::Error;

use bg_core::NodeId;
use bg_spatial::SpatialError;

/// Errors produced by `bg-route`.
///
/// `NoRoute` is fatal to the agent's tick: the coordinator logs it and
/// either skips the agent or halts the run, per policy.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {from} to {to} (disconnected network)")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("cannot plan a route on an empty network")]
    EmptyNetwork,

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type RouteResult<T> = Result<T, RouteError>;
