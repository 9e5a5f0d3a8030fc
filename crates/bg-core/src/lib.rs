//! `bg-core` — foundational types for the `rust_burgle` burglary simulation.
//!
//! This crate is a dependency of every other `bg-*` crate.  It intentionally
//! has no `bg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `NodeId`, `EdgeId`, `BuildingId`, `CommunityId`|
//! | [`coord`]  | `Coord` — projected planar coordinates in metres          |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`params`] | `ModelParams` — typed scenario parameters                 |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config/parameter types.    |

pub mod coord;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, BuildingId, CommunityId, EdgeId, NodeId};
pub use params::ModelParams;
pub use rng::{AgentRng, SimRng};
pub use time::{RoutingFailurePolicy, SimClock, SimConfig, Tick};
