//! `bg-route` — per-tick route following.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`state`]  | `RouteState`, `EdgeTraversal` — per-agent travel state |
//! | [`engine`] | `RouteEngine` — plan routes, advance one tick at a time|
//! | [`error`]  | `RouteError`, `RouteResult<T>`                         |
//!
//! # Movement model (distance-per-tick edge walking)
//!
//! Unlike teleport-at-arrival mobility models, agents here physically walk
//! the planned edges: every tick [`RouteEngine::advance`] moves the agent
//! exactly `move_rate` metres along the current edge, carrying any residual
//! across edge boundaries, and snaps the agent onto the destination
//! coordinate when the path runs out.  The victim-scoring stage depends on
//! this — burglars can only score the houses they actually pass.

pub mod engine;
pub mod error;
pub mod state;


pub use engine::{Progress, RouteEngine};
pub use error::{RouteError, RouteResult};
pub use state::{EdgeTraversal, RouteState};
