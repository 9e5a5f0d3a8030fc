//! `bg-env` — the mutable simulation environment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`building`]  | `Building`, `BuildingKind`, `TrafficProfile`          |
//! | [`community`] | `Community`, `Sociotype`                              |
//! | [`env`]       | `Environment` (store + R-tree radius queries), builder|
//! | [`context`]   | `SimulationContext` — shared counters and memos       |
//!
//! # Mutation discipline
//!
//! During the parallel step phase the environment is only ever borrowed
//! immutably; all mutation (burglary side-effects, daily security decay)
//! happens in the coordinator's sequential apply phase through `&mut
//! Environment`.  That single-writer discipline is what keeps concurrent
//! burglary events consistent.

pub mod building;
pub mod community;
pub mod context;
pub mod env;


pub use building::{Building, BuildingKind, TrafficProfile};
pub use community::{Community, Sociotype};
pub use context::SimulationContext;
pub use env::{Environment, EnvironmentBuilder};
