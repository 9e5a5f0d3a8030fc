//! `bg-sim` — the tick coordinator.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`sim`]      | `Sim` — the running simulation, `process_tick`/`run` |
//! | [`builder`]  | `SimBuilder` — validated construction                |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                  |
//! | [`error`]    | `SimError`, `SimResult<T>`                           |
//!
//! # Tick anatomy
//!
//! Every tick runs two phases.  The step phase fans the agents out across
//! Rayon workers (`parallel` feature, on by default; a sequential fallback
//! compiles without it): each worker runs its agent's action logic and
//! then that agent's state-variable decay, against a read-only view of the
//! tick-start environment.  The apply phase then walks the step results in
//! ascending agent id on the coordinator thread and applies burglary
//! side-effects to the shared environment one event at a time.  That
//! single-writer apply phase is the only place shared state mutates, so a
//! fixed seed produces identical runs at any worker count.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
