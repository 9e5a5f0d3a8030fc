//! `bg-agent` — the burglar agents themselves.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`state_var`] | `StateVariable` — decaying need scalars                 |
//! | [`motive`]    | `Motive` trait and the five standard motives            |
//! | [`action`]    | `Action` — one executable unit of behaviour             |
//! | [`burglar`]   | `Burglar`, `MotiveSlot`, `BurglarBuilder`               |
//! | [`scheduler`] | `MotiveScheduler` — hysteresis-based motive selection   |
//! | [`step`]      | `step_agent` — one agent-tick, `StepReport`             |
//! | [`error`]     | `AgentError`                                            |
//!
//! # The agent loop
//!
//! Each tick an agent selects its guiding motive (sticky: a challenger must
//! beat the incumbent by more than the configured intensity difference),
//! performs the top action of that motive's stack, handles the action's
//! outcome, and only then decays its state variables.  Actions never mutate
//! the shared environment directly — a committed burglary comes back as an
//! event in the [`StepReport`] for the coordinator to apply sequentially.

pub mod action;
pub mod burglar;
pub mod error;
pub mod motive;
pub mod scheduler;
pub mod state_var;
pub mod step;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionOutcome, BurglaryDrive, Destination, TravelPlan, WorkShift};
pub use burglar::{Burglar, BurglarBuilder, MotiveSlot};
pub use error::{AgentError, AgentResult};
pub use motive::{
    BurglaryMotive, DoNothingMotive, DrugsMotive, Motive, MotiveView, SleepMotive, SocialMotive,
};
pub use scheduler::MotiveScheduler;
pub use state_var::StateVariable;
pub use step::{step_agent, StepReport, TickEffects, WorldView};
