//! Observation hooks for telemetry and history output.

use bg_burglary::BurglaryEvent;
use bg_core::Tick;
use bg_env::{Environment, SimulationContext};

/// Callbacks fired by the coordinator.  All default to no-ops so an
/// observer implements only what it cares about.
///
/// `on_burglary` fires during the apply phase, once per event, in
/// ascending agent id; `on_tick_end` fires after the apply phase with the
/// environment already mutated.
pub trait SimObserver {
    fn on_tick_start(&mut self, _tick: Tick) {}

    fn on_tick_end(
        &mut self,
        _tick: Tick,
        _burglaries: u32,
        _env: &Environment,
        _ctx: &SimulationContext,
    ) {
    }

    fn on_burglary(&mut self, _event: &BurglaryEvent) {}

    fn on_day_end(&mut self, _day: u64, _env: &Environment) {}

    fn on_sim_end(&mut self, _ctx: &SimulationContext) {}
}

/// Observes nothing.  For runs where only the end state matters.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
