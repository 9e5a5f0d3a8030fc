//! One agent-tick: select, perform, settle, decay.

use bg_core::{ModelParams, SimClock};
use bg_env::Environment;
use bg_spatial::{RoadNetwork, Router};
use bg_burglary::BurglaryEvent;

use crate::action::{Action, ActionOutcome};
use crate::burglar::Burglar;
use crate::error::AgentResult;
use crate::scheduler::MotiveScheduler;

/// Shared read-only world state handed to every agent during the parallel
/// phase.  Mutation of the environment happens later, in the coordinator's
/// apply phase.
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    pub env: &'a Environment,
    pub network: &'a RoadNetwork,
    pub router: &'a dyn Router,
    pub params: &'a ModelParams,
    pub clock: &'a SimClock,
}

/// Side-effects an action wants applied to the shared world.
#[derive(Debug, Default)]
pub struct TickEffects {
    pub burglary: Option<BurglaryEvent>,
}

/// What one agent-tick produced.
#[derive(Debug)]
pub struct StepReport {
    /// A burglary committed this tick, to be applied by the coordinator.
    pub burglary: Option<BurglaryEvent>,
    /// State variables that hit their floor during decay.
    pub underflows: u32,
}

/// Advance one agent by one tick.
///
/// Order matters: motive selection, then the top action, then outcome
/// handling, and state-variable decay strictly last — an action that
/// satisfies a need must act on the pre-decay value.
///
/// A routing failure aborts the tick for this agent only; the coordinator
/// decides whether that halts the run.
pub fn step_agent(agent: &mut Burglar, world: &WorldView<'_>) -> AgentResult<StepReport> {
    let slot = MotiveScheduler::select(agent, world);

    // The scheduler guarantees a non-empty stack.
    let mut action = agent.motives[slot].actions.pop().unwrap_or(Action::DoNothing);

    let mut effects = TickEffects::default();
    let outcome = action.perform(agent, world, &mut effects)?;
    match outcome {
        ActionOutcome::Continue => agent.motives[slot].actions.push(action),
        ActionOutcome::Completed => {}
        ActionOutcome::NeedsRebuild => {
            let view = agent.motive_view(slot, world.env);
            let stack = agent.motives[slot].motive.build_actions(&view, world.params);
            agent.motives[slot].actions = stack;
        }
    }

    let underflows = agent.decay_state_vars();
    Ok(StepReport { burglary: effects.burglary, underflows })
}
