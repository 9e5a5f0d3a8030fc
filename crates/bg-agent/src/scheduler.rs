//! Motive selection with hysteresis.

use crate::burglar::Burglar;
use crate::motive::MotiveView;
use crate::step::WorldView;

/// Settles which motive guides the agent this tick.
///
/// Stateless; all per-agent state lives on the [`Burglar`].
pub struct MotiveScheduler;

impl MotiveScheduler {
    /// Recompute every motive's intensity (memoized per tick inside the
    /// motives) and settle the guiding motive.
    ///
    /// Switching is sticky: a challenger must beat the incumbent by more
    /// than the configured intensity difference, so near-equal motives do
    /// not oscillate.  While the agent is route-locked no switch happens
    /// at all; a blocked switch is remembered and resolved (without the
    /// hysteresis margin) at the next unlocked tick.
    ///
    /// Guarantees the guiding motive's action stack is non-empty on
    /// return.
    pub fn select(agent: &mut Burglar, world: &WorldView<'_>) -> usize {
        let tick = world.clock.current_tick;
        let at_home = agent.at_home(world.env);
        let wealth = agent.wealth;
        let has_workplace = agent.workplace.is_some();

        let mut intensities = Vec::with_capacity(agent.motives.len());
        for slot in &mut agent.motives {
            let view = MotiveView {
                state_value: slot.state_var.as_ref().map(|s| s.value()),
                wealth,
                at_home,
                has_workplace,
            };
            intensities.push(slot.motive.intensity(tick, &view, world.params));
        }

        // Strict argmax; ties keep the earlier slot.
        let mut best = 0;
        for (i, &v) in intensities.iter().enumerate().skip(1) {
            if v > intensities[best] {
                best = i;
            }
        }

        let current = agent.guiding;
        let beats_margin =
            best != current && intensities[best] > intensities[current] + world.params.intensity_difference;

        if agent.route_locked {
            if beats_margin {
                agent.awaiting_unlock = true;
            }
        } else {
            let deferred_switch =
                agent.awaiting_unlock && best != current && intensities[best] > intensities[current];
            if beats_margin || deferred_switch {
                agent.guiding = best;
                let view = agent.motive_view(best, world.env);
                let stack = agent.motives[best].motive.build_actions(&view, world.params);
                agent.motives[best].actions = stack;
            }
            agent.awaiting_unlock = false;
        }

        let guiding = agent.guiding;
        agent.guiding_intensity = intensities[guiding];

        // Never-empty invariant: a stack drained by completed actions is
        // rebuilt on query.
        if agent.motives[guiding].actions.is_empty() {
            let view = agent.motive_view(guiding, world.env);
            let stack = agent.motives[guiding].motive.build_actions(&view, world.params);
            agent.motives[guiding].actions = stack;
        }

        guiding
    }
}
