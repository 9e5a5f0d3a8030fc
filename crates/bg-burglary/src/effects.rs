//! Environment side-effects of a committed burglary.
//!
//! Runs inside the coordinator's sequential apply phase only: one writer,
//! so the multi-house radius update can never lose increments to a
//! concurrent burglary.

use bg_core::ModelParams;
use bg_env::{BuildingKind, Environment, SimulationContext};

use crate::event::BurglaryEvent;

/// Apply one burglary to the shared environment.
///
/// Bumps the global counter, marks the house burgled, raises its security
/// proportionally, and (when enabled) raises every other house within the
/// memoized effect radius by `weight / distance` with distance floored at
/// 1 m.  Every touched house is registered for daily security decay.
///
/// Agent-local effects (wealth gain, memory update) are the agent's own
/// business and happen in its step, not here.
pub fn apply_burglary(
    env: &mut Environment,
    ctx: &mut SimulationContext,
    params: &ModelParams,
    event: &BurglaryEvent,
) {
    ctx.record_burglary();

    let center = {
        let house = env.building_mut(event.house);
        house.times_burgled += 1;
        house.security += house.security * params.security_increase_rate;
        house.coord
    };
    env.register_for_decay(event.house);

    if !params.radius_effects_enabled {
        return;
    }

    let radius = ctx.effect_radius(params.radius_effect_weight, params.negligible_effect_cutoff);
    let neighbours = env.buildings_within_radius_of_kind(center, radius, BuildingKind::House);
    for id in neighbours {
        if id == event.house {
            continue;
        }
        let distance = center.distance(env.building(id).coord).max(1.0);
        let increase = params.radius_effect_weight / distance;
        if increase > params.negligible_effect_cutoff {
            env.building_mut(id).security += increase;
            env.register_for_decay(id);
        }
    }
}
