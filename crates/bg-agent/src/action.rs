//! Actions: the executable units of behaviour.
//!
//! An action runs once per tick while it guides the agent and reports one
//! of three outcomes: keep going, done (the motive pops it), or the stack
//! is stale and the owning motive must rebuild it (for example: ran out of
//! money mid-plan).  The burglary action is a composite that drives the
//! whole target → travel → search → victim pipeline across ticks.

use bg_core::{BuildingId, CommunityId};
use bg_burglary::{BurglaryEvent, TargetView, VictimQuery};
use bg_route::{Progress, RouteEngine, RouteState};

use crate::burglar::Burglar;
use crate::error::AgentResult;
use crate::step::{TickEffects, WorldView};

/// What one `perform` call tells the owning motive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Not finished; perform again next tick.
    Continue,
    /// Finished; discard this action.
    Completed,
    /// The rest of the stack no longer makes sense; the motive must
    /// rebuild it.
    NeedsRebuild,
}

/// Named travel destinations, resolved against the agent's references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Workplace,
    SocialVenue,
    DrugDealer,
}

impl Destination {
    fn resolve(self, agent: &Burglar) -> Option<BuildingId> {
        match self {
            Destination::Home => Some(agent.home),
            Destination::Workplace => agent.workplace,
            Destination::SocialVenue => agent.social_venue,
            Destination::DrugDealer => agent.drug_dealer,
        }
    }
}

/// Travel to a named destination, planning the route lazily on the first
/// tick.
#[derive(Debug)]
pub struct TravelPlan {
    pub dest: Destination,
    route: Option<RouteState>,
}

impl TravelPlan {
    pub fn to(dest: Destination) -> Self {
        Self { dest, route: None }
    }

    fn perform(&mut self, agent: &mut Burglar, world: &WorldView<'_>) -> AgentResult<ActionOutcome> {
        let Some(building) = self.dest.resolve(agent) else {
            // A stack should never hold a travel leg to a reference the
            // agent does not have; recover by dropping the leg.
            tracing::debug!(agent = %agent.id, dest = ?self.dest, "travel destination unresolved");
            return Ok(ActionOutcome::Completed);
        };

        if self.route.is_none() {
            let target = world.env.building(building).coord;
            let state = RouteEngine::plan(world.router, world.network, agent.coord, target)?;
            agent.route_locked = true;
            self.route = Some(state);
        }
        let Some(route) = self.route.as_mut() else {
            return Ok(ActionOutcome::Continue);
        };

        match RouteEngine::advance(route, agent.coord, world.params.move_rate_m, world.network) {
            Progress::EnRoute(c) => {
                agent.coord = c;
                Ok(ActionOutcome::Continue)
            }
            Progress::Arrived(c) => {
                agent.coord = c;
                agent.route_locked = false;
                agent.memory.record_building_visit(building);
                agent.memory.record_community_visit(world.env.building(building).community);
                Ok(ActionOutcome::Completed)
            }
        }
    }
}

/// A paid work shift of fixed length.
#[derive(Debug, Clone, Copy)]
pub struct WorkShift {
    remaining: u32,
}

impl WorkShift {
    pub fn new(length_ticks: u32) -> Self {
        Self { remaining: length_ticks.max(1) }
    }

    fn perform(&mut self, agent: &mut Burglar, world: &WorldView<'_>) -> ActionOutcome {
        agent.wealth += world.params.work_wage;
        self.remaining -= 1;
        if self.remaining == 0 {
            ActionOutcome::Completed
        } else {
            ActionOutcome::Continue
        }
    }
}

// ── The burglary composite ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    ChooseTarget,
    Travelling,
    Searching,
}

/// Multi-tick burglary behaviour: pick a community, travel there, search
/// around it, and score every house passed until one commits or the time
/// box runs out.
#[derive(Debug)]
pub struct BurglaryDrive {
    stage: Stage,
    target: Option<CommunityId>,
    route: Option<RouteState>,
}

impl BurglaryDrive {
    pub fn new() -> Self {
        Self { stage: Stage::ChooseTarget, target: None, route: None }
    }

    fn perform(
        &mut self,
        agent: &mut Burglar,
        world: &WorldView<'_>,
        effects: &mut TickEffects,
    ) -> AgentResult<ActionOutcome> {
        match self.stage {
            Stage::ChooseTarget => self.choose_target(agent, world),
            Stage::Travelling => self.travel(agent, world),
            Stage::Searching => self.search(agent, world, effects),
        }
    }

    fn choose_target(&mut self, agent: &mut Burglar, world: &WorldView<'_>) -> AgentResult<ActionOutcome> {
        let view = TargetView {
            position: agent.coord,
            home_community: agent.home_community,
            memory: &agent.memory,
            env: world.env,
            weights: agent.attraction_weights,
        };
        let Some(community) = agent.target_chooser.choose_target(&view, &mut agent.rng) else {
            // Strategy fault: nothing carries selection mass right now.
            // Not an error; try again next tick.
            tracing::debug!(agent = %agent.id, "no burglary target chosen");
            return Ok(ActionOutcome::Continue);
        };

        let centroid = world.env.community(community).centroid;
        let state = RouteEngine::plan(world.router, world.network, agent.coord, centroid)?;
        self.route = Some(state);
        self.target = Some(community);
        self.stage = Stage::Travelling;
        agent.route_locked = true;
        Ok(ActionOutcome::Continue)
    }

    fn travel(&mut self, agent: &mut Burglar, world: &WorldView<'_>) -> AgentResult<ActionOutcome> {
        let Some(route) = self.route.as_mut() else {
            self.stage = Stage::ChooseTarget;
            return Ok(ActionOutcome::Continue);
        };
        match RouteEngine::advance(route, agent.coord, world.params.move_rate_m, world.network) {
            Progress::EnRoute(c) => {
                agent.coord = c;
                Ok(ActionOutcome::Continue)
            }
            Progress::Arrived(c) => {
                agent.coord = c;
                agent.route_locked = false;
                self.route = None;
                if let Some(t) = self.target {
                    agent.memory.record_community_visit(t);
                }
                agent.search.reinitialize(c);
                self.stage = Stage::Searching;
                Ok(ActionOutcome::Continue)
            }
        }
    }

    fn search(
        &mut self,
        agent: &mut Burglar,
        world: &WorldView<'_>,
        effects: &mut TickEffects,
    ) -> AgentResult<ActionOutcome> {
        agent.search.step();

        // Keep walking the current exploratory leg; start a new one when
        // it ends.
        let leg_done = match self.route.as_mut() {
            Some(route) => {
                match RouteEngine::advance(route, agent.coord, world.params.move_rate_m, world.network)
                {
                    Progress::EnRoute(c) => {
                        agent.coord = c;
                        false
                    }
                    Progress::Arrived(c) => {
                        agent.coord = c;
                        true
                    }
                }
            }
            None => true,
        };
        if leg_done {
            self.route = None;
            if let Some(dest) = agent.search.next_leg(world.network, &mut agent.rng) {
                let state = RouteEngine::plan(world.router, world.network, agent.coord, dest)?;
                self.route = Some(state);
            }
        }

        // Score the houses passed this tick.
        let candidates =
            world.env.buildings_within_radius(agent.coord, world.params.perception_radius_m);
        let query = VictimQuery {
            candidates: &candidates,
            own_home: agent.home,
            intensity: agent.guiding_intensity,
            hour: world.clock.hour(),
            weights: agent.suitability_weights,
            env: world.env,
        };
        if let Some((house, breakdown)) = agent.victim_chooser.choose_victim(&query, &mut agent.rng)
        {
            let community = world.env.building(house).community;
            agent.wealth += world.params.burglary_gain;
            agent.memory.record_burglary(community, house);
            effects.burglary = Some(BurglaryEvent {
                burglar: agent.id,
                house,
                community,
                coord: world.env.building(house).coord,
                tick: world.clock.current_tick,
                breakdown,
            });
            return Ok(ActionOutcome::Completed);
        }

        if agent.search.finished_searching() {
            // Unsuccessful pass; the motive rebuilds a fresh drive if it
            // still guides the agent.
            return Ok(ActionOutcome::Completed);
        }
        Ok(ActionOutcome::Continue)
    }
}

impl Default for BurglaryDrive {
    fn default() -> Self {
        Self::new()
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// One unit of behaviour on a motive's stack.
#[derive(Debug)]
pub enum Action {
    Travel(TravelPlan),
    Work(WorkShift),
    BuyDrugs,
    Sleep,
    Socialise { paid: bool },
    DoNothing,
    Burgle(BurglaryDrive),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Travel(_) => "travel",
            Action::Work(_) => "work",
            Action::BuyDrugs => "buy-drugs",
            Action::Sleep => "sleep",
            Action::Socialise { .. } => "socialise",
            Action::DoNothing => "do-nothing",
            Action::Burgle(_) => "burgle",
        }
    }

    /// Whether the agent could be fast-forwarded through this action
    /// (stationary, low-stakes behaviour).
    ///
    /// The coordinator currently steps every agent every tick; this
    /// classifier is the hook a skip-ahead coordinator would key on.
    pub fn sleepable(&self) -> bool {
        matches!(self, Action::Sleep | Action::Work(_) | Action::DoNothing)
    }

    /// Run one tick of this action.
    ///
    /// Mutates only the agent; burglary side-effects on the shared
    /// environment are returned through `effects` for the coordinator's
    /// apply phase.
    pub fn perform(
        &mut self,
        agent: &mut Burglar,
        world: &WorldView<'_>,
        effects: &mut TickEffects,
    ) -> AgentResult<ActionOutcome> {
        match self {
            Action::Travel(plan) => plan.perform(agent, world),
            Action::Work(shift) => Ok(shift.perform(agent, world)),
            Action::BuyDrugs => {
                if agent.wealth < world.params.drug_cost {
                    return Ok(ActionOutcome::NeedsRebuild);
                }
                agent.wealth -= world.params.drug_cost;
                if let Some(sv) = agent.guiding_state_var_mut() {
                    sv.add(world.params.drug_gain);
                }
                Ok(ActionOutcome::Completed)
            }
            Action::Sleep => {
                let satisfied_level = world.params.satisfied_level;
                let gain = world.params.sleep_gain;
                match agent.guiding_state_var_mut() {
                    Some(sv) => {
                        sv.add(gain);
                        if sv.value() >= satisfied_level {
                            Ok(ActionOutcome::Completed)
                        } else {
                            Ok(ActionOutcome::Continue)
                        }
                    }
                    None => Ok(ActionOutcome::Completed),
                }
            }
            Action::Socialise { paid } => {
                if !*paid {
                    if agent.wealth < world.params.social_cost {
                        return Ok(ActionOutcome::NeedsRebuild);
                    }
                    agent.wealth -= world.params.social_cost;
                    *paid = true;
                }
                let satisfied_level = world.params.satisfied_level;
                let gain = world.params.social_gain;
                match agent.guiding_state_var_mut() {
                    Some(sv) => {
                        sv.add(gain);
                        if sv.value() >= satisfied_level {
                            Ok(ActionOutcome::Completed)
                        } else {
                            Ok(ActionOutcome::Continue)
                        }
                    }
                    None => Ok(ActionOutcome::Completed),
                }
            }
            Action::DoNothing => Ok(ActionOutcome::Continue),
            Action::Burgle(drive) => drive.perform(agent, world, effects),
        }
    }
}
