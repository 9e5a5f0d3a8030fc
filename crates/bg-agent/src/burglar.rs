//! The burglar agent and its builder.

use std::sync::Arc;

use bg_core::{AgentId, AgentRng, BuildingId, CommunityId, Coord, ModelParams};
use bg_env::Environment;
use bg_burglary::{
    AttractivenessWeights, BullsEyeSearch, BurglarMemory, RouletteTargetChooser, SearchAlg,
    SuitabilityWeights, TargetChooser, VictimChooser, WeightedVictimChooser,
};

use crate::action::Action;
use crate::motive::{
    BurglaryMotive, DoNothingMotive, DrugsMotive, Motive, MotiveView, SleepMotive, SocialMotive,
};
use crate::state_var::StateVariable;

/// One motive plus what it owns: optionally a state variable (the need
/// motives have one, burglary and do-nothing do not) and its action stack.
pub struct MotiveSlot {
    pub state_var: Option<StateVariable>,
    pub motive: Box<dyn Motive>,
    pub actions: Vec<Action>,
}

/// A burglar: position and wealth, building references, competing motives,
/// memory of places, and the strategy handles the burglary pipeline runs
/// through.
///
/// Exclusively owned by its worker during the parallel phase; nothing here
/// is touched by another agent.
pub struct Burglar {
    pub id: AgentId,
    pub coord: Coord,
    /// Never negative; spending is gated on affordability.
    pub wealth: f64,
    pub home: BuildingId,
    pub home_community: CommunityId,
    pub workplace: Option<BuildingId>,
    pub social_venue: Option<BuildingId>,
    pub drug_dealer: Option<BuildingId>,

    pub motives: Vec<MotiveSlot>,
    /// Index into `motives` of the action-guiding motive.
    pub guiding: usize,
    /// The guiding motive's intensity this tick, set by the scheduler.
    pub guiding_intensity: f64,

    pub memory: BurglarMemory,
    /// While locked (mid-route) the scheduler may not switch motives.
    pub route_locked: bool,
    /// A switch was blocked by the lock; resolve it at the next unlock.
    pub awaiting_unlock: bool,

    pub rng: AgentRng,
    pub target_chooser: Arc<dyn TargetChooser>,
    pub victim_chooser: Arc<dyn VictimChooser>,
    pub search: Box<dyn SearchAlg>,
    pub attraction_weights: AttractivenessWeights,
    pub suitability_weights: SuitabilityWeights,
}

impl Burglar {
    /// Within a metre of the home building counts as home (arrival snaps
    /// exactly, so this tolerates only float wobble).
    pub fn at_home(&self, env: &Environment) -> bool {
        self.coord.distance(env.building(self.home).coord) < 1.0
    }

    pub fn guiding_state_var_mut(&mut self) -> Option<&mut StateVariable> {
        self.motives.get_mut(self.guiding).and_then(|s| s.state_var.as_mut())
    }

    pub fn guiding_motive_name(&self) -> &'static str {
        self.motives[self.guiding].motive.name()
    }

    /// Telemetry: what the agent is doing right now.
    pub fn current_action_name(&self) -> &'static str {
        self.motives[self.guiding].actions.last().map(Action::name).unwrap_or("idle")
    }

    /// The view the guiding motive's formulas and stack builders read.
    pub fn motive_view(&self, slot: usize, env: &Environment) -> MotiveView {
        MotiveView {
            state_value: self.motives[slot].state_var.as_ref().map(StateVariable::value),
            wealth: self.wealth,
            at_home: self.at_home(env),
            has_workplace: self.workplace.is_some(),
        }
    }

    /// One tick of deterioration across all state variables, after the
    /// action logic.  Returns how many clamped at the floor.
    pub fn decay_state_vars(&mut self) -> u32 {
        let mut underflows = 0;
        for slot in &mut self.motives {
            if let Some(sv) = slot.state_var.as_mut() {
                if sv.decay() {
                    underflows += 1;
                }
            }
        }
        underflows
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builds a [`Burglar`] with the standard motive set.  Social and drugs
/// slots are only created when the matching venue reference is given.
pub struct BurglarBuilder {
    id: AgentId,
    home: BuildingId,
    wealth: f64,
    workplace: Option<BuildingId>,
    social_venue: Option<BuildingId>,
    drug_dealer: Option<BuildingId>,
    burglary_factor: f64,
    target_chooser: Option<Arc<dyn TargetChooser>>,
    victim_chooser: Option<Arc<dyn VictimChooser>>,
    search: Option<Box<dyn SearchAlg>>,
    attraction_weights: AttractivenessWeights,
    suitability_weights: SuitabilityWeights,
}

impl BurglarBuilder {
    pub fn new(id: AgentId, home: BuildingId) -> Self {
        Self {
            id,
            home,
            wealth: 1.0,
            workplace: None,
            social_venue: None,
            drug_dealer: None,
            burglary_factor: 1.0,
            target_chooser: None,
            victim_chooser: None,
            search: None,
            attraction_weights: AttractivenessWeights::default(),
            suitability_weights: SuitabilityWeights::default(),
        }
    }

    pub fn wealth(mut self, wealth: f64) -> Self {
        self.wealth = wealth.max(0.0);
        self
    }

    pub fn workplace(mut self, building: BuildingId) -> Self {
        self.workplace = Some(building);
        self
    }

    pub fn social_venue(mut self, building: BuildingId) -> Self {
        self.social_venue = Some(building);
        self
    }

    pub fn drug_dealer(mut self, building: BuildingId) -> Self {
        self.drug_dealer = Some(building);
        self
    }

    /// Sensitivity multiplier on the burglary motive.
    pub fn burglary_factor(mut self, factor: f64) -> Self {
        self.burglary_factor = factor;
        self
    }

    pub fn target_chooser(mut self, chooser: Arc<dyn TargetChooser>) -> Self {
        self.target_chooser = Some(chooser);
        self
    }

    pub fn victim_chooser(mut self, chooser: Arc<dyn VictimChooser>) -> Self {
        self.victim_chooser = Some(chooser);
        self
    }

    pub fn search_alg(mut self, search: Box<dyn SearchAlg>) -> Self {
        self.search = Some(search);
        self
    }

    pub fn attraction_weights(mut self, weights: AttractivenessWeights) -> Self {
        self.attraction_weights = weights;
        self
    }

    pub fn suitability_weights(mut self, weights: SuitabilityWeights) -> Self {
        self.suitability_weights = weights;
        self
    }

    /// Build the agent at its home building, seeding its private RNG
    /// stream from the global seed.
    ///
    /// The agent starts knowing every community (one remembered visit
    /// each), so the target roulette always has the whole map to draw
    /// from; burglary counts still accumulate only through experience.
    pub fn build(self, env: &Environment, params: &ModelParams, global_seed: u64) -> Burglar {
        let home_building = env.building(self.home);

        let mut memory = BurglarMemory::new();
        for community in env.communities() {
            memory.record_community_visit(community.id);
        }

        let need = |name| {
            StateVariable::new(
                name,
                params.satisfied_level,
                params.deterioration,
                params.state_var_floor,
            )
        };

        let mut motives: Vec<MotiveSlot> = vec![MotiveSlot {
            state_var: Some(need("sleep level")),
            motive: Box::new(SleepMotive::new(1.0)),
            actions: Vec::new(),
        }];
        if self.social_venue.is_some() {
            motives.push(MotiveSlot {
                state_var: Some(need("social level")),
                motive: Box::new(SocialMotive::new(1.0)),
                actions: Vec::new(),
            });
        }
        if self.drug_dealer.is_some() {
            motives.push(MotiveSlot {
                state_var: Some(need("drug level")),
                motive: Box::new(DrugsMotive::new(1.0)),
                actions: Vec::new(),
            });
        }
        motives.push(MotiveSlot {
            state_var: None,
            motive: Box::new(BurglaryMotive::new(self.burglary_factor)),
            actions: Vec::new(),
        });
        motives.push(MotiveSlot {
            state_var: None,
            motive: Box::new(DoNothingMotive),
            actions: Vec::new(),
        });
        let guiding = motives.len() - 1; // start idle

        Burglar {
            id: self.id,
            coord: home_building.coord,
            wealth: self.wealth,
            home: self.home,
            home_community: home_building.community,
            workplace: self.workplace,
            social_venue: self.social_venue,
            drug_dealer: self.drug_dealer,
            motives,
            guiding,
            guiding_intensity: params.do_nothing_intensity,
            memory,
            route_locked: false,
            awaiting_unlock: false,
            rng: AgentRng::new(global_seed, self.id),
            target_chooser: self.target_chooser.unwrap_or_else(|| Arc::new(RouletteTargetChooser)),
            victim_chooser: self.victim_chooser.unwrap_or_else(|| Arc::new(WeightedVictimChooser)),
            search: self
                .search
                .unwrap_or_else(|| Box::new(BullsEyeSearch::new(params.search_radius_m, params.max_search_ticks))),
            attraction_weights: self.attraction_weights,
            suitability_weights: self.suitability_weights,
        }
    }
}
