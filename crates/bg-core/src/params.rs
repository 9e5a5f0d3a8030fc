//! Typed scenario parameters for the behaviour model.
//!
//! Every tunable the model reads lives in this one struct, populated by a
//! config-loading collaborator and passed by reference to the components that
//! need it.  Field defaults reproduce the calibrated baseline scenario.

/// All behavioural and environmental model parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParams {
    // ── State variables ───────────────────────────────────────────────────
    /// Amount every state variable loses per tick.
    pub deterioration: f64,
    /// Value a state variable is reset to when decay would take it to ≤ 0.
    pub state_var_floor: f64,

    // ── Motive arbitration ────────────────────────────────────────────────
    /// A challenger motive must beat the active one by more than this margin
    /// to take over (hysteresis — prevents oscillation between near-equal
    /// motives).
    pub intensity_difference: f64,
    /// Constant intensity of the do-nothing motive.  Other motives only win
    /// when they exceed it.
    pub do_nothing_intensity: f64,
    /// Default per-agent sensitivity multiplier applied to motive intensity.
    pub motive_factor: f64,

    // ── Movement ──────────────────────────────────────────────────────────
    /// Distance an agent covers along the road network per tick, metres.
    pub move_rate_m: f64,

    // ── Needs satisfaction ────────────────────────────────────────────────
    /// Sleep-level gain per tick spent sleeping.
    pub sleep_gain: f64,
    /// Social-level gain per tick spent socialising.
    pub social_gain: f64,
    /// Wealth cost per tick spent socialising.
    pub social_cost: f64,
    /// Drug-level gain from one purchase.
    pub drug_gain: f64,
    /// Wealth cost of one drug purchase.
    pub drug_cost: f64,
    /// Wealth earned per tick spent working.
    pub work_wage: f64,
    /// Ticks one work shift lasts.
    pub work_shift_ticks: u32,
    /// A state variable at or above this level counts as satisfied; the
    /// owning motive's action completes.
    pub satisfied_level: f64,

    // ── Burglary pipeline ─────────────────────────────────────────────────
    /// Radius around the agent within which buildings count as "passed this
    /// tick" for victim scoring, metres.
    pub perception_radius_m: f64,
    /// Maximum duration of one bounded bulls-eye search, ticks.
    pub max_search_ticks: u32,
    /// Radius of the exploratory search area around the target community
    /// centroid, metres.
    pub search_radius_m: f64,
    /// Wealth gained from one successful burglary.
    pub burglary_gain: f64,
    /// A burgled house's security rises by `security * security_increase_rate`.
    pub security_increase_rate: f64,
    /// Whether a burglary also raises security of surrounding houses.
    pub radius_effects_enabled: bool,
    /// Numerator of the neighbourhood effect: increase = weight / distance.
    pub radius_effect_weight: f64,
    /// Increases below this are considered negligible and not applied; also
    /// bounds the memoized effect radius.
    pub negligible_effect_cutoff: f64,
    /// Amount a touched house's security decays toward its base per day.
    pub security_daily_decay: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            deterioration: 0.002,
            state_var_floor: 0.5,

            intensity_difference: 0.05,
            do_nothing_intensity: 1.0,
            motive_factor: 1.0,

            move_rate_m: 80.0,

            sleep_gain: 0.004,
            social_gain: 0.01,
            social_cost: 0.5,
            drug_gain: 2.0,
            drug_cost: 15.0,
            work_wage: 0.2,
            work_shift_ticks: 240,
            satisfied_level: 2.0,

            perception_radius_m: 40.0,
            max_search_ticks: 60,
            search_radius_m: 300.0,
            burglary_gain: 30.0,
            security_increase_rate: 0.2,
            radius_effects_enabled: true,
            radius_effect_weight: 0.5,
            negligible_effect_cutoff: 0.005,
            security_daily_decay: 0.05,
        }
    }
}
