//! Victim choice: which passed house to burgle, if any.

use bg_core::{AgentRng, BuildingId};
use bg_env::Environment;

/// Per-agent weights over the six suitability factors.
#[derive(Debug, Clone, Copy)]
pub struct SuitabilityWeights {
    pub collective_efficacy: f64,
    pub occupancy: f64,
    pub accessibility: f64,
    pub visibility: f64,
    pub security: f64,
    pub traffic: f64,
}

impl Default for SuitabilityWeights {
    fn default() -> Self {
        Self {
            collective_efficacy: 1.0,
            occupancy: 1.0,
            accessibility: 1.0,
            visibility: 1.0,
            security: 1.0,
            traffic: 1.0,
        }
    }
}

/// Every number that went into one burglary decision, kept for the event
/// payload so history output can reproduce the calculation.
#[derive(Debug, Clone, Copy)]
pub struct SuitabilityBreakdown {
    pub collective_efficacy: f64,
    /// Community occupancy at the decision hour.
    pub occupancy: f64,
    /// `1 - accessibility`: harder to get into means less attractive.
    pub inaccessibility: f64,
    pub visibility: f64,
    pub security: f64,
    /// Street traffic volume at the decision hour.
    pub traffic: f64,
    pub weights: SuitabilityWeights,
    /// Weighted sum of the six factors.  Lower is more attractive.
    pub suitability: f64,
    /// The burglary motive's intensity when the house was scored.
    pub intensity: f64,
    /// `intensity - suitability`; only a positive margin can burgle.
    pub margin: f64,
    /// `margin^3` clamped to `[0, 1]`: the probability the attempt commits.
    pub probability: f64,
}

/// Read-only inputs to one victim scan.
pub struct VictimQuery<'a> {
    /// Buildings passed this tick, nearest first.
    pub candidates: &'a [BuildingId],
    /// The agent's own home, never a victim.
    pub own_home: BuildingId,
    /// Current burglary motive intensity.
    pub intensity: f64,
    /// Hour of day for the time-weighted factors.
    pub hour: usize,
    pub weights: SuitabilityWeights,
    pub env: &'a Environment,
}

/// Strategy picking the house to burgle from the buildings passed this
/// tick.  `None` means nothing qualified.
pub trait VictimChooser: Send + Sync {
    fn choose_victim(
        &self,
        query: &VictimQuery<'_>,
        rng: &mut AgentRng,
    ) -> Option<(BuildingId, SuitabilityBreakdown)>;
}

/// Weighted-suitability chooser with a cubic commitment rule.
///
/// Houses are scanned in the order given (street order): the first house
/// whose suitability falls below the motive intensity *and* whose random
/// draw lands under `margin^3` is burgled.  There is no exhaustive
/// best-of scan over all candidates.
pub struct WeightedVictimChooser;

impl WeightedVictimChooser {
    /// Score one house against the agent's intensity.
    pub fn score(
        env: &Environment,
        house: BuildingId,
        hour: usize,
        weights: SuitabilityWeights,
        intensity: f64,
    ) -> SuitabilityBreakdown {
        let b = env.building(house);
        let st = env.sociotype_of(house);

        let collective_efficacy = st.collective_efficacy;
        let occupancy = st.occupancy_at(hour);
        let inaccessibility = 1.0 - b.accessibility;
        let visibility = b.visibility;
        let security = b.security;
        let traffic = b.traffic.at_hour(hour);

        let suitability = weights.collective_efficacy * collective_efficacy
            + weights.occupancy * occupancy
            + weights.accessibility * inaccessibility
            + weights.visibility * visibility
            + weights.security * security
            + weights.traffic * traffic;

        let margin = intensity - suitability;
        let probability = if margin > 0.0 { margin.powi(3).min(1.0) } else { 0.0 };

        SuitabilityBreakdown {
            collective_efficacy,
            occupancy,
            inaccessibility,
            visibility,
            security,
            traffic,
            weights,
            suitability,
            intensity,
            margin,
            probability,
        }
    }
}

impl VictimChooser for WeightedVictimChooser {
    fn choose_victim(
        &self,
        query: &VictimQuery<'_>,
        rng: &mut AgentRng,
    ) -> Option<(BuildingId, SuitabilityBreakdown)> {
        for &id in query.candidates {
            if id == query.own_home || !query.env.building(id).is_house() {
                continue;
            }
            let breakdown =
                Self::score(query.env, id, query.hour, query.weights, query.intensity);
            if breakdown.margin <= 0.0 {
                continue;
            }
            if rng.uniform() < breakdown.probability {
                return Some((id, breakdown));
            }
        }
        None
    }
}
