//! Target choice: which community a burglar heads for.

use bg_core::{AgentRng, CommunityId, Coord};
use bg_env::Environment;

use crate::memory::BurglarMemory;

/// Per-agent weights over the four community attractiveness features.
#[derive(Debug, Clone, Copy)]
pub struct AttractivenessWeights {
    /// Inverse distance from the agent's current position.
    pub distance: f64,
    /// Sociotype attractiveness.
    pub attractiveness: f64,
    /// Sociotype dissimilarity from the agent's home community.
    pub dissimilarity: f64,
    /// Prior burglary successes in the community.
    pub prior_success: f64,
}

impl Default for AttractivenessWeights {
    fn default() -> Self {
        Self { distance: 1.0, attractiveness: 1.0, dissimilarity: 1.0, prior_success: 1.0 }
    }
}

/// Read-only inputs to a target choice.
pub struct TargetView<'a> {
    pub position: Coord,
    pub home_community: CommunityId,
    pub memory: &'a BurglarMemory,
    pub env: &'a Environment,
    pub weights: AttractivenessWeights,
}

/// Strategy choosing the community a burglar will travel to.
///
/// `None` means no community carried any selection mass this tick; the
/// motive retries later.
pub trait TargetChooser: Send + Sync {
    fn choose_target(&self, view: &TargetView<'_>, rng: &mut AgentRng) -> Option<CommunityId>;
}

/// Min-max normalise `values` into `[0, 1]`.
///
/// A degenerate column (every value identical) maps to 0.5 everywhere so
/// it neither favours nor penalises any candidate.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    let (min, max) = values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if max - min <= f64::EPSILON {
        return vec![0.5; values.len()];
    }
    values.iter().map(|&v| (v - min) / (max - min)).collect()
}

/// Roulette-wheel community selection over four min-max-normalised
/// features: inverse distance, sociotype attractiveness, sociotype
/// dissimilarity from home, prior burglary successes.
pub struct RouletteTargetChooser;

impl RouletteTargetChooser {
    /// Candidate communities: those in memory, sorted by id.  An agent who
    /// has been nowhere yet considers the whole map.
    fn candidates(view: &TargetView<'_>) -> Vec<(CommunityId, u32)> {
        if view.memory.knows_any_community() {
            view.memory
                .known_communities()
                .into_iter()
                .map(|(id, cell)| (id, cell.burglaries))
                .collect()
        } else {
            view.env.communities().iter().map(|c| (c.id, 0)).collect()
        }
    }
}

impl TargetChooser for RouletteTargetChooser {
    fn choose_target(&self, view: &TargetView<'_>, rng: &mut AgentRng) -> Option<CommunityId> {
        let candidates = Self::candidates(view);
        if candidates.is_empty() {
            tracing::debug!("target choice: no candidate communities");
            return None;
        }

        let home = &view.env.community(view.home_community).sociotype;

        let mut inv_dist = Vec::with_capacity(candidates.len());
        let mut attract = Vec::with_capacity(candidates.len());
        let mut dissim = Vec::with_capacity(candidates.len());
        let mut prior = Vec::with_capacity(candidates.len());
        for &(id, burglaries) in &candidates {
            let c = view.env.community(id);
            inv_dist.push(1.0 / view.position.distance(c.centroid).max(1.0));
            attract.push(c.sociotype.attractiveness);
            dissim.push(home.dissimilarity(&c.sociotype));
            prior.push(f64::from(burglaries));
        }

        let inv_dist = min_max_normalize(&inv_dist);
        let attract = min_max_normalize(&attract);
        let dissim = min_max_normalize(&dissim);
        let prior = min_max_normalize(&prior);

        let w = view.weights;
        let scores: Vec<f64> = (0..candidates.len())
            .map(|i| {
                let s = w.distance * inv_dist[i]
                    + w.attractiveness * attract[i]
                    + w.dissimilarity * dissim[i]
                    + w.prior_success * prior[i];
                s.max(0.0)
            })
            .collect();

        let total: f64 = scores.iter().sum();
        if total <= 0.0 {
            tracing::debug!("target choice: no community carries selection mass");
            return None;
        }

        let draw = rng.uniform() * total;
        let mut acc = 0.0;
        for (i, &score) in scores.iter().enumerate() {
            acc += score;
            if draw < acc {
                return Some(candidates[i].0);
            }
        }
        // Float-summation edge: the draw landed past the accumulated mass.
        tracing::debug!("target choice: roulette draw exhausted the wheel");
        None
    }
}
