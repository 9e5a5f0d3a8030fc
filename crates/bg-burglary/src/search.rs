//! Bounded local search around a chosen target community.

use bg_core::{AgentRng, Coord};
use bg_spatial::RoadNetwork;

/// Strategy for exploring a target community once the agent is there.
///
/// The driving motive calls [`step`](Self::step) once per searching tick,
/// [`next_leg`](Self::next_leg) whenever the current exploratory leg ends,
/// and [`reinitialize`](Self::reinitialize) to start a fresh bounded search
/// (a new target, or another pass after an unsuccessful one).
pub trait SearchAlg: Send {
    /// Reset the search around a new centre.
    fn reinitialize(&mut self, centroid: Coord);

    /// Count one tick of searching.
    fn step(&mut self);

    /// Whether the time box has been used up.
    fn finished_searching(&self) -> bool;

    /// Destination for the next exploratory leg, if one can be found.
    fn next_leg(&mut self, network: &RoadNetwork, rng: &mut AgentRng) -> Option<Coord>;
}

/// Time-boxed "bulls-eye" search: random short legs between junctions
/// within a fixed radius of the target centroid, for at most
/// `max_ticks` ticks.
pub struct BullsEyeSearch {
    centroid: Coord,
    radius_m: f64,
    max_ticks: u32,
    elapsed: u32,
}

impl BullsEyeSearch {
    pub fn new(radius_m: f64, max_ticks: u32) -> Self {
        Self { centroid: Coord::default(), radius_m, max_ticks, elapsed: 0 }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

impl SearchAlg for BullsEyeSearch {
    fn reinitialize(&mut self, centroid: Coord) {
        self.centroid = centroid;
        self.elapsed = 0;
    }

    fn step(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }

    fn finished_searching(&self) -> bool {
        self.elapsed >= self.max_ticks
    }

    fn next_leg(&mut self, network: &RoadNetwork, rng: &mut AgentRng) -> Option<Coord> {
        let nodes = network.nodes_within_radius(self.centroid, self.radius_m);
        if let Some(&node) = rng.choose(&nodes) {
            return Some(network.node_pos[node.index()]);
        }
        // No junction inside the radius: fall back to the one nearest the
        // centroid so the agent at least reaches the area.
        network.nearest_node(self.centroid).map(|n| network.node_pos[n.index()])
    }
}
