//! The route engine: plan a path, then advance it one distance increment
//! per tick.

use bg_core::{Coord, EdgeId};
use bg_spatial::{RoadNetwork, Router, SpatialError};

use crate::state::{EdgeTraversal, RouteState};
use crate::RouteError;

/// Result of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Still travelling; the agent's new coordinate.
    EnRoute(Coord),
    /// Path exhausted; the agent now sits exactly on the destination.
    Arrived(Coord),
}

impl Progress {
    /// The coordinate regardless of arrival.
    #[inline]
    pub fn coord(self) -> Coord {
        match self {
            Progress::EnRoute(c) | Progress::Arrived(c) => c,
        }
    }

    #[inline]
    pub fn arrived(self) -> bool {
        matches!(self, Progress::Arrived(_))
    }
}

/// Stateless route planner + stepper.  All per-agent state lives in
/// [`RouteState`]; the engine only holds the algorithmic logic, so one
/// instance serves every agent.
pub struct RouteEngine;

impl RouteEngine {
    /// Plan a route from `from_coord` to `dest_coord`.
    ///
    /// Both coordinates are snapped to their nearest junctions.  When the
    /// two snaps coincide the returned state carries an empty path and the
    /// first `advance` reports arrival — a deliberate approximation of the
    /// zero-length-journey case.
    ///
    /// A disconnected pair is a [`RouteError::NoRoute`] — the caller must
    /// treat it as fatal for the agent's tick, never ignore it.
    pub fn plan<R: Router + ?Sized>(
        router: &R,
        network: &RoadNetwork,
        from_coord: Coord,
        dest_coord: Coord,
    ) -> Result<RouteState, RouteError> {
        let from = network
            .nearest_node(from_coord)
            .ok_or(RouteError::EmptyNetwork)?;
        let dest = network
            .nearest_node(dest_coord)
            .ok_or(RouteError::EmptyNetwork)?;

        let route = router.route(network, from, dest).map_err(|e| match e {
            SpatialError::NoRoute { from, to } => RouteError::NoRoute { from, to },
            other => RouteError::Spatial(other),
        })?;

        Ok(RouteState {
            path: route.edges,
            path_idx: 0,
            traversal: None,
            dest_node: dest,
            dest_coord,
        })
    }

    /// Advance `state` by exactly `move_rate_m` metres from `agent_coord`.
    ///
    /// Boundary crossings carry the residual distance onto the next path
    /// edge until it is fully consumed or the path runs out; an exhausted
    /// path snaps the agent onto the destination coordinate and reports
    /// [`Progress::Arrived`].
    pub fn advance(
        state: &mut RouteState,
        agent_coord: Coord,
        move_rate_m: f64,
        network: &RoadNetwork,
    ) -> Progress {
        let mut remaining = move_rate_m;
        let mut coord = agent_coord;

        loop {
            if state.traversal.is_none() {
                if state.exhausted() {
                    return Self::arrive(state);
                }
                let edge = state.path[state.path_idx];
                state.traversal = Some(Self::enter_edge(network, edge, coord));
            }

            let Some(t) = state.traversal.as_mut() else {
                return Self::arrive(state);
            };
            let new_pos = t.pos_m + t.dir * remaining;

            // Crossing the far boundary for this direction of travel?
            let crossed = if t.dir > 0.0 { new_pos > t.length_m } else { new_pos < 0.0 };

            if !crossed {
                t.pos_m = new_pos;
                let (from_pos, to_pos) = network.edge_endpoints(t.edge);
                let frac = if t.length_m > 0.0 { t.pos_m / t.length_m } else { 1.0 };
                return Progress::EnRoute(from_pos.lerp(to_pos, frac));
            }

            // Consume the rest of this edge and carry the residual forward.
            remaining = if t.dir > 0.0 { new_pos - t.length_m } else { -new_pos };
            let boundary = if t.dir > 0.0 { t.length_m } else { 0.0 };
            let (from_pos, to_pos) = network.edge_endpoints(t.edge);
            let frac = if t.length_m > 0.0 { boundary / t.length_m } else { 1.0 };
            coord = from_pos.lerp(to_pos, frac);

            state.traversal = None;
            state.path_idx += 1;
            if state.exhausted() {
                return Self::arrive(state);
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Begin walking `edge`, choosing the travel direction by which endpoint
    /// the agent currently stands nearer to.  Starting from the nearer
    /// endpoint prevents doubling back along an edge just crossed.
    fn enter_edge(network: &RoadNetwork, edge: EdgeId, agent_coord: Coord) -> EdgeTraversal {
        let (from_pos, to_pos) = network.edge_endpoints(edge);
        let length_m = network.edge_length_m[edge.index()] as f64;

        if agent_coord.distance(from_pos) <= agent_coord.distance(to_pos) {
            EdgeTraversal { edge, pos_m: 0.0, dir: 1.0, length_m }
        } else {
            EdgeTraversal { edge, pos_m: length_m, dir: -1.0, length_m }
        }
    }

    /// Snap exactly onto the destination and clear traversal state.
    fn arrive(state: &mut RouteState) -> Progress {
        state.traversal = None;
        state.path_idx = state.path.len();
        Progress::Arrived(state.dest_coord)
    }
}

/// Ticks needed to cover `length_m` at `move_rate_m` per tick (ceiling, so
/// an agent is never early).  Handy for tests and fast-forward estimates.
pub fn ticks_to_cover(length_m: f64, move_rate_m: f64) -> u64 {
    (length_m / move_rate_m).ceil() as u64
}
