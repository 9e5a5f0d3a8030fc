//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The simulation calls routing via the [`Router`] trait so applications can
//! swap in custom implementations (A*, contraction hierarchies, cognitive
//! road-choice models) without touching the core.  The default
//! [`DijkstraRouter`] is sufficient for city-scale networks.
//!
//! # Cost units
//!
//! Burglars move on foot at a fixed distance per tick, so the edge cost is
//! simply its length.  Internally lengths are accumulated in centimetres
//! (`u32`) for exact comparisons; `Route` exposes `total_length_m`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bg_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;
use crate::SpatialError;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered list of directed `EdgeId`s and
/// the total walking distance.
#[derive(Debug, Clone)]
pub struct Route {
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeId>,
    /// Cumulative length in metres.
    pub total_length_m: f32,
}

impl Route {
    /// `true` if the source and destination are the same junction.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across worker
/// threads during the parallel step phase.
pub trait Router: Send + Sync {
    /// Compute a shortest route from `from` to `to`.
    ///
    /// `from == to` is handled as a trivial empty route rather than an
    /// error.  A disconnected pair returns [`SpatialError::NoRoute`].
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
    ) -> Result<Route, SpatialError>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph, edge length as
/// cost.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
    ) -> Result<Route, SpatialError> {
        dijkstra(network, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Edge cost in centimetres.  Integer costs keep heap ordering exact.
#[inline]
fn edge_cost_cm(network: &RoadNetwork, edge: EdgeId) -> u32 {
    (network.edge_length_m[edge.index()] * 100.0) as u32
}

fn dijkstra(network: &RoadNetwork, from: NodeId, to: NodeId) -> Result<Route, SpatialError> {
    if from == to {
        return Ok(Route { edges: vec![], total_length_m: 0.0 });
    }
    if from.index() >= network.node_count() || to.index() >= network.node_count() {
        return Err(SpatialError::NodeNotFound(if from.index() >= network.node_count() {
            from
        } else {
            to
        }));
    }

    let n = network.node_count();
    // dist[v] = best known cost (cm) to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, prev_edge, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(edge_cost_cm(network, edge));

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(network: &RoadNetwork, prev_edge: Vec<EdgeId>, to: NodeId) -> Route {
    let mut edges = Vec::new();
    let mut total = 0.0f32;
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        total += network.edge_length_m[e.index()];
        edges.push(e);
        cur = network.edge_from[e.index()];
    }
    edges.reverse();
    Route { edges, total_length_m: total }
}
