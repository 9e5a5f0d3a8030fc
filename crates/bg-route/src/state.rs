//! Per-agent route-following state.

use bg_core::{Coord, EdgeId, NodeId};

/// Position on the edge currently being walked.
///
/// `pos_m` is measured from the edge's *from* endpoint regardless of travel
/// direction; `dir` is `+1.0` when walking from → to and `-1.0` when walking
/// to → from (an undirected street entered at its far end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTraversal {
    pub edge: EdgeId,
    /// Distance from the edge's `from` endpoint, metres, in `[0, length_m]`.
    pub pos_m: f64,
    /// `+1.0` (from → to) or `-1.0` (to → from).
    pub dir: f64,
    /// Cached edge length, metres.
    pub length_m: f64,
}

/// The full travel state of one agent: the planned path plus progress along
/// it.
///
/// The traversal is `None` in exactly two situations: before the first
/// [`advance`][crate::RouteEngine::advance] call, and for the degenerate
/// zero-length path when origin and destination snap to the same junction.
#[derive(Debug, Clone)]
pub struct RouteState {
    /// Directed edges to traverse, in order.
    pub path: Vec<EdgeId>,
    /// Index into `path` of the edge currently (or next) being walked.
    pub path_idx: usize,
    /// Progress along the current edge, if one has been entered.
    pub traversal: Option<EdgeTraversal>,
    /// Junction the path ends at.
    pub dest_node: NodeId,
    /// Exact coordinate the agent snaps to on arrival (may differ slightly
    /// from the junction position when the true destination is off-network).
    pub dest_coord: Coord,
}

impl RouteState {
    /// `true` once every edge of the path has been consumed.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.path_idx >= self.path.len()
    }

    /// Total number of edges planned.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
