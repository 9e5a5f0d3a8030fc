//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`) are sorted by
//! source node and indexed by `EdgeId`, so iterating one node's outgoing
//! edges is a contiguous memory scan — ideal for Dijkstra's inner loop.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps projected `(x, y)` to the nearest `NodeId`.
//! Used to snap agent and building coordinates onto road junctions.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use bg_core::{Coord, EdgeId, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node snapping.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    /// Position of each junction.  Indexed by `NodeId`.
    pub node_pos: Vec<Coord>,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in metres.  This is both the Dijkstra cost and
    /// the distance the route engine walks per tick.
    pub edge_length_m: Vec<f32>,

    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    ///
    /// Any routing request against an empty network returns
    /// [`SpatialError::NoRoute`](crate::SpatialError::NoRoute).
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// The two endpoint positions of `edge`, `(from, to)`.
    #[inline]
    pub fn edge_endpoints(&self, edge: EdgeId) -> (Coord, Coord) {
        (
            self.node_pos[self.edge_from[edge.index()].index()],
            self.node_pos[self.edge_to[edge.index()].index()],
        )
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road junction to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn nearest_node(&self, pos: Coord) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest junctions to `pos`, sorted by ascending
    /// distance.  Used by the bulls-eye search to pick exploratory legs.
    pub fn k_nearest_nodes(&self, pos: Coord, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// All junctions within `radius_m` of `pos`.
    pub fn nodes_within_radius(&self, pos: Coord, radius_m: f64) -> Vec<NodeId> {
        self.spatial_idx
            .locate_within_distance([pos.x, pos.y], radius_m * radius_m)
            .map(|e| e.id)
            .collect()
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts junctions and directed edges in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and bulk-loads the
/// R-tree.
///
/// # Example
///
/// ```
/// use bg_core::Coord;
/// use bg_spatial::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(Coord::new(0.0, 0.0));
/// let c = b.add_node(Coord::new(400.0, 0.0));
/// b.add_street(a, c, 400.0); // both directions
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2);
/// ```
pub struct RoadNetworkBuilder {
    nodes: Vec<Coord>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    length_m: f32,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of junctions and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a junction and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Coord) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to` of `length_m` metres.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: f32) {
        self.raw_edges.push(RawEdge { from, to, length_m });
    }

    /// Convenience: add edges in **both directions** for an undirected
    /// street segment (the common case).
    pub fn add_street(&mut self, a: NodeId, b: NodeId, length_m: f32) {
        self.add_directed_edge(a, b, length_m);
        self.add_directed_edge(b, a, length_m);
    }

    /// Like [`add_street`](Self::add_street) but computes the length from
    /// the junction positions.
    pub fn add_street_auto(&mut self, a: NodeId, b: NodeId) {
        let len = self.nodes[a.index()].distance(self.nodes[b.index()]) as f32;
        self.add_street(a, b, len);
    }

    /// Look up the position of a junction added earlier.
    pub fn node_pos(&self, id: NodeId) -> Coord {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f32> = raw.iter().map(|e| e.length_m).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction.
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadNetwork {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
