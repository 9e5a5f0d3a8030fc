//! The `Environment` — mutable store of buildings and communities with
//! spatial radius queries.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashSet;

use bg_core::{BuildingId, CommunityId, Coord};

use crate::building::{Building, BuildingKind, TrafficProfile};
use crate::community::{Community, Sociotype};

// ── R-tree building entry ─────────────────────────────────────────────────────

#[derive(Clone)]
struct BuildingEntry {
    point: [f64; 2],
    id: BuildingId,
}

impl RTreeObject for BuildingEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BuildingEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Environment ───────────────────────────────────────────────────────────────

/// Owns every building and community plus an R-tree over building positions.
///
/// Built once by [`EnvironmentBuilder`]; positions are immutable afterwards,
/// so the spatial index never needs rebuilding.  Attribute mutation
/// (security, burglary counts) goes through [`building_mut`](Self::building_mut).
pub struct Environment {
    buildings: Vec<Building>,
    communities: Vec<Community>,
    spatial_idx: RTree<BuildingEntry>,

    /// Houses whose security is currently above base and must be stepped
    /// down by the daily decay pass.
    decay_registry: FxHashSet<BuildingId>,
}

impl Environment {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    pub fn community_count(&self) -> usize {
        self.communities.len()
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn building(&self, id: BuildingId) -> &Building {
        &self.buildings[id.index()]
    }

    #[inline]
    pub fn building_mut(&mut self, id: BuildingId) -> &mut Building {
        &mut self.buildings[id.index()]
    }

    #[inline]
    pub fn community(&self, id: CommunityId) -> &Community {
        &self.communities[id.index()]
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    /// Sociotype of the community a building belongs to.
    #[inline]
    pub fn sociotype_of(&self, building: BuildingId) -> &Sociotype {
        &self.community(self.building(building).community).sociotype
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Euclidean distance between two coordinates, metres.
    #[inline]
    pub fn distance(&self, a: Coord, b: Coord) -> f64 {
        a.distance(b)
    }

    /// IDs of all buildings within `radius_m` of `center`, sorted by
    /// ascending distance.
    ///
    /// Sorting makes iteration order deterministic and approximates
    /// street order (nearest building is passed first).
    pub fn buildings_within_radius(&self, center: Coord, radius_m: f64) -> Vec<BuildingId> {
        let mut hits: Vec<(f64, BuildingId)> = self
            .spatial_idx
            .locate_within_distance([center.x, center.y], radius_m * radius_m)
            .map(|e| (e.distance_2(&[center.x, center.y]), e.id))
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Like [`buildings_within_radius`](Self::buildings_within_radius) but
    /// filtered to one kind.
    pub fn buildings_within_radius_of_kind(
        &self,
        center: Coord,
        radius_m: f64,
        kind: BuildingKind,
    ) -> Vec<BuildingId> {
        self.buildings_within_radius(center, radius_m)
            .into_iter()
            .filter(|&id| self.building(id).kind == kind)
            .collect()
    }

    /// The building of `kind` nearest to `pos`, if any exists.
    pub fn nearest_of_kind(&self, pos: Coord, kind: BuildingKind) -> Option<BuildingId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .map(|e| e.id)
            .find(|&id| self.building(id).kind == kind)
    }

    // ── Security bookkeeping ──────────────────────────────────────────────

    /// Mark a house as needing daily security decay.  Idempotent.
    pub fn register_for_decay(&mut self, id: BuildingId) {
        self.decay_registry.insert(id);
    }

    /// Number of houses currently above their base security.
    pub fn decay_registry_len(&self) -> usize {
        self.decay_registry.len()
    }

    /// Step every registered house's security toward its base by `step`,
    /// dropping houses that have settled back to base.
    ///
    /// Called once per simulated day by the coordinator.
    pub fn daily_security_decay(&mut self, step: f64) {
        let settled: Vec<BuildingId> = self
            .decay_registry
            .iter()
            .copied()
            .filter(|&id| {
                let b = &mut self.buildings[id.index()];
                b.security = (b.security - step).max(b.base_security);
                b.security <= b.base_security
            })
            .collect();
        for id in settled {
            self.decay_registry.remove(&id);
        }
    }

    /// Sum of security over all buildings.  Used by equivalence tests and
    /// telemetry.
    pub fn total_security(&self) -> f64 {
        self.buildings.iter().map(|b| b.security).sum()
    }
}

// ── EnvironmentBuilder ────────────────────────────────────────────────────────

/// Incremental construction of an [`Environment`].
///
/// Communities must be added before the buildings that belong to them.
/// `build()` bulk-loads the R-tree and wires the community → building lists.
pub struct EnvironmentBuilder {
    buildings: Vec<Building>,
    communities: Vec<Community>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self { buildings: Vec::new(), communities: Vec::new() }
    }

    /// Add a community and return its id (sequential from 0).
    pub fn add_community(&mut self, sociotype: Sociotype, centroid: Coord) -> CommunityId {
        let id = CommunityId(self.communities.len() as u16);
        self.communities.push(Community {
            id,
            sociotype,
            centroid,
            buildings: Vec::new(),
        });
        id
    }

    /// Add a building with default burglary attributes, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if `community` was not added first.
    pub fn add_building(
        &mut self,
        source_id: u64,
        coord: Coord,
        community: CommunityId,
        kind: BuildingKind,
    ) -> BuildingId {
        assert!(
            community.index() < self.communities.len(),
            "community {community} must be added before its buildings"
        );
        let id = BuildingId(self.buildings.len() as u32);
        self.buildings.push(Building {
            id,
            source_id,
            coord,
            community,
            kind,
            accessibility: 0.5,
            visibility: 0.5,
            security: 0.5,
            base_security: 0.5,
            times_burgled: 0,
            traffic: TrafficProfile::default(),
        });
        id
    }

    /// Mutable access to a building added earlier, for setting attributes
    /// beyond the defaults.
    pub fn building_mut(&mut self, id: BuildingId) -> &mut Building {
        &mut self.buildings[id.index()]
    }

    /// Consume the builder and produce an [`Environment`].
    pub fn build(mut self) -> Environment {
        // Wire community → building id lists from the back-references.
        for b in &self.buildings {
            self.communities[b.community.index()].buildings.push(b.id);
        }

        let entries: Vec<BuildingEntry> = self
            .buildings
            .iter()
            .map(|b| BuildingEntry { point: [b.coord.x, b.coord.y], id: b.id })
            .collect();

        Environment {
            buildings: self.buildings,
            communities: self.communities,
            spatial_idx: RTree::bulk_load(entries),
            decay_registry: FxHashSet::default(),
        }
    }
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
