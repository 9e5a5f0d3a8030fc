//! Per-agent memory of visited and burgled places.

use rustc_hash::FxHashMap;

use bg_core::{BuildingId, CommunityId};

/// Visit and burglary tallies for one remembered place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryCell {
    pub visits: u32,
    pub burglaries: u32,
}

/// What one burglar remembers: how often each community and building has
/// been visited and successfully burgled.  Feeds the target chooser's
/// prior-success feature.
#[derive(Debug, Clone, Default)]
pub struct BurglarMemory {
    communities: FxHashMap<CommunityId, MemoryCell>,
    buildings: FxHashMap<BuildingId, MemoryCell>,
}

impl BurglarMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_community_visit(&mut self, id: CommunityId) {
        self.communities.entry(id).or_default().visits += 1;
    }

    pub fn record_building_visit(&mut self, id: BuildingId) {
        self.buildings.entry(id).or_default().visits += 1;
    }

    /// Record a successful burglary against both the building and its
    /// community.
    pub fn record_burglary(&mut self, community: CommunityId, building: BuildingId) {
        self.communities.entry(community).or_default().burglaries += 1;
        self.buildings.entry(building).or_default().burglaries += 1;
    }

    /// Tallies for a community (zeroes if never visited).
    pub fn community(&self, id: CommunityId) -> MemoryCell {
        self.communities.get(&id).copied().unwrap_or_default()
    }

    /// Tallies for a building (zeroes if never visited).
    pub fn building(&self, id: BuildingId) -> MemoryCell {
        self.buildings.get(&id).copied().unwrap_or_default()
    }

    /// Every community this agent has been to, sorted by id so callers
    /// iterate in a reproducible order.
    pub fn known_communities(&self) -> Vec<(CommunityId, MemoryCell)> {
        let mut known: Vec<_> = self.communities.iter().map(|(&id, &c)| (id, c)).collect();
        known.sort_by_key(|&(id, _)| id);
        known
    }

    pub fn knows_any_community(&self) -> bool {
        !self.communities.is_empty()
    }
}
