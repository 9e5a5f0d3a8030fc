//! Building types and burglary-relevant attributes.

use bg_core::{BuildingId, CommunityId, Coord};

// ── BuildingKind ──────────────────────────────────────────────────────────────

/// What a building is used for.  Only houses can be burgled; the other kinds
/// anchor the agents' daily routines.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BuildingKind {
    House,
    Workplace,
    Social,
    DrugDealer,
}

impl BuildingKind {
    /// Human-readable label for output rows.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildingKind::House => "house",
            BuildingKind::Workplace => "workplace",
            BuildingKind::Social => "social",
            BuildingKind::DrugDealer => "drug_dealer",
        }
    }
}

impl std::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TrafficProfile ────────────────────────────────────────────────────────────

/// Hourly street-traffic weights for the road a building fronts onto.
///
/// Values are relative volumes in `[0, 1]`, indexed by whole hour.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficProfile(pub [f32; 24]);

impl TrafficProfile {
    /// A flat profile with the same volume all day.
    pub fn flat(volume: f32) -> Self {
        Self([volume; 24])
    }

    /// Volume at the given whole hour (`0..=23`).
    #[inline]
    pub fn at_hour(&self, hour: usize) -> f64 {
        self.0[hour % 24] as f64
    }
}

impl Default for TrafficProfile {
    fn default() -> Self {
        Self::flat(0.5)
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// One building in the environment.
///
/// `id` is assigned sequentially at load time and is the index into
/// `Environment::buildings`; `source_id` preserves whatever identifier the
/// upstream GIS data carried and plays no role in the core.
#[derive(Clone, Debug)]
pub struct Building {
    pub id: BuildingId,
    pub source_id: u64,
    pub coord: Coord,
    pub community: CommunityId,
    pub kind: BuildingKind,

    /// How easy the building is to enter unseen, `[0, 1]`.
    pub accessibility: f64,
    /// How overlooked the building is from the street, `[0, 1]`.
    pub visibility: f64,
    /// Current security level.  Rises when the house (or a neighbour) is
    /// burgled and decays daily toward `base_security`.
    pub security: f64,
    /// The level security settles back to.
    pub base_security: f64,
    /// How many times this building has been burgled.
    pub times_burgled: u32,
    /// Hourly street-traffic weights.
    pub traffic: TrafficProfile,
}

impl Building {
    /// `true` for buildings the victim chooser may consider.
    #[inline]
    pub fn is_house(&self) -> bool {
        self.kind == BuildingKind::House
    }
}
