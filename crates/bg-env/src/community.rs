//! Communities and their aggregate sociotype descriptors.

use bg_core::{BuildingId, CommunityId, Coord};

// ── Sociotype ─────────────────────────────────────────────────────────────────

/// Aggregate demographic/behavioural character of a community, used by the
/// target chooser (attractiveness, dissimilarity) and the victim chooser
/// (collective efficacy, occupancy).
#[derive(Clone, Debug)]
pub struct Sociotype {
    /// How attractive the community looks to an offender, `[0, 1]`.
    pub attractiveness: f64,
    /// Willingness of residents to intervene / informal guardianship, `[0, 1]`.
    pub collective_efficacy: f64,
    /// Fraction of homes occupied at each whole hour of the day.
    pub occupancy: [f32; 24],
}

impl Sociotype {
    /// Occupancy at the given whole hour (`0..=23`).
    #[inline]
    pub fn occupancy_at(&self, hour: usize) -> f64 {
        self.occupancy[hour % 24] as f64
    }

    /// Similarity to another sociotype in `[0, 1]` (1 = identical).
    ///
    /// Compares attractiveness, collective efficacy, and mean occupancy;
    /// each term contributes its absolute difference.
    pub fn similarity(&self, other: &Sociotype) -> f64 {
        let occ_a = self.occupancy.iter().sum::<f32>() as f64 / 24.0;
        let occ_b = other.occupancy.iter().sum::<f32>() as f64 / 24.0;
        let diff = (self.attractiveness - other.attractiveness).abs()
            + (self.collective_efficacy - other.collective_efficacy).abs()
            + (occ_a - occ_b).abs();
        (1.0 - diff / 3.0).clamp(0.0, 1.0)
    }

    /// `1 - similarity`.
    #[inline]
    pub fn dissimilarity(&self, other: &Sociotype) -> f64 {
        1.0 - self.similarity(other)
    }
}

impl Default for Sociotype {
    fn default() -> Self {
        Self {
            attractiveness: 0.5,
            collective_efficacy: 0.5,
            occupancy: [0.5; 24],
        }
    }
}

// ── Community ─────────────────────────────────────────────────────────────────

/// A community (output area): a sociotype plus the buildings inside it.
///
/// Buildings hold the back-reference (`Building::community`); the community
/// only keeps the id list.
#[derive(Clone, Debug)]
pub struct Community {
    pub id: CommunityId,
    pub sociotype: Sociotype,
    /// Geographic centre, used as the burglary search anchor.
    pub centroid: Coord,
    pub buildings: Vec<BuildingId>,
}
