//! The record of one committed burglary.

use bg_core::{AgentId, BuildingId, CommunityId, Coord, Tick};

use crate::victim::SuitabilityBreakdown;

/// Emitted by the agent phase when a burglary commits, applied to the
/// environment by the coordinator's sequential apply phase, and handed to
/// observers and history writers unchanged.
#[derive(Debug, Clone, Copy)]
pub struct BurglaryEvent {
    pub burglar: AgentId,
    pub house: BuildingId,
    pub community: CommunityId,
    /// Where the house stands.
    pub coord: Coord,
    pub tick: Tick,
    /// The full calculation that led to the decision.
    pub breakdown: SuitabilityBreakdown,
}
