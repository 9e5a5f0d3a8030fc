//! Plain data row types written by output backends.

use bg_burglary::BurglaryEvent;

/// One committed burglary, flattened for tabular output.
///
/// Records the final decision quantities (suitability, intensity, margin,
/// probability); the six per-factor terms behind the suitability sum are
/// not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurglaryEventRow {
    pub tick:         u64,
    pub burglar_id:   u32,
    pub house_id:     u32,
    pub community_id: u16,
    pub x:            f64,
    pub y:            f64,
    pub suitability:  f64,
    pub intensity:    f64,
    pub margin:       f64,
    pub probability:  f64,
}

impl From<&BurglaryEvent> for BurglaryEventRow {
    fn from(event: &BurglaryEvent) -> Self {
        Self {
            tick:         event.tick.0,
            burglar_id:   event.burglar.0,
            house_id:     event.house.0,
            community_id: event.community.0,
            x:            event.coord.x,
            y:            event.coord.y,
            suitability:  event.breakdown.suitability,
            intensity:    event.breakdown.intensity,
            margin:       event.breakdown.margin,
            probability:  event.breakdown.probability,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    /// Burglaries committed this tick.
    pub burglaries:       u32,
    /// Running total for the whole run.
    pub total_burglaries: u64,
    /// Sum of every building's security level after the apply phase.
    pub total_security:   f64,
}
