//! `bg-burglary` — the burglary decision pipeline.
//!
//! Three independently substitutable strategies compose the pipeline:
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`memory`] | `BurglarMemory` — per-agent visit / burglary counts       |
//! | [`target`] | `TargetChooser` — which community to head for             |
//! | [`search`] | `SearchAlg` — bounded exploration around the target       |
//! | [`victim`] | `VictimChooser` — which passed house to hit, if any       |
//! | [`event`]  | `BurglaryEvent` — the full decision record                |
//! | [`effects`]| `apply_burglary` — environment side-effects (apply phase) |
//!
//! Strategy faults (no community has selection mass, no house qualifies)
//! are not errors: each chooser returns `None` and the driving motive
//! retries on a later tick.  Only the side-effect application mutates
//! shared state, and the coordinator runs it single-writer.

pub mod effects;
pub mod event;
pub mod memory;
pub mod search;
pub mod target;
pub mod victim;

#[cfg(test)]
mod tests;

pub use effects::apply_burglary;
pub use event::BurglaryEvent;
pub use memory::{BurglarMemory, MemoryCell};
pub use search::{BullsEyeSearch, SearchAlg};
pub use target::{
    min_max_normalize, AttractivenessWeights, RouletteTargetChooser, TargetChooser, TargetView,
};
pub use victim::{
    SuitabilityBreakdown, SuitabilityWeights, VictimChooser, VictimQuery, WeightedVictimChooser,
};
