//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  `SimClock` maps it
//! onto the simulated day:
//!
//!   hour_of_day = (tick % ticks_per_day) / ticks_per_day * 24
//!   day         = tick / ticks_per_day
//!
//! Using an integer tick as the canonical unit keeps all schedule arithmetic
//! exact (no floating-point drift).  The default resolution is 1,440 ticks
//! per day (1 simulated minute per tick), which matches the granularity the
//! time-of-day occupancy and traffic profiles were calibrated at.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and the simulated day/hour.
///
/// Cheap to copy; holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Ticks in one simulated day.  Default: 1,440 (1 minute per tick).
    pub ticks_per_day: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(ticks_per_day: u32) -> Self {
        Self { ticks_per_day, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Day count since simulation start (day 0 = first day).
    #[inline]
    pub fn day(&self) -> u64 {
        self.current_tick.0 / self.ticks_per_day as u64
    }

    /// Fractional hour of the simulated day, in `[0.0, 24.0)`.
    #[inline]
    pub fn hour_of_day(&self) -> f64 {
        let pos = (self.current_tick.0 % self.ticks_per_day as u64) as f64;
        pos / self.ticks_per_day as f64 * 24.0
    }

    /// Whole hour of the simulated day, in `0..=23`.  Used to index the
    /// hourly occupancy and traffic profiles.
    #[inline]
    pub fn hour(&self) -> usize {
        self.hour_of_day() as usize % 24
    }

    /// `true` on the last tick of a simulated day.  The coordinator runs
    /// daily bookkeeping (security decay) when this fires.
    #[inline]
    pub fn is_day_end(&self) -> bool {
        (self.current_tick.0 + 1) % self.ticks_per_day as u64 == 0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} {:05.2}h)", self.current_tick, self.day(), self.hour_of_day())
    }
}

// ── RoutingFailurePolicy ──────────────────────────────────────────────────────

/// What the coordinator does when an agent's route planning fails because the
/// road graph is disconnected.  Either way the failure is logged with the
/// offending agent and endpoints — never swallowed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutingFailurePolicy {
    /// Drop the agent's tick and carry on with the rest of the population.
    #[default]
    SkipAgent,
    /// Abort the whole run with a fatal error.
    HaltRun,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.  For 30 days at 1 tick/minute: 30 * 1440.
    pub total_ticks: u64,

    /// Ticks per simulated day.  Default: 1,440.
    pub ticks_per_day: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the step fan-out.  `None` uses all logical
    /// cores.
    pub num_threads: Option<usize>,

    /// Write output every N ticks.  0 disables periodic snapshots.
    pub output_interval_ticks: u64,

    /// Behaviour on a disconnected-graph routing failure.
    pub on_routing_failure: RoutingFailurePolicy,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.ticks_per_day)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks: 1_440,
            ticks_per_day: 1_440,
            seed: 0,
            num_threads: None,
            output_interval_ticks: 0,
            on_routing_failure: RoutingFailurePolicy::SkipAgent,
        }
    }
}
