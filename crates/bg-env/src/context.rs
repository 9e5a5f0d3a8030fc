//! `SimulationContext` — shared run-level counters and memoized values.
//!
//! Everything that used to be a static cache in older agent-based burglary
//! models lives here as an explicit object with an explicit lifecycle: the
//! coordinator owns one per run and passes it by reference to whatever needs
//! it.  Mutation only happens in the sequential apply phase, so no locking
//! is required.

/// Run-level shared state: burglary counter and the memoized burglary
/// security-effect radius.
#[derive(Debug, Default)]
pub struct SimulationContext {
    burglary_count: u64,
    effect_radius_m: Option<f64>,
}

impl SimulationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total burglaries committed so far this run.
    #[inline]
    pub fn burglary_count(&self) -> u64 {
        self.burglary_count
    }

    /// Bump the global burglary counter.
    #[inline]
    pub fn record_burglary(&mut self) {
        self.burglary_count += 1;
    }

    /// The radius within which a burglary still measurably raises
    /// neighbouring houses' security.
    ///
    /// Derived once by walking the `weight / distance` falloff outward in
    /// 1-metre steps until the increase drops below `cutoff`, then memoized
    /// for the rest of the run.  Distance is floored at 1 m, matching the
    /// floor applied when the effect itself is computed.
    pub fn effect_radius(&mut self, weight: f64, cutoff: f64) -> f64 {
        if let Some(r) = self.effect_radius_m {
            return r;
        }
        let mut d = 1.0f64;
        while weight / d > cutoff {
            d += 1.0;
        }
        self.effect_radius_m = Some(d);
        d
    }

    /// Clear all counters and memos.  Call between runs that reuse the
    /// context; parameters may differ, so the radius memo must not survive.
    pub fn reset(&mut self) {
        self.burglary_count = 0;
        self.effect_radius_m = None;
    }
}
