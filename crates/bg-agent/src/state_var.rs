//! Decaying need variables.

/// A scalar need (sleep level, social level, drug level) that deteriorates
/// every tick and is satisfied by actions.
///
/// The value is strictly positive at all times: a decay that would reach
/// zero or below clamps back to the configured floor instead, and that
/// underflow is reported so callers and logs can observe it.
#[derive(Debug, Clone)]
pub struct StateVariable {
    name: &'static str,
    value: f64,
    deterioration: f64,
    floor: f64,
}

impl StateVariable {
    pub fn new(name: &'static str, initial: f64, deterioration: f64, floor: f64) -> Self {
        debug_assert!(initial > 0.0 && floor > 0.0);
        Self { name, value: initial, deterioration, floor }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// One tick of deterioration.  Returns `true` when the value underflowed
    /// and was clamped to the floor.
    pub fn decay(&mut self) -> bool {
        let next = self.value - self.deterioration;
        if next <= 0.0 {
            tracing::warn!(name = self.name, floor = self.floor, "state variable underflow");
            self.value = self.floor;
            return true;
        }
        self.value = next;
        false
    }

    /// Satisfy the need by `amount` (from a Sleep / Socialise / BuyDrugs
    /// action).
    pub fn add(&mut self, amount: f64) {
        self.value += amount;
    }
}
