//! Motives: competing behavioural drives.
//!
//! Each motive computes an intensity from the agent's current situation
//! (memoized per tick so repeated scheduler queries stay cheap) and knows
//! how to build the action stack that satisfies it.  Stacks are in reverse
//! order of execution: the last element is performed next.

use bg_core::{ModelParams, Tick};

use crate::action::{Action, BurglaryDrive, Destination, TravelPlan, WorkShift};

/// The slice of agent state an intensity formula may read.
#[derive(Debug, Clone, Copy)]
pub struct MotiveView {
    /// Value of the state variable owned by this motive's slot, if any.
    pub state_value: Option<f64>,
    pub wealth: f64,
    pub at_home: bool,
    pub has_workplace: bool,
}

/// A behavioural drive competing to guide the agent.
pub trait Motive: Send {
    fn name(&self) -> &'static str;

    /// Intensity at `tick`.  Implementations memoize by tick number: the
    /// scheduler may query several times within one tick.
    fn intensity(&mut self, tick: Tick, view: &MotiveView, params: &ModelParams) -> f64;

    /// Build the action stack that satisfies this motive, last element
    /// first to perform.  Never returns an empty stack.
    fn build_actions(&self, view: &MotiveView, params: &ModelParams) -> Vec<Action>;

    /// Per-agent sensitivity multiplier.
    fn factor(&self) -> f64;
}

// ── Memoization ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
struct IntensityMemo(Option<(Tick, f64)>);

impl IntensityMemo {
    fn get_or(&mut self, tick: Tick, compute: impl FnOnce() -> f64) -> f64 {
        if let Some((t, v)) = self.0 {
            if t == tick {
                return v;
            }
        }
        let v = compute();
        self.0 = Some((tick, v));
        v
    }
}

// ── Need-driven motives ───────────────────────────────────────────────────────

/// Shared intensity form for the need motives: inversely proportional to
/// the owning state variable, so urgency grows as the need decays.  The
/// variable is strictly positive, so the division is always defined.
fn need_intensity(factor: f64, view: &MotiveView, params: &ModelParams) -> f64 {
    let value = view.state_value.unwrap_or(params.satisfied_level);
    factor * params.motive_factor / value
}

/// The urge to sleep.  Satisfied at home.
pub struct SleepMotive {
    factor: f64,
    memo: IntensityMemo,
}

impl SleepMotive {
    pub fn new(factor: f64) -> Self {
        Self { factor, memo: IntensityMemo::default() }
    }
}

impl Motive for SleepMotive {
    fn name(&self) -> &'static str {
        "sleep"
    }

    fn intensity(&mut self, tick: Tick, view: &MotiveView, params: &ModelParams) -> f64 {
        let factor = self.factor;
        self.memo.get_or(tick, || need_intensity(factor, view, params))
    }

    fn build_actions(&self, _view: &MotiveView, _params: &ModelParams) -> Vec<Action> {
        vec![Action::Sleep, Action::Travel(TravelPlan::to(Destination::Home))]
    }

    fn factor(&self) -> f64 {
        self.factor
    }
}

/// The urge to socialise.  Costs money; a broke agent with a job works a
/// shift first.
pub struct SocialMotive {
    factor: f64,
    memo: IntensityMemo,
}

impl SocialMotive {
    pub fn new(factor: f64) -> Self {
        Self { factor, memo: IntensityMemo::default() }
    }
}

impl Motive for SocialMotive {
    fn name(&self) -> &'static str {
        "social"
    }

    fn intensity(&mut self, tick: Tick, view: &MotiveView, params: &ModelParams) -> f64 {
        let factor = self.factor;
        self.memo.get_or(tick, || need_intensity(factor, view, params))
    }

    fn build_actions(&self, view: &MotiveView, params: &ModelParams) -> Vec<Action> {
        let mut stack = vec![
            Action::Socialise { paid: false },
            Action::Travel(TravelPlan::to(Destination::SocialVenue)),
        ];
        if view.wealth < params.social_cost && view.has_workplace {
            stack.push(Action::Work(WorkShift::new(params.work_shift_ticks)));
            stack.push(Action::Travel(TravelPlan::to(Destination::Workplace)));
        }
        stack
    }

    fn factor(&self) -> f64 {
        self.factor
    }
}

/// The urge to take drugs.  Buying costs money; a broke agent with a job
/// works a shift first — one without a job is left to the burglary motive.
pub struct DrugsMotive {
    factor: f64,
    memo: IntensityMemo,
}

impl DrugsMotive {
    pub fn new(factor: f64) -> Self {
        Self { factor, memo: IntensityMemo::default() }
    }
}

impl Motive for DrugsMotive {
    fn name(&self) -> &'static str {
        "drugs"
    }

    fn intensity(&mut self, tick: Tick, view: &MotiveView, params: &ModelParams) -> f64 {
        let factor = self.factor;
        self.memo.get_or(tick, || need_intensity(factor, view, params))
    }

    fn build_actions(&self, view: &MotiveView, params: &ModelParams) -> Vec<Action> {
        let mut stack = vec![
            Action::BuyDrugs,
            Action::Travel(TravelPlan::to(Destination::DrugDealer)),
        ];
        if view.wealth < params.drug_cost && view.has_workplace {
            stack.push(Action::Work(WorkShift::new(params.work_shift_ticks)));
            stack.push(Action::Travel(TravelPlan::to(Destination::Workplace)));
        }
        stack
    }

    fn factor(&self) -> f64 {
        self.factor
    }
}

/// The urge to burgle, driven by a shortage of money rather than a state
/// variable.
pub struct BurglaryMotive {
    factor: f64,
    memo: IntensityMemo,
}

impl BurglaryMotive {
    pub fn new(factor: f64) -> Self {
        Self { factor, memo: IntensityMemo::default() }
    }
}

impl Motive for BurglaryMotive {
    fn name(&self) -> &'static str {
        "burglary"
    }

    fn intensity(&mut self, tick: Tick, view: &MotiveView, params: &ModelParams) -> f64 {
        let factor = self.factor;
        let wealth = view.wealth;
        self.memo
            .get_or(tick, || factor * params.motive_factor * params.satisfied_level / (wealth + 1.0))
    }

    fn build_actions(&self, _view: &MotiveView, _params: &ModelParams) -> Vec<Action> {
        vec![Action::Burgle(BurglaryDrive::new())]
    }

    fn factor(&self) -> f64 {
        self.factor
    }
}

/// The default drive: constant intensity equal to the configured idling
/// threshold, so it wins exactly when nothing else exceeds that threshold.
/// Idling happens at home.
pub struct DoNothingMotive;

impl Motive for DoNothingMotive {
    fn name(&self) -> &'static str {
        "do-nothing"
    }

    fn intensity(&mut self, _tick: Tick, _view: &MotiveView, params: &ModelParams) -> f64 {
        params.do_nothing_intensity
    }

    fn build_actions(&self, view: &MotiveView, _params: &ModelParams) -> Vec<Action> {
        let mut stack = vec![Action::DoNothing];
        if !view.at_home {
            stack.push(Action::Travel(TravelPlan::to(Destination::Home)));
        }
        stack
    }

    fn factor(&self) -> f64 {
        1.0
    }
}
