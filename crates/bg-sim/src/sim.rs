//! The running simulation.

use bg_agent::{step_agent, AgentError, Burglar, StepReport, WorldView};
use bg_burglary::apply_burglary;
use bg_core::{AgentId, ModelParams, RoutingFailurePolicy, SimClock, SimConfig, SimRng};
use bg_env::{Environment, SimulationContext};
use bg_spatial::{RoadNetwork, Router};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{SimError, SimResult};
use crate::observer::SimObserver;

type StepResults = Vec<(AgentId, Result<StepReport, AgentError>)>;

/// A fully built simulation.  Constructed by [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config: SimConfig,
    pub(crate) params: ModelParams,
    pub(crate) clock: SimClock,
    pub(crate) env: Environment,
    pub(crate) network: RoadNetwork,
    pub(crate) router: Box<dyn Router>,
    pub(crate) agents: Vec<Burglar>,
    pub(crate) ctx: SimulationContext,
    pub(crate) rng: SimRng,
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("tick", &self.clock.current_tick)
            .field("agents", &self.agents.len())
            .finish_non_exhaustive()
    }
}

impl Sim {
    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn ctx(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn agents(&self) -> &[Burglar] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Burglar> {
        self.agents.get(id.index())
    }

    /// Telemetry surface: wealth, current action, guiding motive.

    pub fn agent_wealth(&self, id: AgentId) -> Option<f64> {
        self.agent(id).map(|a| a.wealth)
    }

    pub fn agent_action(&self, id: AgentId) -> Option<&'static str> {
        self.agent(id).map(|a| a.current_action_name())
    }

    pub fn agent_motive(&self, id: AgentId) -> Option<(&'static str, f64)> {
        self.agent(id).map(|a| (a.guiding_motive_name(), a.guiding_intensity))
    }

    // ── The tick ──────────────────────────────────────────────────────────

    /// Advance the whole population by one tick.
    ///
    /// Step phase: dispatch order is shuffled for fairness, then every
    /// agent steps against a read-only view of the tick-start world.
    /// Apply phase: results are walked in ascending agent id and burglary
    /// side-effects are applied one event at a time.  A failed agent is
    /// skipped or halts the run per the configured policy; either way the
    /// other agents' completed steps stand.
    pub fn process_tick(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);

        let mut results: StepResults = {
            let mut refs: Vec<&mut Burglar> = self.agents.iter_mut().collect();
            self.rng.shuffle(&mut refs);
            let world = WorldView {
                env: &self.env,
                network: &self.network,
                router: self.router.as_ref(),
                params: &self.params,
                clock: &self.clock,
            };
            #[cfg(feature = "parallel")]
            {
                step_refs(self.pool.as_ref(), refs, &world)
            }
            #[cfg(not(feature = "parallel"))]
            {
                step_refs(refs, &world)
            }
        };
        results.sort_by_key(|&(id, _)| id);

        let mut tick_burglaries = 0u32;
        for (agent_id, result) in results {
            match result {
                Ok(report) => {
                    if let Some(ev) = report.burglary {
                        apply_burglary(&mut self.env, &mut self.ctx, &self.params, &ev);
                        observer.on_burglary(&ev);
                        tick_burglaries += 1;
                    }
                }
                Err(err) => match self.config.on_routing_failure {
                    RoutingFailurePolicy::SkipAgent => {
                        tracing::error!(agent = %agent_id, error = %err, "agent tick failed, skipping agent");
                    }
                    RoutingFailurePolicy::HaltRun => {
                        tracing::error!(agent = %agent_id, error = %err, "agent tick failed, halting run");
                        return Err(SimError::Agent { agent: agent_id, source: err });
                    }
                },
            }
        }

        if self.clock.is_day_end() {
            self.env.daily_security_decay(self.params.security_daily_decay);
            observer.on_day_end(self.clock.day(), &self.env);
        }

        observer.on_tick_end(tick, tick_burglaries, &self.env, &self.ctx);
        self.clock.advance();
        Ok(())
    }

    /// Run until the configured tick count.
    pub fn run(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        let end = self.config.end_tick();
        while self.clock.current_tick < end {
            self.process_tick(observer)?;
        }
        observer.on_sim_end(&self.ctx);
        Ok(())
    }

    /// Run exactly `n` ticks (no end-of-run hook).
    pub fn run_ticks(&mut self, n: u64, observer: &mut dyn SimObserver) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }
}

/// Step every agent, each worker running action logic then that agent's
/// decay.  Joins on all workers before returning.
#[cfg(feature = "parallel")]
fn step_refs(
    pool: Option<&rayon::ThreadPool>,
    refs: Vec<&mut Burglar>,
    world: &WorldView<'_>,
) -> StepResults {
    let step_all = || {
        refs.into_par_iter()
            .map(|agent| {
                let id = agent.id;
                (id, step_agent(agent, world))
            })
            .collect()
    };
    match pool {
        Some(p) => p.install(step_all),
        None => step_all(),
    }
}

#[cfg(not(feature = "parallel"))]
fn step_refs(refs: Vec<&mut Burglar>, world: &WorldView<'_>) -> StepResults {
    refs.into_iter()
        .map(|agent| {
            let id = agent.id;
            (id, step_agent(agent, world))
        })
        .collect()
}
