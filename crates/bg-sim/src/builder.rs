//! Validated simulation construction.

use bg_agent::BurglarBuilder;
use bg_core::{ModelParams, SimConfig, SimRng};
use bg_env::{Environment, SimulationContext};
use bg_spatial::{DijkstraRouter, RoadNetwork, Router};

use crate::error::{SimError, SimResult};
use crate::sim::Sim;

/// Assembles a [`Sim`], checking the pieces fit together before the first
/// tick runs.
pub struct SimBuilder {
    config: SimConfig,
    params: ModelParams,
    env: Option<Environment>,
    network: Option<RoadNetwork>,
    router: Option<Box<dyn Router>>,
    agents: Vec<BurglarBuilder>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            params: ModelParams::default(),
            env: None,
            network: None,
            router: None,
            agents: Vec::new(),
        }
    }

    pub fn params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn environment(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn network(mut self, network: RoadNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Replace the default Dijkstra router.
    pub fn router(mut self, router: Box<dyn Router>) -> Self {
        self.router = Some(router);
        self
    }

    /// Queue an agent; it is built against the environment in `build()`.
    pub fn agent(mut self, agent: BurglarBuilder) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> SimResult<Sim> {
        if self.config.ticks_per_day == 0 {
            return Err(SimError::Config("ticks_per_day must be positive".into()));
        }
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be positive".into()));
        }
        let env = self.env.ok_or_else(|| SimError::Config("no environment given".into()))?;
        if env.community_count() == 0 {
            return Err(SimError::Config("environment has no communities".into()));
        }
        let network =
            self.network.ok_or_else(|| SimError::Config("no road network given".into()))?;
        if network.is_empty() && !self.agents.is_empty() {
            return Err(SimError::Config("road network has no junctions".into()));
        }

        let agents: Vec<_> = self
            .agents
            .into_iter()
            .map(|b| b.build(&env, &self.params, self.config.seed))
            .collect();

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        Ok(Sim {
            clock: self.config.make_clock(),
            rng: SimRng::new(self.config.seed),
            config: self.config,
            params: self.params,
            env,
            network,
            router: self.router.unwrap_or_else(|| Box::new(DijkstraRouter)),
            agents,
            ctx: SimulationContext::new(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
