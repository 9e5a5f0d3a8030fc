//! Unit tests for bg-agent.

#[cfg(test)]
mod helpers {
    use bg_core::{BuildingId, Coord, ModelParams};
    use bg_env::{BuildingKind, Environment, EnvironmentBuilder, Sociotype};
    use bg_spatial::{RoadNetwork, RoadNetworkBuilder};

    /// A straight main road with two communities on it: the agent's own
    /// neighbourhood (home, workplace, social venue, drug dealer) and a
    /// residential area of three houses further along.
    pub struct Town {
        pub env: Environment,
        pub network: RoadNetwork,
        pub params: ModelParams,
        pub home: BuildingId,
        pub work: BuildingId,
        pub venue: BuildingId,
        pub dealer: BuildingId,
        pub far_houses: Vec<BuildingId>,
    }

    pub fn town() -> Town {
        let mut nb = RoadNetworkBuilder::new();
        let nodes: Vec<_> =
            (0..8).map(|i| nb.add_node(Coord::new(i as f64 * 100.0, 0.0))).collect();
        for w in nodes.windows(2) {
            nb.add_street(w[0], w[1], 100.0);
        }
        let network = nb.build();

        let mut eb = EnvironmentBuilder::new();
        let own = eb.add_community(Sociotype::default(), Coord::new(150.0, 0.0));
        let resi = eb.add_community(Sociotype::default(), Coord::new(600.0, 0.0));
        let home = eb.add_building(0, Coord::new(0.0, 0.0), own, BuildingKind::House);
        let work = eb.add_building(1, Coord::new(100.0, 0.0), own, BuildingKind::Workplace);
        let venue = eb.add_building(2, Coord::new(200.0, 0.0), own, BuildingKind::Social);
        let dealer = eb.add_building(3, Coord::new(300.0, 0.0), own, BuildingKind::DrugDealer);
        let far_houses: Vec<_> = [500.0, 600.0, 700.0]
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                eb.add_building(10 + i as u64, Coord::new(x, 0.0), resi, BuildingKind::House)
            })
            .collect();

        Town {
            env: eb.build(),
            network,
            params: ModelParams::default(),
            home,
            work,
            venue,
            dealer,
            far_houses,
        }
    }
}

#[cfg(test)]
mod decay {
    use crate::StateVariable;

    #[test]
    fn underflow_clamps_to_floor() {
        let mut sv = StateVariable::new("sleep level", 0.001, 0.002, 0.5);
        assert!(sv.decay());
        assert_eq!(sv.value(), 0.5);
        // Recovered; the next decay is ordinary.
        assert!(!sv.decay());
        assert!((sv.value() - 0.498).abs() < 1e-12);
    }

    #[test]
    fn ordinary_decay_subtracts() {
        let mut sv = StateVariable::new("social level", 2.0, 0.002, 0.5);
        assert!(!sv.decay());
        assert!((sv.value() - 1.998).abs() < 1e-12);
        assert!(sv.value() > 0.0);
    }
}

#[cfg(test)]
mod hysteresis {
    use bg_core::{AgentId, ModelParams, SimClock, Tick};
    use bg_spatial::DijkstraRouter;
    use crate::{
        Action, Burglar, BurglarBuilder, Motive, MotiveScheduler, MotiveSlot, MotiveView,
        WorldView,
    };

    struct FixedMotive {
        name: &'static str,
        level: f64,
    }

    impl Motive for FixedMotive {
        fn name(&self) -> &'static str {
            self.name
        }
        fn intensity(&mut self, _tick: Tick, _view: &MotiveView, _params: &ModelParams) -> f64 {
            self.level
        }
        fn build_actions(&self, _view: &MotiveView, _params: &ModelParams) -> Vec<Action> {
            vec![Action::DoNothing]
        }
        fn factor(&self) -> f64 {
            1.0
        }
    }

    fn agent_with_levels(town: &super::helpers::Town, incumbent: f64, challenger: f64) -> Burglar {
        let mut agent =
            BurglarBuilder::new(AgentId(0), town.home).build(&town.env, &town.params, 7);
        agent.motives = vec![
            MotiveSlot {
                state_var: None,
                motive: Box::new(FixedMotive { name: "incumbent", level: incumbent }),
                actions: vec![Action::DoNothing],
            },
            MotiveSlot {
                state_var: None,
                motive: Box::new(FixedMotive { name: "challenger", level: challenger }),
                actions: Vec::new(),
            },
        ];
        agent.guiding = 0;
        agent
    }

    #[test]
    fn near_equal_challenger_does_not_switch() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        // Difference 0.04 is inside the 0.05 margin, even though the
        // challenger is strictly higher.
        let mut agent = agent_with_levels(&town, 1.0, 1.04);
        assert_eq!(MotiveScheduler::select(&mut agent, &world), 0);
        assert_eq!(agent.guiding_motive_name(), "incumbent");
    }

    #[test]
    fn clear_winner_switches_and_rebuilds() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = agent_with_levels(&town, 1.0, 1.06);
        assert_eq!(MotiveScheduler::select(&mut agent, &world), 1);
        assert_eq!(agent.guiding_motive_name(), "challenger");
        assert!(!agent.motives[1].actions.is_empty());
        assert!((agent.guiding_intensity - 1.06).abs() < 1e-12);
    }

    #[test]
    fn route_lock_defers_the_switch() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = agent_with_levels(&town, 1.0, 2.0);
        agent.route_locked = true;
        assert_eq!(MotiveScheduler::select(&mut agent, &world), 0);
        assert!(agent.awaiting_unlock);

        agent.route_locked = false;
        assert_eq!(MotiveScheduler::select(&mut agent, &world), 1);
        assert!(!agent.awaiting_unlock);
    }
}

#[cfg(test)]
mod actions {
    use bg_core::{AgentId, SimClock};
    use bg_spatial::DijkstraRouter;
    use crate::{
        Action, ActionOutcome, BurglarBuilder, Destination, StateVariable, TickEffects,
        TravelPlan, WorkShift, WorldView,
    };

    #[test]
    fn only_stationary_actions_are_sleepable() {
        assert!(Action::Sleep.sleepable());
        assert!(Action::Work(WorkShift::new(10)).sleepable());
        assert!(Action::DoNothing.sleepable());
        assert!(!Action::Travel(TravelPlan::to(Destination::Home)).sleepable());
        assert!(!Action::Socialise { paid: false }.sleepable());
        assert!(!Action::BuyDrugs.sleepable());
    }

    #[test]
    fn work_pays_per_tick_and_completes() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .workplace(town.work)
            .wealth(1.0)
            .build(&town.env, &town.params, 7);
        let mut action = Action::Work(WorkShift::new(3));
        let mut fx = TickEffects::default();

        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Continue);
        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Continue);
        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Completed);
        assert!((agent.wealth - 1.6).abs() < 1e-12);
    }

    #[test]
    fn buying_drugs_charges_and_satisfies() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .drug_dealer(town.dealer)
            .wealth(20.0)
            .build(&town.env, &town.params, 7);
        // Slots: sleep, drugs, burglary, do-nothing.
        agent.guiding = 1;
        let mut fx = TickEffects::default();

        let outcome = Action::BuyDrugs.perform(&mut agent, &world, &mut fx).unwrap();
        assert_eq!(outcome, ActionOutcome::Completed);
        assert!((agent.wealth - 5.0).abs() < 1e-12);
        let level = agent.motives[1].state_var.as_ref().unwrap().value();
        assert!((level - 4.0).abs() < 1e-12);
    }

    #[test]
    fn broke_buyer_asks_for_a_rebuild() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .drug_dealer(town.dealer)
            .wealth(0.0)
            .build(&town.env, &town.params, 7);
        agent.guiding = 1;
        let mut fx = TickEffects::default();

        let outcome = Action::BuyDrugs.perform(&mut agent, &world, &mut fx).unwrap();
        assert_eq!(outcome, ActionOutcome::NeedsRebuild);
        assert_eq!(agent.wealth, 0.0);
    }

    #[test]
    fn socialising_charges_exactly_once() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .social_venue(town.venue)
            .wealth(1.0)
            .build(&town.env, &town.params, 7);
        agent.guiding = 1; // social slot
        agent.motives[1].state_var = Some(StateVariable::new("social level", 1.0, 0.002, 0.5));
        let mut action = Action::Socialise { paid: false };
        let mut fx = TickEffects::default();

        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Continue);
        assert!((agent.wealth - 0.5).abs() < 1e-12);
        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Continue);
        // No second charge.
        assert!((agent.wealth - 0.5).abs() < 1e-12);
        let level = agent.motives[1].state_var.as_ref().unwrap().value();
        assert!((level - 1.02).abs() < 1e-12);
    }

    #[test]
    fn sleep_completes_at_the_satisfied_level() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent =
            BurglarBuilder::new(AgentId(0), town.home).build(&town.env, &town.params, 7);
        agent.guiding = 0; // sleep slot
        agent.motives[0].state_var = Some(StateVariable::new("sleep level", 1.997, 0.002, 0.5));
        let mut fx = TickEffects::default();

        let outcome = Action::Sleep.perform(&mut agent, &world, &mut fx).unwrap();
        assert_eq!(outcome, ActionOutcome::Completed);
    }

    #[test]
    fn travel_walks_locks_and_records() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .workplace(town.work)
            .build(&town.env, &town.params, 7);
        let mut action = Action::Travel(TravelPlan::to(Destination::Workplace));
        let mut fx = TickEffects::default();

        // 100 m at 80 m per tick: one tick en route, arrival on the second.
        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Continue);
        assert!(agent.route_locked);
        assert!((agent.coord.x - 80.0).abs() < 1e-9);

        assert_eq!(action.perform(&mut agent, &world, &mut fx).unwrap(), ActionOutcome::Completed);
        assert!(!agent.route_locked);
        assert_eq!(agent.coord, town.env.building(town.work).coord);
        assert_eq!(agent.memory.building(town.work).visits, 1);
    }

    #[test]
    fn unreachable_destination_is_a_routing_error() {
        use bg_core::Coord;
        use bg_env::{BuildingKind, EnvironmentBuilder, Sociotype};
        use bg_spatial::RoadNetworkBuilder;

        let mut nb = RoadNetworkBuilder::new();
        let a = nb.add_node(Coord::new(0.0, 0.0));
        let b = nb.add_node(Coord::new(100.0, 0.0));
        nb.add_street(a, b, 100.0);
        nb.add_node(Coord::new(5000.0, 0.0)); // isolated junction
        let network = nb.build();

        let mut eb = EnvironmentBuilder::new();
        let c = eb.add_community(Sociotype::default(), Coord::new(0.0, 0.0));
        let home = eb.add_building(0, Coord::new(0.0, 0.0), c, BuildingKind::House);
        let work = eb.add_building(1, Coord::new(5000.0, 0.0), c, BuildingKind::Workplace);
        let env = eb.build();

        let params = bg_core::ModelParams::default();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView { env: &env, network: &network, router: &router, params: &params, clock: &clock };

        let mut agent =
            BurglarBuilder::new(AgentId(0), home).workplace(work).build(&env, &params, 7);
        let mut action = Action::Travel(TravelPlan::to(Destination::Workplace));
        let mut fx = TickEffects::default();
        assert!(action.perform(&mut agent, &world, &mut fx).is_err());
    }
}

#[cfg(test)]
mod stepping {
    use bg_core::{AgentId, SimClock};
    use bg_spatial::DijkstraRouter;
    use crate::{step_agent, BurglarBuilder, StateVariable, WorldView};

    #[test]
    fn idle_agent_decays_after_its_action() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        // Comfortable wealth keeps the burglary urge below the idling
        // threshold.
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .wealth(3.0)
            .build(&town.env, &town.params, 7);

        let report = step_agent(&mut agent, &world).unwrap();
        assert!(report.burglary.is_none());
        assert_eq!(agent.guiding_motive_name(), "do-nothing");
        let sleep = agent.motives[0].state_var.as_ref().unwrap().value();
        assert!((sleep - 1.998).abs() < 1e-12);
    }

    #[test]
    fn underflow_is_reported() {
        let town = super::helpers::town();
        let router = DijkstraRouter;
        let clock = SimClock::new(1440);
        let world = WorldView {
            env: &town.env,
            network: &town.network,
            router: &router,
            params: &town.params,
            clock: &clock,
        };
        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .wealth(3.0)
            .build(&town.env, &town.params, 7);
        agent.motives[0].state_var = Some(StateVariable::new("sleep level", 0.001, 0.002, 0.5));

        let report = step_agent(&mut agent, &world).unwrap();
        assert_eq!(report.underflows, 1);
        assert_eq!(agent.motives[0].state_var.as_ref().unwrap().value(), 0.5);
    }

    /// End-to-end through the composite action: a broke, highly motivated
    /// burglar picks a community, walks there, searches, and commits.
    #[test]
    fn a_desperate_burglar_commits_eventually() {
        let mut town = super::helpers::town();
        town.params.max_search_ticks = 5;
        let router = DijkstraRouter;
        let mut clock = SimClock::new(1440);

        let mut agent = BurglarBuilder::new(AgentId(0), town.home)
            .wealth(0.0)
            .burglary_factor(5.0) // intensity 10, above any default suitability
            .build(&town.env, &town.params, 11);

        let mut event = None;
        for _ in 0..600 {
            let world = WorldView {
                env: &town.env,
                network: &town.network,
                router: &router,
                params: &town.params,
                clock: &clock,
            };
            let report = step_agent(&mut agent, &world).unwrap();
            if report.burglary.is_some() {
                event = report.burglary;
                break;
            }
            clock.advance();
        }

        let ev = event.expect("no burglary within 600 ticks");
        assert!(town.env.building(ev.house).is_house());
        assert_ne!(ev.house, town.home);
        assert_eq!(ev.burglar, AgentId(0));
        assert!(ev.breakdown.probability > 0.0);
        assert!((agent.wealth - town.params.burglary_gain).abs() < 1e-9);
        assert_eq!(agent.memory.building(ev.house).burglaries, 1);
    }
}
