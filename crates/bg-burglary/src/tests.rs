//! Unit tests for bg-burglary.

#[cfg(test)]
mod helpers {
    use bg_core::{BuildingId, CommunityId, Coord};
    use bg_env::{BuildingKind, Environment, EnvironmentBuilder, Sociotype};

    /// One community, one row of houses 10 m apart plus a workplace.
    /// Returns `(env, community, house_ids, workplace)`.
    pub fn row_env() -> (Environment, CommunityId, Vec<BuildingId>, BuildingId) {
        let mut b = EnvironmentBuilder::new();
        let c = b.add_community(Sociotype::default(), Coord::new(50.0, 0.0));
        let houses: Vec<BuildingId> = (0..5)
            .map(|i| {
                b.add_building(i, Coord::new(i as f64 * 10.0, 0.0), c, BuildingKind::House)
            })
            .collect();
        let work = b.add_building(100, Coord::new(5.0, 0.0), c, BuildingKind::Workplace);
        (b.build(), c, houses, work)
    }
}

#[cfg(test)]
mod memory {
    use bg_core::{BuildingId, CommunityId};
    use crate::BurglarMemory;

    #[test]
    fn tallies_accumulate() {
        let mut m = BurglarMemory::new();
        let c = CommunityId(3);
        let b = BuildingId(7);
        m.record_community_visit(c);
        m.record_community_visit(c);
        m.record_burglary(c, b);
        assert_eq!(m.community(c).visits, 2);
        assert_eq!(m.community(c).burglaries, 1);
        assert_eq!(m.building(b).burglaries, 1);
        // Never-seen places read as zeroes.
        assert_eq!(m.community(CommunityId(9)).visits, 0);
    }

    #[test]
    fn known_communities_sorted_by_id() {
        let mut m = BurglarMemory::new();
        for id in [5u16, 1, 3] {
            m.record_community_visit(CommunityId(id));
        }
        let known: Vec<_> = m.known_communities().into_iter().map(|(id, _)| id.0).collect();
        assert_eq!(known, vec![1, 3, 5]);
    }
}

#[cfg(test)]
mod normalize {
    use crate::min_max_normalize;

    #[test]
    fn spans_unit_interval() {
        let n = min_max_normalize(&[3.0, 1.0, 2.0]);
        assert_eq!(n, vec![1.0, 0.0, 0.5]);
        assert!(n.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn degenerate_column_maps_to_half() {
        assert_eq!(min_max_normalize(&[0.7, 0.7, 0.7]), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn interior_value_scales_linearly() {
        // (0.5 - 0.2) / (0.9 - 0.2) = 3/7, not a rounder-looking 0.375.
        let n = min_max_normalize(&[0.2, 0.5, 0.9]);
        assert!((n[1] - 3.0 / 7.0).abs() < 1e-12, "got {}", n[1]);
    }

    #[test]
    fn empty_input() {
        assert!(min_max_normalize(&[]).is_empty());
    }
}

#[cfg(test)]
mod roulette {
    use bg_core::{AgentId, AgentRng, Coord};
    use bg_env::{EnvironmentBuilder, Sociotype};
    use crate::{
        AttractivenessWeights, BurglarMemory, RouletteTargetChooser, TargetChooser, TargetView,
    };

    /// Three candidate communities, equal in everything except
    /// attractiveness [0.2, 0.5, 0.9].  With the dissimilarity weight
    /// zeroed, the constant distance and prior features each normalise to
    /// 0.5 and attractiveness to [0, 3/7, 1], so scores are
    /// [1, 10/7, 2] and expected selection shares [7, 10, 14]/31.
    #[test]
    fn selection_frequency_tracks_attractiveness() {
        let mut b = EnvironmentBuilder::new();
        let home = b.add_community(Sociotype::default(), Coord::new(0.0, -50.0));
        let attractiveness = [0.2, 0.5, 0.9];
        let centroids = [Coord::new(10.0, 0.0), Coord::new(0.0, 10.0), Coord::new(-10.0, 0.0)];
        let mut targets = Vec::new();
        for (a, c) in attractiveness.iter().zip(centroids) {
            let st = Sociotype { attractiveness: *a, ..Sociotype::default() };
            targets.push(b.add_community(st, c));
        }
        let env = b.build();

        let mut memory = BurglarMemory::new();
        for &t in &targets {
            memory.record_community_visit(t);
        }

        let view = TargetView {
            position: Coord::new(0.0, 0.0),
            home_community: home,
            memory: &memory,
            env: &env,
            weights: AttractivenessWeights { dissimilarity: 0.0, ..Default::default() },
        };

        let mut rng = AgentRng::new(99, AgentId(0));
        let trials = 30_000usize;
        let mut counts = [0usize; 3];
        for _ in 0..trials {
            let pick = RouletteTargetChooser.choose_target(&view, &mut rng).unwrap();
            let slot = targets.iter().position(|&t| t == pick).unwrap();
            counts[slot] += 1;
        }

        // 3σ at 30 000 trials is under 0.009 for each share.
        let expected = [7.0 / 31.0, 10.0 / 31.0, 14.0 / 31.0];
        for (count, exp) in counts.iter().zip(expected) {
            let freq = *count as f64 / trials as f64;
            assert!((freq - exp).abs() < 0.01, "freq {freq:.4} vs expected {exp:.4}");
        }
    }

    #[test]
    fn zero_mass_is_no_target() {
        let (env, c, _, _) = super::helpers::row_env();
        let mut memory = BurglarMemory::new();
        memory.record_community_visit(c);
        let view = TargetView {
            position: Coord::new(0.0, 0.0),
            home_community: c,
            memory: &memory,
            env: &env,
            weights: AttractivenessWeights {
                distance: 0.0,
                attractiveness: 0.0,
                dissimilarity: 0.0,
                prior_success: 0.0,
            },
        };
        let mut rng = AgentRng::new(7, AgentId(0));
        assert!(RouletteTargetChooser.choose_target(&view, &mut rng).is_none());
    }

    #[test]
    fn empty_memory_considers_whole_map() {
        let (env, c, _, _) = super::helpers::row_env();
        let memory = BurglarMemory::new();
        let view = TargetView {
            position: Coord::new(0.0, 0.0),
            home_community: c,
            memory: &memory,
            env: &env,
            weights: AttractivenessWeights::default(),
        };
        let mut rng = AgentRng::new(7, AgentId(1));
        // Single community, all features degenerate at 0.5: still selectable.
        assert_eq!(RouletteTargetChooser.choose_target(&view, &mut rng), Some(c));
    }
}

#[cfg(test)]
mod search {
    use bg_core::{AgentId, AgentRng, Coord};
    use bg_spatial::RoadNetworkBuilder;
    use crate::{BullsEyeSearch, SearchAlg};

    #[test]
    fn time_box_expires() {
        let mut s = BullsEyeSearch::new(300.0, 3);
        s.reinitialize(Coord::new(0.0, 0.0));
        assert!(!s.finished_searching());
        for _ in 0..3 {
            s.step();
        }
        assert!(s.finished_searching());
        s.reinitialize(Coord::new(5.0, 5.0));
        assert!(!s.finished_searching());
        assert_eq!(s.elapsed(), 0);
    }

    #[test]
    fn legs_stay_within_radius() {
        let mut b = RoadNetworkBuilder::new();
        let inside = [Coord::new(0.0, 0.0), Coord::new(50.0, 0.0), Coord::new(0.0, 80.0)];
        for c in inside {
            b.add_node(c);
        }
        b.add_node(Coord::new(500.0, 500.0)); // outside
        let net = b.build();

        let mut s = BullsEyeSearch::new(100.0, 10);
        s.reinitialize(Coord::new(0.0, 0.0));
        let mut rng = AgentRng::new(42, AgentId(0));
        for _ in 0..20 {
            let leg = s.next_leg(&net, &mut rng).unwrap();
            assert!(leg.distance(Coord::new(0.0, 0.0)) <= 100.0, "leg {leg:?} outside radius");
        }
    }

    #[test]
    fn falls_back_to_nearest_junction() {
        let mut b = RoadNetworkBuilder::new();
        b.add_node(Coord::new(500.0, 0.0));
        let net = b.build();
        let mut s = BullsEyeSearch::new(50.0, 10);
        s.reinitialize(Coord::new(0.0, 0.0));
        let mut rng = AgentRng::new(1, AgentId(0));
        assert_eq!(s.next_leg(&net, &mut rng), Some(Coord::new(500.0, 0.0)));
    }
}

#[cfg(test)]
mod victim {
    use bg_core::{AgentId, AgentRng};
    use crate::{SuitabilityWeights, VictimChooser, VictimQuery, WeightedVictimChooser};

    /// Default attributes: every factor is 0.5 and every weight 1.0, so
    /// suitability is exactly 3.0.
    #[test]
    fn breakdown_arithmetic() {
        let (env, _, houses, _) = super::helpers::row_env();
        let bd = WeightedVictimChooser::score(
            &env,
            houses[0],
            12,
            SuitabilityWeights::default(),
            3.5,
        );
        assert!((bd.suitability - 3.0).abs() < 1e-12);
        assert!((bd.margin - 0.5).abs() < 1e-12);
        assert!((bd.probability - 0.125).abs() < 1e-12);
    }

    #[test]
    fn no_margin_means_no_probability() {
        let (env, _, houses, _) = super::helpers::row_env();
        let bd = WeightedVictimChooser::score(
            &env,
            houses[0],
            12,
            SuitabilityWeights::default(),
            2.0,
        );
        assert!(bd.margin < 0.0);
        assert_eq!(bd.probability, 0.0);
    }

    #[test]
    fn low_intensity_never_burgles() {
        let (env, _, houses, work) = super::helpers::row_env();
        let mut candidates = houses.clone();
        candidates.push(work);
        let query = VictimQuery {
            candidates: &candidates,
            own_home: houses[0],
            intensity: 1.0, // below suitability 3.0 everywhere
            hour: 12,
            weights: SuitabilityWeights::default(),
            env: &env,
        };
        let mut rng = AgentRng::new(3, AgentId(0));
        for _ in 0..200 {
            assert!(WeightedVictimChooser.choose_victim(&query, &mut rng).is_none());
        }
    }

    #[test]
    fn first_qualifying_house_wins() {
        let (env, _, houses, work) = super::helpers::row_env();
        // Own home first, then a non-house, then the real candidates.
        let candidates = vec![houses[0], work, houses[1], houses[2]];
        let query = VictimQuery {
            candidates: &candidates,
            own_home: houses[0],
            intensity: 10.0, // margin 7 → probability clamps to 1
            hour: 12,
            weights: SuitabilityWeights::default(),
            env: &env,
        };
        let mut rng = AgentRng::new(3, AgentId(0));
        let (picked, bd) = WeightedVictimChooser.choose_victim(&query, &mut rng).unwrap();
        assert_eq!(picked, houses[1]);
        assert_eq!(bd.probability, 1.0);
    }
}

#[cfg(test)]
mod effects {
    use bg_core::{AgentId, ModelParams, Tick};
    use bg_env::SimulationContext;
    use crate::{apply_burglary, BurglaryEvent, SuitabilityWeights, WeightedVictimChooser};

    fn event_for(
        env: &bg_env::Environment,
        house: bg_core::BuildingId,
        community: bg_core::CommunityId,
    ) -> BurglaryEvent {
        let breakdown =
            WeightedVictimChooser::score(env, house, 12, SuitabilityWeights::default(), 10.0);
        BurglaryEvent {
            burglar: AgentId(0),
            house,
            community,
            coord: env.building(house).coord,
            tick: Tick::ZERO,
            breakdown,
        }
    }

    /// Defaults: security 0.5, increase rate 0.2, radius weight 0.5 with
    /// cutoff 0.005 → memoized effect radius 100 m.
    #[test]
    fn security_rises_and_radiates() {
        let (mut env, c, houses, work) = super::helpers::row_env();
        let mut ctx = SimulationContext::new();
        let params = ModelParams::default();

        let ev = event_for(&env, houses[0], c);
        apply_burglary(&mut env, &mut ctx, &params, &ev);

        assert_eq!(ctx.burglary_count(), 1);
        let hit = env.building(houses[0]);
        assert_eq!(hit.times_burgled, 1);
        assert!((hit.security - 0.6).abs() < 1e-12);

        // Neighbour 10 m away gains weight / distance = 0.05.
        assert!((env.building(houses[1]).security - 0.55).abs() < 1e-12);
        // Non-houses are untouched even when nearer.
        assert!((env.building(work).security - 0.5).abs() < 1e-12);
        // Every touched house is queued for daily decay.
        assert_eq!(env.decay_registry_len(), 5);
    }

    #[test]
    fn houses_beyond_radius_untouched() {
        let mut b = bg_env::EnvironmentBuilder::new();
        let c = b.add_community(bg_env::Sociotype::default(), bg_core::Coord::new(0.0, 0.0));
        let hit = b.add_building(0, bg_core::Coord::new(0.0, 0.0), c, bg_env::BuildingKind::House);
        // Exactly on the radius edge: increase equals the cutoff, not above it.
        let edge =
            b.add_building(1, bg_core::Coord::new(100.0, 0.0), c, bg_env::BuildingKind::House);
        let far =
            b.add_building(2, bg_core::Coord::new(150.0, 0.0), c, bg_env::BuildingKind::House);
        let mut env = b.build();
        let mut ctx = SimulationContext::new();
        let params = ModelParams::default();

        let ev = event_for(&env, hit, c);
        apply_burglary(&mut env, &mut ctx, &params, &ev);

        assert!((env.building(edge).security - 0.5).abs() < 1e-12);
        assert!((env.building(far).security - 0.5).abs() < 1e-12);
        assert_eq!(env.decay_registry_len(), 1);
    }

    #[test]
    fn radius_effects_can_be_disabled() {
        let (mut env, c, houses, _) = super::helpers::row_env();
        let mut ctx = SimulationContext::new();
        let params = ModelParams { radius_effects_enabled: false, ..Default::default() };

        let ev = event_for(&env, houses[0], c);
        apply_burglary(&mut env, &mut ctx, &params, &ev);

        assert!((env.building(houses[0]).security - 0.6).abs() < 1e-12);
        assert!((env.building(houses[1]).security - 0.5).abs() < 1e-12);
        assert_eq!(env.decay_registry_len(), 1);
    }
}
