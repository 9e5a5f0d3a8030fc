//! Synthetic small-town definition shared by the demo binary.
//!
//! A 5×5 grid of streets (100 m blocks) carrying four contrasting
//! communities: an affluent commuter suburb, a mid-range terrace district,
//! a low-efficacy student quarter and a mixed-use centre with the town's
//! venues.

use bg_core::{BuildingId, Coord};
use bg_env::{BuildingKind, Environment, EnvironmentBuilder, Sociotype};
use bg_spatial::{RoadNetwork, RoadNetworkBuilder};

/// The built town plus the buildings the demo wires agents to.
pub struct Town {
    pub env:       Environment,
    pub network:   RoadNetwork,
    /// Every house, in build order.
    pub homes:     Vec<BuildingId>,
    pub workplace: BuildingId,
    pub venue:     BuildingId,
    pub dealer:    BuildingId,
}

/// Out at work 09:00–17:00, home otherwise.
fn commuter_occupancy() -> [f32; 24] {
    core::array::from_fn(|h| if (9..17).contains(&h) { 0.2 } else { 0.9 })
}

/// Home by day, out in the evening.
fn night_owl_occupancy() -> [f32; 24] {
    core::array::from_fn(|h| if (20..24).contains(&h) || h < 2 { 0.3 } else { 0.7 })
}

/// Build the grid road network and the four-community environment.
pub fn build_town() -> Town {
    // 5×5 grid, 100 m blocks, streets in both directions.
    let mut nb = RoadNetworkBuilder::new();
    let mut grid = [[bg_core::NodeId::INVALID; 5]; 5];
    for (yi, row) in grid.iter_mut().enumerate() {
        for (xi, node) in row.iter_mut().enumerate() {
            *node = nb.add_node(Coord::new(xi as f64 * 100.0, yi as f64 * 100.0));
        }
    }
    for y in 0..5 {
        for x in 0..5 {
            if x + 1 < 5 {
                nb.add_street(grid[y][x], grid[y][x + 1], 100.0);
            }
            if y + 1 < 5 {
                nb.add_street(grid[y][x], grid[y + 1][x], 100.0);
            }
        }
    }

    let mut eb = EnvironmentBuilder::new();

    let hillcrest = eb.add_community(
        Sociotype {
            attractiveness: 0.8,
            collective_efficacy: 0.7,
            occupancy: commuter_occupancy(),
        },
        Coord::new(100.0, 350.0),
    );
    let riverside = eb.add_community(
        Sociotype {
            attractiveness: 0.5,
            collective_efficacy: 0.5,
            occupancy: commuter_occupancy(),
        },
        Coord::new(350.0, 350.0),
    );
    let old_town = eb.add_community(
        Sociotype {
            attractiveness: 0.35,
            collective_efficacy: 0.25,
            occupancy: night_owl_occupancy(),
        },
        Coord::new(50.0, 50.0),
    );
    let centre = eb.add_community(
        Sociotype {
            attractiveness: 0.4,
            collective_efficacy: 0.3,
            occupancy: night_owl_occupancy(),
        },
        Coord::new(350.0, 50.0),
    );

    let mut source_id = 0u64;
    let mut homes = Vec::new();
    let mut add_house = |eb: &mut EnvironmentBuilder, x: f64, y: f64, community| {
        source_id += 1;
        let id = eb.add_building(source_id, Coord::new(x, y), community, BuildingKind::House);
        homes.push(id);
        id
    };

    // Hillcrest: detached houses along the top rows, better locks.
    for (x, y) in [(0.0, 400.0), (100.0, 400.0), (200.0, 400.0), (0.0, 300.0), (100.0, 300.0)] {
        let id = add_house(&mut eb, x, y, hillcrest);
        let b = eb.building_mut(id);
        b.security = 0.7;
        b.base_security = 0.7;
    }

    // Riverside terraces.
    for (x, y) in [(300.0, 400.0), (400.0, 400.0), (300.0, 300.0), (400.0, 300.0)] {
        add_house(&mut eb, x, y, riverside);
    }

    // Old-town student lets: easy to get into, little watched.
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0)] {
        let id = add_house(&mut eb, x, y, old_town);
        let b = eb.building_mut(id);
        b.accessibility = 0.8;
        b.security = 0.3;
        b.base_security = 0.3;
    }

    // Centre: the venues plus a couple of flats above the shops.
    for (x, y) in [(200.0, 0.0), (300.0, 100.0)] {
        add_house(&mut eb, x, y, centre);
    }
    source_id += 1;
    let workplace = eb.add_building(source_id, Coord::new(300.0, 0.0), centre, BuildingKind::Workplace);
    source_id += 1;
    let venue = eb.add_building(source_id, Coord::new(400.0, 0.0), centre, BuildingKind::Social);
    source_id += 1;
    let dealer = eb.add_building(source_id, Coord::new(400.0, 100.0), centre, BuildingKind::DrugDealer);

    Town {
        env: eb.build(),
        network: nb.build(),
        homes,
        workplace,
        venue,
        dealer,
    }
}
