//! smalltown — demo run of the rust_burgle model.
//!
//! Six agents live in a synthetic four-community town: three broke
//! offenders in the low-efficacy student quarter and three residents with
//! jobs and a social life.  Runs a week of simulated minutes and writes
//! the burglary history to `output/smalltown/`.

mod town;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bg_agent::BurglarBuilder;
use bg_core::{AgentId, SimConfig};
use bg_output::{CsvWriter, SimOutputObserver};
use bg_sim::SimBuilder;

use town::build_town;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TICKS_PER_DAY:         u32 = 1_440; // 1 tick = 1 minute
const SIM_DAYS:              u64 = 7;
const OUTPUT_INTERVAL_TICKS: u64 = 60; // hourly summaries

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    println!("=== smalltown — rust_burgle ===");
    println!("Days: {SIM_DAYS}  |  Seed: {SEED}");
    println!();

    // 1. Build the town.
    let town = build_town();
    println!(
        "Town: {} communities, {} buildings, {} road junctions",
        town.env.communities().len(),
        town.env.buildings().len(),
        town.network.node_count(),
    );

    // 2. Sim config.
    let config = SimConfig {
        total_ticks: SIM_DAYS * TICKS_PER_DAY as u64,
        ticks_per_day: TICKS_PER_DAY,
        seed: SEED,
        num_threads: None, // all logical cores
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..SimConfig::default()
    };

    // 3. Populate.  Agents 0–2: broke old-town offenders with a drug habit.
    //    Agents 3–5: employed residents who mostly sleep, work and socialise.
    let mut builder = SimBuilder::new(config.clone())
        .environment(town.env)
        .network(town.network);
    for i in 0..3u32 {
        builder = builder.agent(
            BurglarBuilder::new(AgentId(i), town.homes[9 + i as usize])
                .wealth(5.0)
                .drug_dealer(town.dealer)
                .burglary_factor(3.0),
        );
    }
    for (i, home_idx) in [0usize, 5, 13].into_iter().enumerate() {
        builder = builder.agent(
            BurglarBuilder::new(AgentId(3 + i as u32), town.homes[home_idx])
                .wealth(40.0)
                .workplace(town.workplace)
                .social_venue(town.venue)
                .burglary_factor(0.2),
        );
    }
    let mut sim = builder.build()?;

    // 4. Output.
    std::fs::create_dir_all("output/smalltown")?;
    let writer = CsvWriter::new(Path::new("output/smalltown"))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} burglaries over {} days  →  output/smalltown/",
        sim.ctx().burglary_count(),
        sim.clock().day(),
    );
    println!();

    println!("{:<8} {:<10} {:<14} {:<12}", "Agent", "Wealth", "Motive", "Action");
    println!("{}", "-".repeat(46));
    for agent in sim.agents() {
        let (motive, intensity) = (agent.guiding_motive_name(), agent.guiding_intensity);
        println!(
            "{:<8} {:<10.1} {:<14} {:<12}",
            agent.id.0,
            agent.wealth,
            format!("{motive} ({intensity:.2})"),
            agent.current_action_name(),
        );
    }
    println!();

    // Which houses got hit, and how their security responded.
    println!("{:<10} {:<12} {:<10} {:<10}", "House", "Community", "Hits", "Security");
    println!("{}", "-".repeat(44));
    for b in sim.env().buildings().iter().filter(|b| b.times_burgled > 0) {
        println!(
            "{:<10} {:<12} {:<10} {:<10.3}",
            b.id.0, b.community.0, b.times_burgled, b.security,
        );
    }

    Ok(())
}
