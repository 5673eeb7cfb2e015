//! Run a localization scenario and print the belief after every step.
//!
//! This example demonstrates:
//! - Loading a scenario file (YAML) with a world and a step sequence
//! - Driving a `Localizer` step by step
//! - Optionally running a seeded simulated robot on the same world
//!
//! # Usage
//!
//! ```bash
//! cargo run --example localize_scenario -- scenarios/exact_room.yaml
//! cargo run --example localize_scenario -- scenarios/noisy_ring.yaml --simulate 25 --seed 7
//! ```

use std::path::Path;

use rangoli::io::Scenario;
use rangoli::sim::Simulation;
use rangoli::{Displacement, GridCoord, Localizer};

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<T>().ok())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse CLI args
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.yaml> [--simulate STEPS] [--seed N]", args[0]);
        eprintln!("Example: {} scenarios/exact_room.yaml", args[0]);
        std::process::exit(1);
    }

    let scenario_path = Path::new(&args[1]);
    log::info!("Loading scenario from {:?}", scenario_path);
    let scenario = Scenario::load(scenario_path)?;
    let world = scenario.color_grid()?;
    log::info!(
        "Scenario: {} ({} world, {} steps)",
        scenario.name,
        world.shape(),
        scenario.steps.len()
    );
    if !scenario.description.is_empty() {
        log::info!("{}", scenario.description);
    }
    println!("World:\n{world}");

    let mut localizer = Localizer::new(world.clone(), scenario.filter.clone())?;
    for (i, &step) in scenario.steps.iter().enumerate() {
        let beliefs = localizer.step(step)?;
        println!("After step {} ({:?}):\n{}", i + 1, step, beliefs);
    }

    let estimate = localizer.estimate();
    println!(
        "Estimate: {} with p={:.4} (entropy {:.3} nats)",
        estimate.coord, estimate.probability, estimate.entropy
    );
    if let Some(expected) = scenario.expected {
        if expected == estimate.coord {
            log::info!("Matches expected cell {}", expected);
        } else {
            log::warn!("Expected {}, got {}", expected, estimate.coord);
        }
    }

    if let Some(steps) = flag_value::<usize>(&args, "--simulate") {
        let seed = flag_value::<u64>(&args, "--seed").unwrap_or(0);
        log::info!("Simulating {} steps (seed {})", steps, seed);

        let mut sim = Simulation::new(world, GridCoord::new(0, 0), scenario.filter.clone(), seed)?;
        let patrol = [Displacement::RIGHT, Displacement::RIGHT, Displacement::DOWN];
        let mut localized_steps = 0;
        for i in 0..steps {
            let color = sim.sense()?;
            sim.move_by(patrol[i % patrol.len()])?;
            if sim.is_localized() {
                localized_steps += 1;
            }
            log::debug!(
                "sim step {}: read '{}', truth {}, estimate {}",
                i + 1,
                color,
                sim.true_position(),
                sim.localizer().estimate().coord
            );
        }
        println!(
            "Simulation: localized on {}/{} steps, final truth {}, final estimate {}",
            localized_steps,
            steps,
            sim.true_position(),
            sim.localizer().estimate().coord
        );
    }

    Ok(())
}
