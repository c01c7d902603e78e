//! Headless park simulation runner
//!
//! Drives the park for a fixed number of game-days without any UI and
//! prints a summary. Useful for tuning spawn/economy constants and for
//! reproducing reports from a seed.

use clap::Parser;
use std::path::PathBuf;

use midway::core::clock::SECONDS_PER_DAY;
use midway::core::config::{set_config, SimulationConfig};
use midway::core::error::Result;
use midway::core::types::Vec3;
use midway::park::{FacilityKind, Park, ParkEvent, StaffConfig, StaffRole};
use midway::ride::RideKind;
use midway::scenario::ScenarioDirector;

/// Park simulation - headless batch runner
#[derive(Parser, Debug)]
#[command(name = "park_sim")]
#[command(about = "Run the park simulation headless for N game-days")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Game-days to simulate
    #[arg(long, default_value_t = 2.0)]
    days: f32,

    /// Game speed multiplier (1-4)
    #[arg(long, default_value_t = 4.0)]
    speed: f32,

    /// Scenario to start (beginner_park, financial_challenge, ...)
    #[arg(long)]
    scenario: Option<String>,

    /// TOML file with [tuning] overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every event as it happens
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("midway=info")
        .init();

    let args = Args::parse();

    let mut tuning = SimulationConfig::default();
    if let Some(path) = &args.config {
        let content = std::fs::read_to_string(path)?;
        tuning
            .apply_overrides(&content)
            .map_err(midway::core::error::ParkError::InvalidConfig)?;
    }
    // First access wins; ignore the error if defaults were already in use
    let _ = set_config(tuning);

    let mut park = Park::new("Midway Park", args.seed);
    let mut director = ScenarioDirector::new();

    if let Some(id) = &args.scenario {
        director.start_scenario(&mut park, id)?;
    }

    // Opening lineup
    park.add_ride(RideKind::Carousel, Vec3::ground(-20.0, 0.0));
    park.add_ride(RideKind::FerrisWheel, Vec3::ground(20.0, 0.0));
    park.add_ride(RideKind::RollerCoaster, Vec3::ground(0.0, 25.0));
    park.add_facility(FacilityKind::FoodStand, Vec3::ground(0.0, 10.0));
    park.add_facility(FacilityKind::DrinkStall, Vec3::ground(5.0, 10.0));
    park.add_facility(FacilityKind::Restroom, Vec3::ground(-5.0, 10.0));
    park.add_facility(FacilityKind::GiftShop, Vec3::ground(10.0, 10.0));
    for role in [StaffRole::Mechanic, StaffRole::Janitor, StaffRole::Entertainer] {
        park.hire_staff(StaffConfig { role, name: None });
    }

    park.set_game_speed(args.speed);

    let wall_seconds = (args.days as f64 * SECONDS_PER_DAY / park.clock.speed() as f64) as u64;
    let mut breakdowns = 0u32;
    let mut complaints = 0u32;

    println!(
        "Simulating {} game-days at {:.0}x (seed {})...",
        args.days, park.clock.speed(), args.seed
    );

    for _ in 0..wall_seconds {
        let mut events = park.update(1.0);
        events.extend(director.tick(&mut park, 1.0));

        for event in &events {
            match event {
                ParkEvent::RideBrokeDown { .. } => breakdowns += 1,
                ParkEvent::VisitorComplaint { .. } => complaints += 1,
                _ => {}
            }
            if args.verbose {
                println!("  [{}] {}", park.formatted_date(), event.message());
            }
        }
    }

    println!();
    println!("=== {} after {} game-days ===", park.name, args.days);
    println!("  Date: {}", park.formatted_date());
    println!("  Stats: {}", park.snapshot());
    println!("  Park value: ${:.0}", park.park_value);
    println!("  Lifetime guests: {}", park.total_guests);
    println!("  Breakdowns: {} | Complaints: {}", breakdowns, complaints);
    println!(
        "  Achievements unlocked: {}/{}",
        director.unlocked_count(),
        director.achievements.len()
    );
    for achievement in director.achievements.iter().filter(|a| a.unlocked) {
        println!("    {} {}", achievement.icon, achievement.name);
    }
    if let Some(scenario) = &director.scenario {
        println!(
            "  Scenario '{}': {}",
            scenario.name,
            if director.scenario_completed {
                "COMPLETE"
            } else {
                "in progress"
            }
        );
        for objective in &park.objectives {
            println!(
                "    [{}] {} ({:.0}/{:.0})",
                if objective.completed { "x" } else { " " },
                objective.description,
                objective.current,
                objective.target
            );
        }
    }

    Ok(())
}
