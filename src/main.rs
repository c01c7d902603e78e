//! Midway - Entry Point
//!
//! Interactive console driver for the park simulation: advances ticks,
//! issues build/hire/research commands into the park aggregate, and prints
//! the event feed. Rendering and real UI panels live elsewhere; this loop
//! exists to drive and inspect the simulation core.

use std::io::{self, Write};

use midway::core::error::Result;
use midway::core::types::Vec3;
use midway::park::{CampaignKind, FacilityKind, Park, ResearchConfig, ResearchKind, StaffConfig, StaffRole};
use midway::ride::RideKind;
use midway::scenario::ScenarioDirector;

/// Wall seconds represented by one `tick` command
const TICK_SECONDS: f32 = 1.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("midway=info")
        .init();

    tracing::info!("Midway starting...");

    let mut park = Park::new("Midway Park", 42);
    let mut director = ScenarioDirector::new();
    build_starter_park(&mut park);

    println!("\n=== MIDWAY ===");
    println!("A theme park management simulation with emergent visitor behavior");
    println!();
    println!("Commands:");
    println!("  tick / t            - Advance simulation by one second");
    println!("  run <n>             - Run n seconds of simulation");
    println!("  status / s          - Show park status");
    println!("  build <ride>        - Build a ride (coaster, carousel, ferris, ...)");
    println!("  facility <kind>     - Build a facility (food, drink, shop, restroom)");
    println!("  hire <role>         - Hire staff (mechanic, janitor, entertainer, security)");
    println!("  research <kind>     - Start research (engineering, crowdflow, services)");
    println!("  campaign <kind>     - Start marketing (radio, tv, newspaper, online, billboard)");
    println!("  scenario <id>       - Start a scenario (beginner_park, ...)");
    println!("  weather / forecast  - Current conditions / 3-sample forecast");
    println!("  pause / resume      - Toggle the simulation");
    println!("  speed <n>           - Set game speed (1-4)");
    println!("  quit / q            - Exit");
    println!();

    loop {
        display_status(&park, &director);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        if input == "tick" || input == "t" {
            step(&mut park, &mut director, TICK_SECONDS);
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(&park, &director);
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            match rest.parse::<u32>() {
                Ok(n) => {
                    println!("Running {} seconds...", n);
                    for _ in 0..n {
                        step(&mut park, &mut director, 1.0);
                    }
                }
                Err(_) => println!("Usage: run <number>"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("build ") {
            match parse_ride_kind(rest) {
                Some(kind) => {
                    let position = find_build_spot(&park, kind.footprint());
                    match position {
                        Some(position) => match park.add_ride(kind, position) {
                            Some(id) => println!("Built {} (ID: {:?})", kind.display_name(), id),
                            None => println!(
                                "Not enough money. Need ${:.0}, have ${:.0}",
                                kind.purchase_cost(),
                                park.stats.money
                            ),
                        },
                        None => println!("No free space for a {}", kind.display_name()),
                    }
                }
                None => println!("Unknown ride kind: {}", rest),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("facility ") {
            match parse_facility_kind(rest) {
                Some(kind) => {
                    match find_build_spot(&park, kind.footprint()) {
                        Some(position) => match park.add_facility(kind, position) {
                            Some(id) => println!("Built {} (ID: {:?})", kind.display_name(), id),
                            None => println!("Not enough money for a {}", kind.display_name()),
                        },
                        None => println!("No free space for a {}", kind.display_name()),
                    }
                }
                None => println!("Unknown facility kind: {}", rest),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("hire ") {
            match parse_staff_role(rest) {
                Some(role) => {
                    let id = park.hire_staff(StaffConfig { role, name: None });
                    println!("Hired {} (ID: {:?})", role.display_name(), id);
                }
                None => println!("Unknown staff role: {}", rest),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("research ") {
            match parse_research_kind(rest) {
                Some(kind) => {
                    if park.start_research(ResearchConfig { kind }) {
                        println!("Research started: {}", kind.display_name());
                    } else {
                        println!("Cannot start {} (funds or duplicate)", kind.display_name());
                    }
                }
                None => println!("Unknown research kind: {}", rest),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("campaign ") {
            match parse_campaign_kind(rest) {
                Some(kind) => {
                    if park.start_campaign(kind) {
                        println!("Campaign started: {}", kind.display_name());
                    } else {
                        println!("Cannot start {} (funds or duplicate)", kind.display_name());
                    }
                }
                None => println!("Unknown campaign kind: {}", rest),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("scenario ") {
            match director.start_scenario(&mut park, rest) {
                Ok(()) => println!("Scenario started: {}", rest),
                Err(e) => println!("{}", e),
            }
            continue;
        }

        if input == "weather" {
            let condition = park.weather.current();
            println!(
                "{:?} (intensity {:.0}, {:.1}h remaining): {}",
                condition.kind, condition.intensity, condition.remaining_hours, condition.description
            );
            continue;
        }

        if input == "forecast" {
            for (i, condition) in park.weather_forecast(3).iter().enumerate() {
                println!("  +{}: {:?} ({:.1}h)", i + 1, condition.kind, condition.remaining_hours);
            }
            continue;
        }

        if input == "pause" {
            park.set_paused(true);
            println!("Paused.");
            continue;
        }
        if input == "resume" {
            park.set_paused(false);
            println!("Resumed.");
            continue;
        }

        if let Some(rest) = input.strip_prefix("speed ") {
            match rest.parse::<f32>() {
                Ok(speed) => {
                    park.set_game_speed(speed);
                    println!("Game speed: {:.1}x", park.clock.speed());
                }
                Err(_) => println!("Usage: speed <1-4>"),
            }
            continue;
        }

        println!("Unknown command. Try: tick, run <n>, status, build <ride>, quit");
    }

    println!(
        "\nGoodbye! Final state: {} guests in park, {} lifetime, {}",
        park.stats.visitor_count,
        park.total_guests,
        park.formatted_date()
    );
    Ok(())
}

/// Advance the park and the achievement director together
fn step(park: &mut Park, director: &mut ScenarioDirector, elapsed: f32) {
    let mut events = park.update(elapsed);
    events.extend(director.tick(park, elapsed));
    for event in &events {
        println!("  * {}", event.message());
    }
}

/// A modest opening lineup so the gate has something to sell
fn build_starter_park(park: &mut Park) {
    park.add_ride(RideKind::Carousel, Vec3::ground(-20.0, 0.0));
    park.add_ride(RideKind::FerrisWheel, Vec3::ground(20.0, 0.0));
    park.add_facility(FacilityKind::FoodStand, Vec3::ground(0.0, 10.0));
    park.add_facility(FacilityKind::DrinkStall, Vec3::ground(5.0, 10.0));
    park.add_facility(FacilityKind::Restroom, Vec3::ground(-5.0, 10.0));
    park.hire_staff(StaffConfig {
        role: StaffRole::Mechanic,
        name: None,
    });
    tracing::info!("starter park built");
}

/// Scan the grid for a free spot with the given footprint
fn find_build_spot(park: &Park, footprint: (f32, f32)) -> Option<Vec3> {
    let step = 4.0;
    let mut z = -park.half_depth + footprint.1;
    while z < park.half_depth - footprint.1 {
        let mut x = -park.half_width + footprint.0;
        while x < park.half_width - footprint.0 {
            let position = Vec3::ground(x, z);
            if park.can_build_at(position, footprint) {
                return Some(position);
            }
            x += step;
        }
        z += step;
    }
    None
}

fn parse_ride_kind(input: &str) -> Option<RideKind> {
    match input.trim().to_lowercase().as_str() {
        "ferris" | "ferris_wheel" | "wheel" => Some(RideKind::FerrisWheel),
        "coaster" | "roller_coaster" => Some(RideKind::RollerCoaster),
        "carousel" => Some(RideKind::Carousel),
        "bumper" | "bumper_cars" => Some(RideKind::BumperCars),
        "slide" | "water_slide" => Some(RideKind::WaterSlide),
        "drop" | "drop_tower" => Some(RideKind::DropTower),
        "haunted" | "haunted_house" => Some(RideKind::HauntedHouse),
        "flume" | "log_flume" => Some(RideKind::LogFlume),
        "prototype" => Some(RideKind::Prototype),
        _ => None,
    }
}

fn parse_facility_kind(input: &str) -> Option<FacilityKind> {
    match input.trim().to_lowercase().as_str() {
        "food" | "food_stand" => Some(FacilityKind::FoodStand),
        "drink" | "drink_stall" => Some(FacilityKind::DrinkStall),
        "shop" | "gift_shop" => Some(FacilityKind::GiftShop),
        "restroom" | "toilet" => Some(FacilityKind::Restroom),
        _ => None,
    }
}

fn parse_staff_role(input: &str) -> Option<StaffRole> {
    match input.trim().to_lowercase().as_str() {
        "mechanic" => Some(StaffRole::Mechanic),
        "janitor" => Some(StaffRole::Janitor),
        "entertainer" => Some(StaffRole::Entertainer),
        "security" | "guard" => Some(StaffRole::SecurityGuard),
        _ => None,
    }
}

fn parse_research_kind(input: &str) -> Option<ResearchKind> {
    match input.trim().to_lowercase().as_str() {
        "engineering" | "ride_engineering" => Some(ResearchKind::RideEngineering),
        "crowdflow" | "crowd_flow" => Some(ResearchKind::CrowdFlow),
        "services" | "guest_services" => Some(ResearchKind::GuestServices),
        _ => None,
    }
}

fn parse_campaign_kind(input: &str) -> Option<CampaignKind> {
    match input.trim().to_lowercase().as_str() {
        "radio" => Some(CampaignKind::Radio),
        "tv" => Some(CampaignKind::Tv),
        "newspaper" => Some(CampaignKind::Newspaper),
        "online" => Some(CampaignKind::Online),
        "billboard" => Some(CampaignKind::Billboard),
        _ => None,
    }
}

/// Brief status line between commands
fn display_status(park: &Park, director: &ScenarioDirector) {
    println!();
    println!(
        "--- {} | {} | {} | {:?} | speed {:.0}x{} ---",
        park.name,
        park.formatted_date(),
        park.snapshot(),
        park.weather.current().kind,
        park.clock.speed(),
        if park.clock.is_paused() { " [PAUSED]" } else { "" }
    );
    if director.unlocked_count() > 0 {
        println!(
            "  Achievements: {}/{}",
            director.unlocked_count(),
            director.achievements.len()
        );
    }
}

/// Full dump of rides, facilities, staff, and guests
fn display_detailed_status(park: &Park, director: &ScenarioDirector) {
    println!();
    println!("=== {} ({}) ===", park.name, park.formatted_date());
    println!(
        "  {} | park value ${:.0} | cleanliness {:.0}%",
        park.snapshot(),
        park.park_value,
        park.cleanliness
    );
    println!(
        "  Monthly: +${:.0} / -${:.0}",
        park.monthly_income, park.monthly_expenses
    );

    println!("  Rides:");
    for ride in &park.rides {
        let state = if !ride.is_operational {
            "BROKEN"
        } else if ride.is_operating {
            "open"
        } else {
            "closed"
        };
        println!(
            "    {} [{}] queue {} (~{:.0} min), {:.0} riders/hr",
            ride.name,
            state,
            ride.queue.length,
            ride.queue.estimated_wait_minutes,
            ride.riders_per_hour
        );
    }

    println!("  Facilities:");
    for facility in &park.facilities {
        println!(
            "    {} ({} customers)",
            facility.name, facility.current_customers
        );
    }

    println!("  Staff: {}", park.staff.len());
    for staff in &park.staff {
        println!("    {} (morale {:.0}%)", staff.name, staff.morale);
    }

    if !park.objectives.is_empty() {
        println!("  Objectives:");
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

    let sample: Vec<_> = park.visitors.iter().take(5).collect();
    if !sample.is_empty() {
        println!("  Guests (sample):");
        for visitor in sample {
            println!(
                "    {} ({}) - {:.0}% happy, ${:.0}, {:?}",
                visitor.name,
                visitor.personality.display_name(),
                visitor.happiness,
                visitor.money,
                visitor.activity
            );
        }
        if park.visitors.len() > 5 {
            println!("    ... and {} more", park.visitors.len() - 5);
        }
    }

    println!(
        "  Achievements: {}/{}",
        director.unlocked_count(),
        director.achievements.len()
    );
}
