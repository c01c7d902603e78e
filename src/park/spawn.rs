//! Visitor spawning
//!
//! Arrival rate scales with reputation, guest happiness, weather, marketing
//! pressure, and remaining capacity. The rate feeds a timer accumulator;
//! one visitor enters per whole unit accumulated (no per-tick Bernoulli
//! trials, see DESIGN.md).

use crate::core::config::config;
use crate::park::park::Park;
use crate::visitor::Visitor;

/// Park capacity implied by current construction
pub(crate) fn park_capacity(park: &Park) -> u32 {
    let cfg = config();
    let built = park.rides.len() as u32 * cfg.capacity_per_ride
        + park.facilities.len() as u32 * cfg.capacity_per_facility;
    built.min(cfg.max_visitors)
}

/// Current arrivals per game-second
pub(crate) fn spawn_rate(park: &Park) -> f32 {
    let cfg = config();
    let capacity = park_capacity(park);
    if capacity == 0 {
        return 0.0;
    }

    let occupancy = park.visitors.len() as f32 / capacity as f32;
    let room = (1.0 - occupancy).max(0.0);

    let reputation_factor = park.stats.reputation / 500.0;
    let happiness_factor = park.stats.happiness / 75.0;
    let weather_factor = park.weather.current().visitor_multiplier;
    let marketing_factor: f32 = park
        .campaigns
        .iter()
        .map(|c| c.spawn_boost())
        .product::<f32>();

    cfg.base_spawn_rate
        * reputation_factor
        * happiness_factor
        * weather_factor
        * marketing_factor
        * park.spawn_modifier
        * room
}

/// Accumulate arrivals and admit new visitors at the gate
///
/// A visitor who cannot cover the gate ticket turns away; admitted guests
/// pay the ticket price into the tick's income pot.
pub(crate) fn spawn_visitors(park: &mut Park, dt: f32) {
    let rate = spawn_rate(park);
    park.spawn_accumulator += rate * dt;

    let capacity = park_capacity(park);
    while park.spawn_accumulator >= 1.0 && (park.visitors.len() as u32) < capacity {
        park.spawn_accumulator -= 1.0;

        let id = park.next_visitor_id();
        let mut visitor = Visitor::spawn(id, park.entrance, &mut park.rng);

        if visitor.money < park.ticket_price {
            tracing::debug!(visitor = %visitor.name, "turned away at the gate");
            continue;
        }
        visitor.money -= park.ticket_price;
        park.pending_income += park.ticket_price;
        park.total_guests += 1;
        park.visitors.push(visitor);
    }

    // Never bank more than a handful of pending arrivals across ticks
    park.spawn_accumulator = park.spawn_accumulator.min(5.0);
}
