//! Ride entity and operation state machine
//!
//! A ride moves between three states: closed (not accepting guests),
//! open-and-operational, and broken down. Breakdown is probabilistic while
//! operating; repair restores operational status but guest acceptance must
//! be re-issued with `open` once a mechanic has signed the ride off.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::{RideId, Vec3};
use crate::ride::archetype::RideKind;

/// Queue statistics surfaced to visitors and the UI
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QueueStats {
    /// Visitors currently waiting
    pub length: u32,
    /// Estimated wait in game-minutes at current throughput
    pub estimated_wait_minutes: f32,
    /// Longest queue observed over the ride's lifetime
    pub max_length: u32,
}

/// A built attraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    pub name: String,
    pub kind: RideKind,
    pub position: Vec3,
    pub capacity: u32,
    pub excitement: f32,
    pub intensity: f32,
    pub nausea: f32,
    pub ticket_price: f64,
    pub purchase_cost: f64,
    pub maintenance_per_hour: f64,
    /// False while broken down
    pub is_operational: bool,
    /// True while accepting guests
    pub is_operating: bool,
    /// Toggled by the weather controller based on current conditions
    pub weather_sensitive: bool,
    /// Riders aboard the current cycle
    pub current_riders: u32,
    /// Seconds accumulated toward the next cycle completion
    pub cycle_timer: f32,
    /// Estimated throughput; zero whenever the ride is not running
    pub riders_per_hour: f32,
    pub queue: QueueStats,
    /// Lifetime riders served
    pub total_riders: u64,
    /// Seconds spent broken down since the last failure
    pub downtime_seconds: f32,
}

impl Ride {
    /// Build a ride of the given kind; stats come from the archetype preset
    ///
    /// Rides start closed; `open` is issued by the park once construction
    /// (and payment) has gone through.
    pub fn new(id: RideId, kind: RideKind, name: String, position: Vec3) -> Self {
        let (excitement, intensity, nausea) = kind.ratings();
        Self {
            id,
            name,
            kind,
            position,
            capacity: kind.capacity(),
            excitement,
            intensity,
            nausea,
            ticket_price: kind.ticket_price(),
            purchase_cost: kind.purchase_cost(),
            maintenance_per_hour: kind.maintenance_per_hour(),
            is_operational: true,
            is_operating: false,
            weather_sensitive: false,
            current_riders: 0,
            cycle_timer: 0.0,
            riders_per_hour: 0.0,
            queue: QueueStats::default(),
            total_riders: 0,
            downtime_seconds: 0.0,
        }
    }

    /// Start accepting guests; refused while broken down
    pub fn open(&mut self) -> bool {
        if !self.is_operational {
            return false;
        }
        self.is_operating = true;
        true
    }

    /// Stop accepting guests
    pub fn close(&mut self) {
        self.is_operating = false;
        self.current_riders = 0;
        self.riders_per_hour = 0.0;
    }

    /// Mechanical failure: the ride empties and stops accepting guests
    pub fn breakdown(&mut self) {
        self.is_operational = false;
        self.is_operating = false;
        self.current_riders = 0;
        self.cycle_timer = 0.0;
        self.riders_per_hour = 0.0;
        self.downtime_seconds = 0.0;
        tracing::info!(ride = %self.name, "ride broke down");
    }

    /// Restore operational status after a breakdown
    ///
    /// Guest acceptance is NOT restored; call `open` separately.
    pub fn repair(&mut self) {
        self.is_operational = true;
        self.downtime_seconds = 0.0;
        tracing::info!(ride = %self.name, "ride repaired");
    }

    pub fn is_running(&self) -> bool {
        self.is_operational && self.is_operating
    }

    /// Roll the per-tick breakdown chance; returns true if the ride failed
    ///
    /// Only reachable from the running state. Probability scales with
    /// elapsed time, doubles while the ride is weather-sensitive, and is
    /// scaled by the park's engineering modifier.
    pub fn roll_breakdown<R: Rng>(&mut self, dt: f32, modifier: f32, rng: &mut R) -> bool {
        if !self.is_running() {
            return false;
        }
        let mut chance = config().breakdown_rate * modifier * dt;
        if self.weather_sensitive {
            chance *= 2.0;
        }
        if rng.gen::<f32>() < chance {
            self.breakdown();
            true
        } else {
            false
        }
    }

    /// Advance the rider cycle; returns riders served if a cycle completed
    ///
    /// Per-cycle rider count is a demand approximation: the real queue
    /// length plus excitement-scaled walk-ups, capped at capacity. Visitors
    /// resolve their own queue waits by patience timer rather than strict
    /// admission (see DESIGN.md).
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Option<u32> {
        if !self.is_running() {
            return None;
        }

        let cycle = self.kind.cycle_seconds();
        self.cycle_timer += dt;

        let mut served = None;
        if self.cycle_timer >= cycle {
            self.cycle_timer -= cycle;

            let walk_ups = rng.gen_range(0..=((self.excitement / 10.0) as u32).max(1));
            let demand = self.queue.length + walk_ups;
            self.current_riders = demand.min(self.capacity);
            self.total_riders += self.current_riders as u64;
            served = Some(self.current_riders);
        }

        let load_factor = if self.capacity > 0 {
            self.current_riders as f32 / self.capacity as f32
        } else {
            0.0
        };
        self.riders_per_hour = self.capacity as f32 * (3600.0 / cycle) * load_factor.max(0.25);

        served
    }

    /// Refresh queue statistics from the real count of queuing visitors
    pub fn set_queue_length(&mut self, length: u32) {
        self.queue.length = length;
        self.queue.max_length = self.queue.max_length.max(length);
        let per_cycle = self.capacity.max(1) as f32;
        let cycles_needed = length as f32 / per_cycle;
        self.queue.estimated_wait_minutes = cycles_needed * self.kind.cycle_seconds() / 60.0;
    }

    /// Ticket revenue accrued over `dt` seconds, prorated across the cycle
    pub fn income(&self, dt: f32) -> f64 {
        if !self.is_running() {
            return 0.0;
        }
        self.ticket_price * self.current_riders as f64 * (dt / self.kind.cycle_seconds()) as f64
    }

    /// Upkeep owed over `dt` seconds
    pub fn maintenance(&self, dt: f32) -> f64 {
        self.maintenance_per_hour * (dt / 3600.0) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_ride() -> Ride {
        Ride::new(
            RideId(1),
            RideKind::Carousel,
            "Carousel #1".into(),
            Vec3::ground(10.0, 10.0),
        )
    }

    #[test]
    fn test_ride_starts_closed_and_operational() {
        let ride = test_ride();
        assert!(ride.is_operational);
        assert!(!ride.is_operating);
        assert!(!ride.is_running());
    }

    #[test]
    fn test_open_close_cycle() {
        let mut ride = test_ride();
        assert!(ride.open());
        assert!(ride.is_running());

        ride.close();
        assert!(!ride.is_operating);
        assert_eq!(ride.riders_per_hour, 0.0);
    }

    #[test]
    fn test_open_refused_while_broken() {
        let mut ride = test_ride();
        ride.breakdown();
        assert!(!ride.open());
        assert!(!ride.is_operating);
    }

    #[test]
    fn test_repair_does_not_reopen() {
        let mut ride = test_ride();
        ride.open();
        ride.breakdown();
        ride.repair();

        assert!(ride.is_operational);
        assert!(!ride.is_operating, "repair must not auto-reopen");
        assert!(ride.open());
    }

    #[test]
    fn test_update_noop_when_not_running() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ride = test_ride();

        assert_eq!(ride.update(1000.0, &mut rng), None);
        assert_eq!(ride.cycle_timer, 0.0);
        assert_eq!(ride.riders_per_hour, 0.0);
    }

    #[test]
    fn test_cycle_completion_caps_riders_at_capacity() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut ride = test_ride();
        ride.open();
        ride.set_queue_length(500);

        let served = ride.update(ride.kind.cycle_seconds() + 0.1, &mut rng);
        assert!(served.is_some());
        assert!(ride.current_riders <= ride.capacity);
        assert_eq!(ride.current_riders, ride.capacity);
    }

    #[test]
    fn test_cycle_timer_accumulates_across_ticks() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ride = test_ride();
        ride.open();

        let cycle = ride.kind.cycle_seconds();
        let mut completed = false;
        // Feed the cycle in small ticks; exactly one completion expected
        let steps = (cycle / 10.0) as u32 + 1;
        for _ in 0..steps {
            if ride.update(10.0, &mut rng).is_some() {
                completed = true;
            }
        }
        assert!(completed);
        assert!(ride.cycle_timer < cycle);
    }

    #[test]
    fn test_breakdown_zeroes_throughput() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut ride = test_ride();
        ride.open();
        ride.set_queue_length(30);
        ride.update(ride.kind.cycle_seconds() + 0.1, &mut rng);
        assert!(ride.riders_per_hour > 0.0);

        ride.breakdown();
        assert_eq!(ride.riders_per_hour, 0.0);
        assert_eq!(ride.current_riders, 0);
    }

    #[test]
    fn test_no_breakdown_while_closed() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ride = test_ride();
        // Enormous dt would all but guarantee a failure if the roll ran
        assert!(!ride.roll_breakdown(1_000_000.0, 1.0, &mut rng));
        assert!(ride.is_operational);
    }

    #[test]
    fn test_queue_wait_estimate() {
        let mut ride = test_ride();
        ride.set_queue_length(32);
        // 32 waiting / 16 per cycle = 2 cycles of 90s = 3 minutes
        assert!((ride.queue.estimated_wait_minutes - 3.0).abs() < 0.01);
        assert_eq!(ride.queue.max_length, 32);

        ride.set_queue_length(4);
        assert_eq!(ride.queue.max_length, 32);
    }

    #[test]
    fn test_income_zero_when_closed() {
        let ride = test_ride();
        assert_eq!(ride.income(60.0), 0.0);
        assert!(ride.maintenance(3600.0) > 0.0);
    }
}
