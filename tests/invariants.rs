//! Property tests for the clamping invariants
//!
//! For any sequence of ticks and any seed, percentage-style stats stay in
//! range, riders never exceed capacity, and build operations are
//! all-or-nothing.

use midway::core::types::Vec3;
use midway::park::{FacilityKind, Park};
use midway::ride::RideKind;
use midway::visitor::needs::{NeedContext, Needs};
use midway::visitor::Personality;
use proptest::prelude::*;

proptest! {
    #[test]
    fn needs_stay_in_range_for_any_tick_sequence(
        dts in prop::collection::vec(0.01f32..120.0, 1..60),
        personality_index in 0usize..4,
        context_index in 0usize..4,
    ) {
        let personality = Personality::ALL[personality_index];
        let context = [
            NeedContext::Idle,
            NeedContext::Queuing,
            NeedContext::Enjoying,
            NeedContext::Resting,
        ][context_index];

        let mut needs = Needs::default();
        for dt in dts {
            needs.decay(dt, personality, context);
            prop_assert!(needs.in_range());
        }
    }

    #[test]
    fn park_invariants_hold_for_any_tick_sequence(
        seed in 0u64..1_000,
        dts in prop::collection::vec(0.1f32..30.0, 1..80),
    ) {
        let mut park = Park::new("Property Park", seed);
        park.add_ride(RideKind::RollerCoaster, Vec3::ground(0.0, 25.0));
        park.add_ride(RideKind::Carousel, Vec3::ground(-20.0, 0.0));
        park.add_facility(FacilityKind::FoodStand, Vec3::ground(0.0, 10.0));
        park.add_facility(FacilityKind::Restroom, Vec3::ground(-5.0, 10.0));

        for dt in dts {
            park.update(dt);

            prop_assert!((0.0..=100.0).contains(&park.stats.happiness));
            prop_assert!((0.0..=1000.0).contains(&park.stats.reputation));
            prop_assert!((0.0..=100.0).contains(&park.cleanliness));
            prop_assert_eq!(park.stats.visitor_count as usize, park.visitors.len());

            for ride in &park.rides {
                prop_assert!(ride.current_riders <= ride.capacity);
                if !ride.is_running() {
                    prop_assert_eq!(ride.riders_per_hour, 0.0);
                }
            }
            for visitor in &park.visitors {
                prop_assert!((0.0..=100.0).contains(&visitor.happiness));
                prop_assert!(visitor.needs.in_range());
            }
        }
    }

    #[test]
    fn add_ride_is_all_or_nothing(
        money in 0.0f64..40_000.0,
        kind_index in 0usize..9,
    ) {
        let kind = RideKind::ALL[kind_index];
        let mut park = Park::new("Atomic Park", 1);
        park.stats.money = money;
        let rides_before = park.rides.len();

        let result = park.add_ride(kind, Vec3::ground(0.0, 0.0));

        if let Some(_id) = result {
            prop_assert!((park.stats.money - (money - kind.purchase_cost())).abs() < 1e-6);
            prop_assert_eq!(park.rides.len(), rides_before + 1);
        } else {
            prop_assert_eq!(park.stats.money, money);
            prop_assert_eq!(park.rides.len(), rides_before);
        }
    }
}
