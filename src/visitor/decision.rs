//! Visitor goal selection
//!
//! Urgent needs preempt personality-driven goals, which fall back to idle
//! wandering. There is no pathfinding: a selected goal is an activity plus
//! a randomized movement target near the destination (or inside a notional
//! zone of the park).

use rand::Rng;

use crate::core::types::Vec3;
use crate::park::facility::{Facility, FacilityKind};
use crate::ride::Ride;
use crate::visitor::needs::NeedKind;
use crate::visitor::personality::Personality;
use crate::visitor::visitor::{Activity, SpendCategory, Visitor};

/// Read-only park context handed to the decision engine each tick
pub struct DecisionCtx<'a> {
    pub rides: &'a [Ride],
    pub facilities: &'a [Facility],
    /// Half-extent of the buildable area along x
    pub half_width: f32,
    /// Half-extent of the buildable area along z
    pub half_depth: f32,
    /// Gate position; spawn point and the only exit
    pub entrance: Vec3,
}

/// A uniformly random point on the park grounds
pub fn random_point<R: Rng>(ctx: &DecisionCtx, rng: &mut R) -> Vec3 {
    Vec3::ground(
        rng.gen_range(-ctx.half_width..ctx.half_width),
        rng.gen_range(-ctx.half_depth..ctx.half_depth),
    )
}

/// Small offset so arrivals don't pile on the exact same spot
fn jitter<R: Rng>(position: Vec3, rng: &mut R) -> Vec3 {
    Vec3::ground(
        position.x + rng.gen_range(-2.0..2.0),
        position.z + rng.gen_range(-2.0..2.0),
    )
}

fn nearest_facility<'a>(
    facilities: &'a [Facility],
    kind: FacilityKind,
    from: Vec3,
) -> Option<&'a Facility> {
    facilities
        .iter()
        .filter(|f| f.kind == kind)
        .min_by(|a, b| {
            a.position
                .distance(&from)
                .partial_cmp(&b.position.distance(&from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn pick_ride<'a, R, F>(rides: &'a [Ride], predicate: F, rng: &mut R) -> Option<&'a Ride>
where
    R: Rng,
    F: Fn(&Ride) -> bool,
{
    let candidates: Vec<&Ride> = rides
        .iter()
        .filter(|r| r.is_running() && predicate(r))
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Choose the visitor's next goal, setting activity and movement target
pub fn select_goal<R: Rng>(visitor: &mut Visitor, ctx: &DecisionCtx, rng: &mut R) {
    // Urgent needs first
    if let Some((kind, _)) = visitor.needs.most_urgent() {
        match kind {
            NeedKind::Toilet => {
                if let Some(restroom) =
                    nearest_facility(ctx.facilities, FacilityKind::Restroom, visitor.position)
                {
                    visitor.pending_relief = true;
                    visitor.target = Some(jitter(restroom.position, rng));
                    return;
                }
            }
            NeedKind::Thirst => {
                if let Some(stall) =
                    nearest_facility(ctx.facilities, FacilityKind::DrinkStall, visitor.position)
                {
                    visitor.pending_spend = Some((SpendCategory::Drink, stall.kind.price()));
                    visitor.activity = Activity::Eating;
                    visitor.target = Some(jitter(stall.position, rng));
                    return;
                }
            }
            NeedKind::Hunger => {
                if let Some(stand) =
                    nearest_facility(ctx.facilities, FacilityKind::FoodStand, visitor.position)
                {
                    visitor.pending_spend = Some((SpendCategory::Food, stand.kind.price()));
                    visitor.activity = Activity::Eating;
                    visitor.target = Some(jitter(stand.position, rng));
                    return;
                }
            }
            NeedKind::Energy => {
                visitor.activity = Activity::Resting;
                visitor.target = Some(random_point(ctx, rng));
                return;
            }
            NeedKind::Fun => {}
        }
        // Urgent but unservable (no facility built): wander and grumble later
        visitor.target = Some(random_point(ctx, rng));
        return;
    }

    // Personality-driven goals
    match visitor.personality {
        Personality::ThrillSeeker => {
            if try_queue_for(visitor, ctx, rng, |r| r.kind.is_thrill_ride()) {
                return;
            }
        }
        Personality::FamilyOriented => {
            if try_queue_for(visitor, ctx, rng, |r| r.kind.is_family_friendly()) {
                return;
            }
        }
        Personality::BudgetConscious => {
            // Cheapest open ride is the draw; a cheap meal beats a pricey one
            let cheapest = ctx
                .rides
                .iter()
                .filter(|r| r.is_running())
                .min_by(|a, b| {
                    a.ticket_price
                        .partial_cmp(&b.ticket_price)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|r| r.id);
            if let Some(id) = cheapest {
                if try_queue_for(visitor, ctx, rng, |r| r.id == id) {
                    return;
                }
            }
        }
        Personality::Explorer => {
            if !visitor.has_shopped && rng.gen::<f32>() < 0.3 {
                if let Some(shop) =
                    nearest_facility(ctx.facilities, FacilityKind::GiftShop, visitor.position)
                {
                    visitor.pending_spend = Some((SpendCategory::Souvenir, shop.kind.price()));
                    visitor.activity = Activity::Shopping;
                    visitor.target = Some(jitter(shop.position, rng));
                    return;
                }
            }
            let ridden = visitor.rides_ridden.clone();
            if try_queue_for(visitor, ctx, rng, |r| !ridden.contains(&r.name)) {
                return;
            }
        }
    }

    // Fallback: idle wandering
    visitor.target = Some(random_point(ctx, rng));
}

/// Pick a matching ride and attempt to join its queue
///
/// Returns true when a queue was joined (goal committed). A willingness
/// rejection leaves the visitor goalless so the fallback wander runs.
fn try_queue_for<R, F>(visitor: &mut Visitor, ctx: &DecisionCtx, rng: &mut R, predicate: F) -> bool
where
    R: Rng,
    F: Fn(&Ride) -> bool,
{
    let Some(ride) = pick_ride(ctx.rides, predicate, rng) else {
        return false;
    };

    let (id, wait, position) = (ride.id, ride.queue.estimated_wait_minutes, ride.position);
    if visitor.enter_queue(id, wait) {
        visitor.target = Some(jitter(position, rng));
        true
    } else {
        false
    }
}
