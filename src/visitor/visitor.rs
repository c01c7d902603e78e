//! Visitor entity: state, movement, happiness, spending
//!
//! A visitor is spawned at the gate with rolled demographics, pursues goals
//! chosen by the decision engine, and leaves when their stay budget, mood,
//! or wallet runs out. All numeric state is clamped at the point of
//! computation; a failed purchase is a business outcome, not an error.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::{clamp, RideId, Vec3, VisitorId};
use crate::ride::RideKind;
use crate::visitor::decision::{self, DecisionCtx};
use crate::visitor::needs::{NeedContext, NeedKind, Needs};
use crate::visitor::personality::Personality;
use crate::weather::WeatherKind;

const FIRST_NAMES: [&str; 12] = [
    "Marcus", "Elena", "Thomas", "Sarah", "William", "Priya", "Diego", "Yuki", "Amara", "Felix",
    "Nadia", "Oscar",
];

/// What a visitor is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Wandering,
    Queuing,
    Riding,
    Eating,
    Shopping,
    Resting,
    Leaving,
}

/// What a purchase is for; drives need restoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendCategory {
    Food,
    Drink,
    Souvenir,
}

/// Side effects of one visitor update, collected by the park
#[derive(Debug, Default)]
pub struct VisitorOutcome {
    /// Money handed over at a facility this tick
    pub spent: f64,
    /// A grumble worth surfacing in the event feed
    pub complaint: Option<String>,
    /// The visitor walked out of the gate and can be removed
    pub reached_exit: bool,
}

/// An individual guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitor {
    pub id: VisitorId,
    pub name: String,
    pub age: u32,
    pub personality: Personality,
    pub position: Vec3,
    pub target: Option<Vec3>,
    pub money: f64,
    pub happiness: f32,
    pub needs: Needs,
    /// Queue tolerance, 0-100
    pub patience: f32,
    /// How strongly weather swings this visitor's mood, 0-100
    pub weather_sensitivity: f32,
    /// Comfort in crowds, 0-100
    pub crowd_tolerance: f32,
    /// Favorite weather; None means indifferent
    pub weather_preference: Option<WeatherKind>,
    pub activity: Activity,
    /// Game-seconds since entering the park
    pub time_in_park: f32,
    /// Rolled at the gate: how long this visitor intends to stay
    pub stay_budget: f32,
    pub rides_ridden: Vec<String>,
    pub has_eaten: bool,
    pub has_shopped: bool,
    /// Once set the visitor only moves toward the exit
    pub is_leaving: bool,
    /// Accumulated weather mood drift, bounded to ±15
    pub weather_mood: f32,
    /// Seconds until the next goal re-evaluation
    pub decision_cooldown: f32,
    /// Remaining queue wait when queuing
    pub queue_timer: f32,
    /// Ride whose queue this visitor is standing in
    pub queued_ride: Option<RideId>,
    /// Purchase staged by goal selection, performed on arrival
    pub pending_spend: Option<(SpendCategory, f64)>,
    /// Restroom visit staged by goal selection
    pub pending_relief: bool,
    /// Seconds left in a timed activity (eating, riding, resting)
    activity_timer: f32,
    /// Consecutive ticks without meaningful movement
    stall_ticks: u32,
    last_tick_position: Vec3,
    /// `time_in_park` stamp of the last thrill ride
    last_thrill_at: f32,
    /// Intensity of the most recent ride
    last_ride_intensity: f32,
}

impl Visitor {
    /// Roll a new visitor at the park entrance
    pub fn spawn<R: Rng>(id: VisitorId, entrance: Vec3, rng: &mut R) -> Self {
        let age = rng.gen_range(8..=75);
        let personality = Personality::from_age(age, rng);
        let (money_lo, money_hi) = personality.money_range();
        let (pat_lo, pat_hi) = personality.patience_range();

        let weather_preference = if rng.gen::<f32>() < 0.3 {
            let kinds = [
                WeatherKind::Sunny,
                WeatherKind::Cloudy,
                WeatherKind::Snow,
            ];
            Some(kinds[rng.gen_range(0..kinds.len())])
        } else {
            None
        };

        let name = format!(
            "{} ({})",
            FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            id.0
        );

        Self {
            id,
            name,
            age,
            personality,
            position: entrance,
            target: None,
            money: rng.gen_range(money_lo..money_hi),
            happiness: rng.gen_range(60.0..85.0),
            needs: Needs::default(),
            patience: rng.gen_range(pat_lo..pat_hi),
            weather_sensitivity: rng.gen_range(0.0..100.0),
            crowd_tolerance: rng.gen_range(0.0..100.0),
            weather_preference,
            activity: Activity::Wandering,
            time_in_park: 0.0,
            stay_budget: rng.gen_range(5_400.0..14_400.0), // 1.5 to 4 game-hours
            rides_ridden: Vec::new(),
            has_eaten: false,
            has_shopped: false,
            is_leaving: false,
            weather_mood: 0.0,
            decision_cooldown: 0.0,
            queue_timer: 0.0,
            queued_ride: None,
            pending_spend: None,
            pending_relief: false,
            activity_timer: 0.0,
            stall_ticks: 0,
            last_tick_position: entrance,
            last_thrill_at: 0.0,
            last_ride_intensity: 0.0,
        }
    }

    /// Evolve this visitor by `dt` game-seconds
    pub fn update<R: Rng>(&mut self, dt: f32, ctx: &DecisionCtx, rng: &mut R) -> VisitorOutcome {
        let mut outcome = VisitorOutcome::default();

        self.time_in_park += dt;
        self.decision_cooldown = (self.decision_cooldown - dt).max(0.0);

        if self.activity == Activity::Queuing {
            self.queue_timer = (self.queue_timer - dt).max(0.0);
        }

        if self.activity_timer > 0.0 {
            self.activity_timer -= dt;
            if self.activity_timer <= 0.0
                && matches!(
                    self.activity,
                    Activity::Eating | Activity::Shopping | Activity::Riding
                )
            {
                self.activity = Activity::Wandering;
            }
        }

        self.needs.decay(dt, self.personality, self.need_context());
        self.recompute_happiness();

        if let Some(complaint) = self.maybe_complain(dt, rng) {
            outcome.complaint = Some(complaint);
        }

        let arrived = self.advance_movement(dt, ctx, rng);
        if arrived {
            outcome.spent += self.resolve_arrival();
            if self.is_leaving {
                outcome.reached_exit = true;
                return outcome;
            }
        }

        // Resting ends once energy is back
        if self.activity == Activity::Resting && self.needs.energy >= 75.0 {
            self.activity = Activity::Wandering;
        }

        if !self.is_leaving {
            self.check_leave_conditions(ctx);
        }

        if !self.is_leaving
            && self.decision_cooldown <= 0.0
            && self.target.is_none()
            && matches!(self.activity, Activity::Wandering)
        {
            decision::select_goal(self, ctx, rng);
            self.decision_cooldown = config().decision_cooldown;
        }

        outcome
    }

    fn need_context(&self) -> NeedContext {
        match self.activity {
            Activity::Riding | Activity::Shopping | Activity::Eating => NeedContext::Enjoying,
            Activity::Queuing => NeedContext::Queuing,
            Activity::Resting => NeedContext::Resting,
            _ => NeedContext::Idle,
        }
    }

    /// Recompute happiness as a weighted blend of needs, personality
    /// pressure, and accumulated weather mood
    fn recompute_happiness(&mut self) {
        let mut value = 0.45 * self.needs.comfort_average() + 0.55 * self.needs.fun;

        match self.personality {
            Personality::ThrillSeeker => {
                // Restless without a recent thrill ride
                if self.time_in_park - self.last_thrill_at > 600.0 {
                    value -= 10.0;
                }
            }
            Personality::FamilyOriented => {
                if self.last_ride_intensity > 70.0 {
                    value -= 8.0;
                }
            }
            Personality::Explorer => {
                value += (self.rides_ridden.len() as f32).min(8.0);
            }
            Personality::BudgetConscious => {}
        }

        value += self.weather_mood;
        self.happiness = clamp(value, 0.0, 100.0);
    }

    /// Fold a weather happiness delta into the bounded mood term
    pub fn apply_weather_mood(&mut self, delta: f32) {
        self.weather_mood = clamp(self.weather_mood + delta, -15.0, 15.0);
    }

    fn maybe_complain<R: Rng>(&self, dt: f32, rng: &mut R) -> Option<String> {
        if self.happiness >= config().complaint_threshold {
            return None;
        }
        if rng.gen::<f32>() >= 0.005 * dt {
            return None;
        }

        let text = match self.needs.most_urgent() {
            Some((NeedKind::Toilet, _)) => "Where are the restrooms?!",
            Some((NeedKind::Thirst, _)) => "I'd pay anything for a cold drink right now.",
            Some((NeedKind::Hunger, _)) => "Is there nowhere to eat in this park?",
            Some((NeedKind::Energy, _)) => "My feet are killing me. Not a bench in sight.",
            _ => "This park is not worth the ticket.",
        };
        Some(format!("{}: \"{}\"", self.name, text))
    }

    /// Advance toward the current target; returns true on arrival
    fn advance_movement<R: Rng>(&mut self, dt: f32, ctx: &DecisionCtx, rng: &mut R) -> bool {
        let cfg = config();
        let Some(target) = self.target else {
            self.last_tick_position = self.position;
            return false;
        };

        let distance = self.position.distance(&target);
        let step = cfg.walk_speed * dt;
        let mut arrived = false;

        if distance <= step || distance < cfg.arrival_epsilon {
            self.position = target;
            self.target = None;
            arrived = true;
        } else {
            let direction = (target - self.position).normalize();
            self.position = self.position + direction * step;
        }

        // Anti-stuck: a visitor pinned in place gets kicked to a fresh
        // random target rather than idling forever against an obstacle.
        let moved = self.position.distance(&self.last_tick_position);
        if !arrived && moved < 0.05 {
            self.stall_ticks += 1;
            if self.stall_ticks >= cfg.stuck_tick_limit {
                self.target = Some(decision::random_point(ctx, rng));
                self.stall_ticks = 0;
            }
        } else {
            self.stall_ticks = 0;
        }
        self.last_tick_position = self.position;

        arrived
    }

    /// Apply the effect of reaching the current destination
    fn resolve_arrival(&mut self) -> f64 {
        if self.pending_relief {
            self.pending_relief = false;
            self.relieve();
            return 0.0;
        }
        match self.activity {
            Activity::Eating | Activity::Shopping => {
                if let Some((category, price)) = self.pending_spend.take() {
                    if self.spend(price, category) {
                        self.activity_timer = 60.0;
                        return price;
                    }
                }
                self.activity = Activity::Wandering;
                0.0
            }
            Activity::Resting => {
                self.activity_timer = 180.0;
                0.0
            }
            _ => 0.0,
        }
    }

    fn check_leave_conditions(&mut self, ctx: &DecisionCtx) {
        let cfg = config();
        let overstayed = self.time_in_park > self.stay_budget;
        let miserable = self.happiness < cfg.leave_happiness_threshold;
        let broke = self.money < cfg.leave_money_threshold;

        if overstayed || miserable || broke {
            tracing::debug!(
                visitor = %self.name,
                overstayed,
                miserable,
                broke,
                "visitor leaving"
            );
            self.begin_leaving(ctx.entrance);
        }
    }

    /// Irrevocably head for the exit; no new goals are ever assigned
    pub fn begin_leaving(&mut self, exit: Vec3) {
        self.is_leaving = true;
        self.activity = Activity::Leaving;
        self.target = Some(exit);
        self.queued_ride = None;
        self.pending_spend = None;
        self.pending_relief = false;
        self.queue_timer = 0.0;
    }

    /// Score a finished ride and fold it into mood and needs
    ///
    /// Satisfaction is the personality-weighted blend of the ride's
    /// ratings; a bad match (a grandmother on the drop tower) comes out
    /// negative and costs fun rather than restoring it.
    pub fn ride_complete<R: Rng>(
        &mut self,
        excitement: f32,
        intensity: f32,
        nausea: f32,
        ride_name: &str,
        kind: RideKind,
        cycle_seconds: f32,
        rng: &mut R,
    ) {
        let taste = self.personality.ride_taste();
        let satisfaction = (excitement * taste.excitement
            + intensity * taste.intensity
            + nausea * taste.nausea)
            / 100.0
            * 20.0;

        self.needs.restore(NeedKind::Fun, satisfaction);
        self.needs.restore(NeedKind::Energy, -(5.0 + intensity * 0.1));

        if rng.gen::<f32>() < nausea / 200.0 {
            self.happiness = clamp(self.happiness - nausea * 0.15, 0.0, 100.0);
        }

        if kind.is_thrill_ride() {
            self.last_thrill_at = self.time_in_park;
        }
        self.last_ride_intensity = intensity;
        self.rides_ridden.push(ride_name.to_string());

        self.queued_ride = None;
        self.queue_timer = 0.0;
        self.activity = Activity::Riding;
        self.activity_timer = cycle_seconds.min(120.0);
    }

    /// Decide whether to join a queue with the given estimated wait
    ///
    /// Willingness blends patience, fun deficit, personality, and energy;
    /// a rejection stings a little (the visitor wanted to ride).
    pub fn enter_queue(&mut self, ride: RideId, estimated_wait_minutes: f32) -> bool {
        let willingness = self.patience - estimated_wait_minutes * 2.0
            + (100.0 - self.needs.fun) * 0.3
            + self.personality.queue_willingness_modifier()
            + self.needs.energy * 0.1;

        if willingness > 60.0 {
            self.activity = Activity::Queuing;
            self.queued_ride = Some(ride);
            self.queue_timer = estimated_wait_minutes * 60.0;
            true
        } else {
            self.happiness = clamp(self.happiness - 2.0, 0.0, 100.0);
            false
        }
    }

    /// Debit money and apply category-specific need restoration
    ///
    /// Returns false (with a happiness penalty) when funds are short; no
    /// partial effect is applied.
    pub fn spend(&mut self, amount: f64, category: SpendCategory) -> bool {
        if self.money < amount {
            self.happiness = clamp(self.happiness - 3.0, 0.0, 100.0);
            return false;
        }

        self.money -= amount;
        match category {
            SpendCategory::Food => {
                self.needs.restore(NeedKind::Hunger, 40.0);
                self.needs.restore(NeedKind::Thirst, 10.0);
                self.needs.restore(NeedKind::Toilet, -10.0);
                self.has_eaten = true;
            }
            SpendCategory::Drink => {
                self.needs.restore(NeedKind::Thirst, 35.0);
                self.needs.restore(NeedKind::Toilet, -15.0);
            }
            SpendCategory::Souvenir => {
                self.needs.restore(NeedKind::Fun, 15.0);
                self.has_shopped = true;
            }
        }

        if amount > self.personality.large_purchase_threshold() {
            self.happiness = clamp(self.happiness - 4.0, 0.0, 100.0);
        }

        true
    }

    /// Use a free facility (restroom): restores the toilet need outright
    pub fn relieve(&mut self) {
        self.needs.restore(NeedKind::Toilet, 80.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::visitor::decision::DecisionCtx;

    fn ctx() -> DecisionCtx<'static> {
        DecisionCtx {
            rides: &[],
            facilities: &[],
            half_width: 50.0,
            half_depth: 50.0,
            entrance: Vec3::ground(0.0, -50.0),
        }
    }

    fn visitor(seed: u64) -> (Visitor, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let v = Visitor::spawn(VisitorId(1), Vec3::ground(0.0, -50.0), &mut rng);
        (v, rng)
    }

    #[test]
    fn test_spawned_visitor_in_valid_ranges() {
        let (v, _) = visitor(31);
        assert!((0.0..=100.0).contains(&v.happiness));
        assert!(v.needs.in_range());
        assert!(v.money > 0.0);
        assert!(!v.is_leaving);
    }

    #[test]
    fn test_happiness_stays_clamped_over_long_neglect() {
        let (mut v, mut rng) = visitor(32);
        let c = ctx();
        for _ in 0..5_000 {
            v.update(10.0, &c, &mut rng);
            assert!((0.0..=100.0).contains(&v.happiness));
            assert!(v.needs.in_range());
        }
    }

    #[test]
    fn test_spend_insufficient_funds_is_all_or_nothing() {
        let (mut v, _) = visitor(33);
        v.money = 3.0;
        let hunger_before = v.needs.hunger;
        let happiness_before = v.happiness;

        assert!(!v.spend(12.0, SpendCategory::Food));
        assert_eq!(v.money, 3.0);
        assert_eq!(v.needs.hunger, hunger_before);
        assert!(v.happiness < happiness_before);
    }

    #[test]
    fn test_spend_food_restores_hunger() {
        let (mut v, _) = visitor(34);
        v.money = 50.0;
        v.needs.hunger = 20.0;

        assert!(v.spend(12.0, SpendCategory::Food));
        assert_eq!(v.money, 38.0);
        assert_eq!(v.needs.hunger, 60.0);
        assert!(v.has_eaten);
    }

    #[test]
    fn test_leaving_is_irrevocable() {
        let (mut v, mut rng) = visitor(35);
        let c = ctx();
        v.begin_leaving(c.entrance);

        for _ in 0..50 {
            v.update(1.0, &c, &mut rng);
            assert!(v.is_leaving);
            assert_eq!(v.activity, Activity::Leaving);
            // The only allowed target is the exit
            if let Some(t) = v.target {
                assert_eq!(t, c.entrance);
            }
        }
    }

    #[test]
    fn test_visitor_reaches_exit() {
        let (mut v, mut rng) = visitor(36);
        let c = ctx();
        v.position = Vec3::ground(0.0, -49.0);
        v.begin_leaving(c.entrance);

        let outcome = v.update(5.0, &c, &mut rng);
        assert!(outcome.reached_exit);
    }

    #[test]
    fn test_overstay_triggers_leaving() {
        let (mut v, mut rng) = visitor(37);
        let c = ctx();
        v.stay_budget = 10.0;
        v.update(11.0, &c, &mut rng);
        assert!(v.is_leaving);
    }

    #[test]
    fn test_thrill_ride_satisfies_thrill_seeker() {
        let (mut v, mut rng) = visitor(38);
        v.personality = Personality::ThrillSeeker;
        v.needs.fun = 40.0;

        v.ride_complete(85.0, 80.0, 45.0, "Roller Coaster #1", RideKind::RollerCoaster, 180.0, &mut rng);

        assert!(v.needs.fun > 40.0);
        assert_eq!(v.rides_ridden.len(), 1);
        assert_eq!(v.activity, Activity::Riding);
    }

    #[test]
    fn test_intense_ride_displeases_family_visitor() {
        let (mut v, mut rng) = visitor(39);
        v.personality = Personality::FamilyOriented;
        v.needs.fun = 60.0;

        v.ride_complete(80.0, 90.0, 60.0, "Drop Tower #1", RideKind::DropTower, 60.0, &mut rng);

        assert!(v.needs.fun < 60.0, "negative satisfaction should cost fun");
    }

    #[test]
    fn test_queue_rejection_on_hopeless_wait() {
        let (mut v, _) = visitor(40);
        v.patience = 30.0;
        let happiness_before = v.happiness;

        assert!(!v.enter_queue(RideId(1), 60.0));
        assert_eq!(v.activity, Activity::Wandering);
        assert!(v.happiness < happiness_before);
    }

    #[test]
    fn test_queue_acceptance_on_short_wait() {
        let (mut v, _) = visitor(41);
        v.patience = 80.0;
        v.needs.fun = 30.0;

        assert!(v.enter_queue(RideId(3), 2.0));
        assert_eq!(v.activity, Activity::Queuing);
        assert_eq!(v.queued_ride, Some(RideId(3)));
        assert!(v.queue_timer > 0.0);
    }

    #[test]
    fn test_weather_mood_is_bounded() {
        let (mut v, _) = visitor(42);
        for _ in 0..100 {
            v.apply_weather_mood(5.0);
        }
        assert!(v.weather_mood <= 15.0);

        for _ in 0..100 {
            v.apply_weather_mood(-5.0);
        }
        assert!(v.weather_mood >= -15.0);
    }
}
