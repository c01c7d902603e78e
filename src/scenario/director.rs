//! Scenario director: seeds scenarios, sweeps achievements, pays bonuses
//!
//! Runs on a coarser cadence than the park tick. The driver hands the
//! director elapsed wall seconds; the director never reads ambient time,
//! and every check is idempotent: an unlocked achievement or completed
//! scenario is never granted twice.

use serde::Serialize;

use crate::core::config::config;
use crate::core::error::{ParkError, Result};
use crate::park::events::ParkEvent;
use crate::park::Park;
use crate::scenario::achievements::{all_achievements, Achievement};
use crate::scenario::catalog::{find_scenario, GameScenario};

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioDirector {
    /// The running scenario, if any
    pub scenario: Option<GameScenario>,
    pub scenario_completed: bool,
    pub achievements: Vec<Achievement>,
    /// Wall seconds accumulated toward the next sweep
    check_accumulator: f32,
}

impl ScenarioDirector {
    pub fn new() -> Self {
        Self {
            scenario: None,
            scenario_completed: false,
            achievements: all_achievements(),
            check_accumulator: 0.0,
        }
    }

    /// Seed the park from a scenario preset
    pub fn start_scenario(&mut self, park: &mut Park, id: &str) -> Result<()> {
        let scenario =
            find_scenario(id).ok_or_else(|| ParkError::UnknownScenario(id.to_string()))?;

        park.stats.money = scenario.starting_money;
        park.stats.reputation = scenario.starting_reputation;
        park.objectives = scenario.objectives.clone();

        tracing::info!(scenario = scenario.name, "scenario started");
        self.scenario = Some(scenario);
        self.scenario_completed = false;
        Ok(())
    }

    /// Accumulate wall time; sweep predicates when the interval elapses
    ///
    /// Tolerates being called zero or more times between any two park
    /// observations: evaluation is pure and unlocks are one-way.
    pub fn tick(&mut self, park: &mut Park, elapsed_wall_seconds: f32) -> Vec<ParkEvent> {
        self.check_accumulator += elapsed_wall_seconds;
        if self.check_accumulator < config().achievement_check_interval {
            return Vec::new();
        }
        self.check_accumulator = 0.0;
        self.sweep(park)
    }

    /// Run one full predicate sweep immediately
    pub fn sweep(&mut self, park: &mut Park) -> Vec<ParkEvent> {
        let mut events = Vec::new();

        for achievement in &mut self.achievements {
            if achievement.unlocked || !achievement.kind.is_met(park) {
                continue;
            }
            achievement.unlocked = true;
            park.stats.money += achievement.reward;
            tracing::info!(achievement = achievement.name, "achievement unlocked");
            events.push(ParkEvent::AchievementUnlocked {
                name: achievement.name.to_string(),
                reward: achievement.reward,
            });
        }

        if let Some(scenario) = &self.scenario {
            if !self.scenario_completed
                && !park.objectives.is_empty()
                && park.objectives.iter().all(|o| o.completed)
            {
                let bonus: f64 = park.objectives.iter().map(|o| o.reward).sum();
                park.stats.money += bonus;
                self.scenario_completed = true;
                events.push(ParkEvent::ScenarioCompleted {
                    name: scenario.name.to_string(),
                    bonus,
                });
            }
        }

        park.event_log.extend(&events);
        events
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }
}

impl Default for ScenarioDirector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Vec3, VisitorId};
    use crate::visitor::Visitor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_start_scenario_seeds_park() {
        let mut park = Park::new("Test Park", 42);
        let mut director = ScenarioDirector::new();

        director.start_scenario(&mut park, "beginner_park").unwrap();
        assert_eq!(park.stats.money, 100_000.0);
        assert_eq!(park.stats.reputation, 600.0);
        assert_eq!(park.objectives.len(), 3);
    }

    #[test]
    fn test_unknown_scenario_errors() {
        let mut park = Park::new("Test Park", 42);
        let mut director = ScenarioDirector::new();
        assert!(director.start_scenario(&mut park, "lunar_park").is_err());
    }

    #[test]
    fn test_achievement_unlocks_exactly_once() {
        let mut park = Park::new("Test Park", 42);
        let mut director = ScenarioDirector::new();

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        park.add_visitor(Visitor::spawn(VisitorId(1), Vec3::ground(0.0, -50.0), &mut rng));

        let money_before = park.stats.money;
        let events = director.sweep(&mut park);
        assert!(events
            .iter()
            .any(|e| matches!(e, ParkEvent::AchievementUnlocked { .. })));
        assert_eq!(park.stats.money, money_before + 500.0);
        assert_eq!(director.unlocked_count(), 1);

        // Re-sweeping with unchanged state grants nothing further
        let events = director.sweep(&mut park);
        assert!(events.is_empty());
        assert_eq!(park.stats.money, money_before + 500.0);
    }

    #[test]
    fn test_scenario_completion_pays_bonus_once() {
        let mut park = Park::new("Test Park", 42);
        let mut director = ScenarioDirector::new();
        director.start_scenario(&mut park, "beginner_park").unwrap();

        for objective in &mut park.objectives {
            objective.completed = true;
        }
        let money_before = park.stats.money;

        let events = director.sweep(&mut park);
        assert!(events
            .iter()
            .any(|e| matches!(e, ParkEvent::ScenarioCompleted { .. })));
        assert_eq!(park.stats.money, money_before + 22_500.0);

        let events = director.sweep(&mut park);
        assert!(!events
            .iter()
            .any(|e| matches!(e, ParkEvent::ScenarioCompleted { .. })));
        assert_eq!(park.stats.money, money_before + 22_500.0);
    }

    #[test]
    fn test_tick_respects_cadence() {
        let mut park = Park::new("Test Park", 42);
        let mut director = ScenarioDirector::new();

        let mut rng = ChaCha8Rng::seed_from_u64(2);
        park.add_visitor(Visitor::spawn(VisitorId(1), Vec3::ground(0.0, -50.0), &mut rng));

        // Below the interval: nothing yet
        assert!(director.tick(&mut park, 1.0).is_empty());
        // Crossing the interval triggers a sweep
        let events = director.tick(&mut park, 10.0);
        assert!(!events.is_empty());
    }
}
