//! Scenario catalog
//!
//! A scenario seeds the park's starting money, reputation, and objective
//! set. Completing every objective grants a lump-sum bonus.

use serde::{Deserialize, Serialize};

use crate::park::objectives::{Objective, ObjectiveKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// A playable scenario preset
#[derive(Debug, Clone, Serialize)]
pub struct GameScenario {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub starting_money: f64,
    pub starting_reputation: f32,
    pub difficulty: Difficulty,
    pub objectives: Vec<Objective>,
    /// In-game months before the scenario is considered failed
    pub time_limit_months: Option<u32>,
}

/// The built-in scenario list
pub fn all_scenarios() -> Vec<GameScenario> {
    vec![
        GameScenario {
            id: "beginner_park",
            name: "Beginner's Paradise",
            description:
                "Build your first successful theme park with plenty of starting money and easy objectives.",
            starting_money: 100_000.0,
            starting_reputation: 600.0,
            difficulty: Difficulty::Easy,
            objectives: vec![
                Objective::new(
                    "easy_visitors",
                    "Attract 500 visitors to your park",
                    ObjectiveKind::Visitors,
                    500.0,
                    10_000.0,
                ),
                Objective::new(
                    "easy_happiness",
                    "Maintain 70% average guest happiness",
                    ObjectiveKind::Happiness,
                    70.0,
                    5_000.0,
                ),
                Objective::new(
                    "easy_rides",
                    "Build 3 different rides",
                    ObjectiveKind::Rides,
                    3.0,
                    7_500.0,
                ),
            ],
            time_limit_months: None,
        },
        GameScenario {
            id: "financial_challenge",
            name: "Financial Challenge",
            description: "Start with limited funds and prove your business acumen.",
            starting_money: 25_000.0,
            starting_reputation: 400.0,
            difficulty: Difficulty::Medium,
            objectives: vec![
                Objective::new(
                    "profit_master",
                    "Earn $100,000 profit",
                    ObjectiveKind::Money,
                    125_000.0, // 25k start + 100k profit
                    25_000.0,
                ),
                Objective::new(
                    "efficiency_expert",
                    "Maintain 85% guest happiness with limited budget",
                    ObjectiveKind::Happiness,
                    85.0,
                    15_000.0,
                ),
            ],
            time_limit_months: None,
        },
        GameScenario {
            id: "disaster_recovery",
            name: "Disaster Recovery",
            description: "Your park has been hit by disasters. Rebuild and restore its reputation.",
            starting_money: 50_000.0,
            starting_reputation: 200.0,
            difficulty: Difficulty::Hard,
            objectives: vec![
                Objective::new(
                    "reputation_recovery",
                    "Restore park reputation to 800",
                    ObjectiveKind::Reputation,
                    800.0,
                    30_000.0,
                ),
                Objective::new(
                    "visitor_confidence",
                    "Attract 1000 visitors despite low reputation",
                    ObjectiveKind::Visitors,
                    1_000.0,
                    20_000.0,
                ),
            ],
            time_limit_months: Some(24),
        },
        GameScenario {
            id: "mega_park",
            name: "Mega Park Empire",
            description: "Build the ultimate theme park empire with massive visitor numbers.",
            starting_money: 200_000.0,
            starting_reputation: 500.0,
            difficulty: Difficulty::Expert,
            objectives: vec![
                Objective::new(
                    "mega_visitors",
                    "Attract 5000 total visitors",
                    ObjectiveKind::Visitors,
                    5_000.0,
                    50_000.0,
                ),
                Objective::new(
                    "mega_value",
                    "Achieve $1,000,000 park value",
                    ObjectiveKind::ParkValue,
                    1_000_000.0,
                    100_000.0,
                ),
                Objective::new(
                    "mega_rides",
                    "Build 15 different rides",
                    ObjectiveKind::Rides,
                    15.0,
                    75_000.0,
                ),
            ],
            time_limit_months: Some(36),
        },
    ]
}

/// Look up a scenario by id
pub fn find_scenario(id: &str) -> Option<GameScenario> {
    all_scenarios().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_scenarios() {
        assert_eq!(all_scenarios().len(), 4);
    }

    #[test]
    fn test_find_scenario() {
        let scenario = find_scenario("financial_challenge").unwrap();
        assert_eq!(scenario.starting_money, 25_000.0);
        assert_eq!(scenario.difficulty, Difficulty::Medium);
        assert!(find_scenario("no_such_scenario").is_none());
    }

    #[test]
    fn test_objectives_start_incomplete() {
        for scenario in all_scenarios() {
            assert!(!scenario.objectives.is_empty());
            for objective in &scenario.objectives {
                assert!(!objective.completed);
                assert!(objective.reward > 0.0);
            }
        }
    }
}
