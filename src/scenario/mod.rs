//! Scenarios and achievements

pub mod achievements;
pub mod catalog;
pub mod director;

pub use achievements::{Achievement, AchievementKind};
pub use catalog::{all_scenarios, find_scenario, Difficulty, GameScenario};
pub use director::ScenarioDirector;
