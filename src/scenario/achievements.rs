//! Achievements: one-time global predicates with cash rewards

use serde::{Deserialize, Serialize};

use crate::park::Park;

/// The predicate an achievement checks against the park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementKind {
    FirstVisitor,
    HundredVisitors,
    Millionaire,
    PerfectHappiness,
    RideMaster,
    StaffCommander,
    ResearchPioneer,
}

impl AchievementKind {
    /// Evaluate the predicate; pure with respect to the park
    pub fn is_met(&self, park: &Park) -> bool {
        match self {
            Self::FirstVisitor => !park.visitors.is_empty(),
            Self::HundredVisitors => park.visitors.len() >= 100,
            Self::Millionaire => park.stats.money >= 1_000_000.0,
            Self::PerfectHappiness => park.stats.happiness >= 95.0,
            Self::RideMaster => park.rides.len() >= 10,
            Self::StaffCommander => park.staff.len() >= 20,
            Self::ResearchPioneer => {
                park.research.iter().filter(|r| r.completed).count() >= 5
            }
        }
    }
}

/// A one-time unlockable with a fixed reward
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub kind: AchievementKind,
    pub unlocked: bool,
    pub reward: f64,
}

/// The built-in achievement list
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "first_visitor",
            name: "Welcome to the Park!",
            description: "Welcome your first visitor",
            icon: "🎪",
            kind: AchievementKind::FirstVisitor,
            unlocked: false,
            reward: 500.0,
        },
        Achievement {
            id: "hundred_visitors",
            name: "Popular Destination",
            description: "Attract 100 visitors in a single day",
            icon: "👥",
            kind: AchievementKind::HundredVisitors,
            unlocked: false,
            reward: 2_000.0,
        },
        Achievement {
            id: "millionaire",
            name: "Millionaire Tycoon",
            description: "Accumulate $1,000,000",
            icon: "💰",
            kind: AchievementKind::Millionaire,
            unlocked: false,
            reward: 50_000.0,
        },
        Achievement {
            id: "perfect_happiness",
            name: "Paradise Found",
            description: "Maintain 95% average happiness",
            icon: "😍",
            kind: AchievementKind::PerfectHappiness,
            unlocked: false,
            reward: 10_000.0,
        },
        Achievement {
            id: "ride_master",
            name: "Ride Master",
            description: "Build 10 different types of rides",
            icon: "🎢",
            kind: AchievementKind::RideMaster,
            unlocked: false,
            reward: 15_000.0,
        },
        Achievement {
            id: "staff_commander",
            name: "Staff Commander",
            description: "Employ 20 staff members",
            icon: "👨‍💼",
            kind: AchievementKind::StaffCommander,
            unlocked: false,
            reward: 8_000.0,
        },
        Achievement {
            id: "research_pioneer",
            name: "Research Pioneer",
            description: "Complete 5 research projects",
            icon: "🔬",
            kind: AchievementKind::ResearchPioneer,
            unlocked: false,
            reward: 12_000.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_achievements() {
        assert_eq!(all_achievements().len(), 7);
    }

    #[test]
    fn test_predicates_against_fresh_park() {
        let park = Park::new("Test Park", 42);
        assert!(!AchievementKind::FirstVisitor.is_met(&park));
        assert!(!AchievementKind::Millionaire.is_met(&park));
        assert!(!AchievementKind::RideMaster.is_met(&park));
    }

    #[test]
    fn test_millionaire_predicate() {
        let mut park = Park::new("Test Park", 42);
        park.stats.money = 1_000_000.0;
        assert!(AchievementKind::Millionaire.is_met(&park));
    }
}
