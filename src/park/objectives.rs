//! Park objectives: target predicates with one-time rewards

use serde::{Deserialize, Serialize};

/// Which park stat an objective tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveKind {
    /// Park balance reaches the target
    Money,
    /// Lifetime guests admitted reaches the target
    Visitors,
    /// Average guest happiness reaches the target
    Happiness,
    /// Number of built rides reaches the target
    Rides,
    /// Computed park value reaches the target
    ParkValue,
    /// Park reputation reaches the target
    Reputation,
}

/// A target over park state; transitions pending → completed exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub description: String,
    pub kind: ObjectiveKind,
    pub target: f64,
    pub current: f64,
    pub completed: bool,
    pub reward: f64,
}

impl Objective {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        kind: ObjectiveKind,
        target: f64,
        reward: f64,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            kind,
            target,
            current: 0.0,
            completed: false,
            reward,
        }
    }

    /// Refresh progress from the given stat value; returns true on the
    /// single pending → completed transition
    pub fn refresh(&mut self, value: f64) -> bool {
        if self.completed {
            return false;
        }
        self.current = value;
        if self.current >= self.target {
            self.completed = true;
            return true;
        }
        false
    }
}
