//! Park statistics snapshot

use serde::{Deserialize, Serialize};

/// The headline numbers published once per update tick for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParkStats {
    pub money: f64,
    pub visitor_count: u32,
    /// Mean guest happiness, 0-100
    pub happiness: f32,
    /// Park standing, 0-1000
    pub reputation: f32,
}

impl ParkStats {
    pub fn new(money: f64, reputation: f32) -> Self {
        Self {
            money,
            visitor_count: 0,
            happiness: 75.0,
            reputation,
        }
    }
}

impl std::fmt::Display for ParkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${:.0} | {} guests | {:.0}% happy | rep {:.0}",
            self.money, self.visitor_count, self.happiness, self.reputation
        )
    }
}
