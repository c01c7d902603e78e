//! Per-visitor needs that drive behavior
//!
//! Each need is a satisfaction level on the 0-100 scale: 100 = fully
//! satisfied, 0 = desperate. Needs decay over time at personality-weighted
//! rates and are restored by eating, drinking, resting, and riding.

use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::clamp;
use crate::visitor::personality::Personality;

/// One of the five decaying visitor resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeedKind {
    Hunger,
    Thirst,
    Toilet,
    Fun,
    Energy,
}

/// What the visitor is doing, as far as need dynamics are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedContext {
    /// Walking around, browsing
    Idle,
    /// Standing in a queue (boredom erodes fun)
    Queuing,
    /// On a ride or in a shop (fun regenerates)
    Enjoying,
    /// Sitting on a bench (energy regenerates)
    Resting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Needs {
    /// 100 = just ate, 0 = starving
    pub hunger: f32,
    /// 100 = refreshed, 0 = parched
    pub thirst: f32,
    /// 100 = comfortable, 0 = desperate for a restroom
    pub toilet: f32,
    /// 100 = having a great day, 0 = bored stiff
    pub fun: f32,
    /// 100 = fresh, 0 = exhausted
    pub energy: f32,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            hunger: 80.0,
            thirst: 80.0,
            toilet: 90.0,
            fun: 60.0,
            energy: 90.0,
        }
    }
}

impl Needs {
    /// Decay needs over `dt` game-seconds, weighted by personality
    pub fn decay(&mut self, dt: f32, personality: Personality, context: NeedContext) {
        let cfg = config();
        let w = personality.need_decay_weights();

        self.hunger = clamp(self.hunger - cfg.hunger_decay_rate * w.hunger * dt, 0.0, 100.0);
        self.thirst = clamp(self.thirst - cfg.thirst_decay_rate * w.thirst * dt, 0.0, 100.0);
        self.toilet = clamp(self.toilet - cfg.toilet_decay_rate * w.toilet * dt, 0.0, 100.0);

        let energy_rate = match context {
            NeedContext::Resting => -2.0 * cfg.energy_decay_rate, // recovers
            _ => cfg.energy_decay_rate * w.energy,
        };
        self.energy = clamp(self.energy - energy_rate * dt, 0.0, 100.0);

        let fun_rate = match context {
            NeedContext::Enjoying => -3.0 * cfg.fun_decay_rate, // recovers
            NeedContext::Queuing => cfg.fun_decay_rate * w.fun + cfg.queue_boredom_rate,
            _ => cfg.fun_decay_rate * w.fun,
        };
        self.fun = clamp(self.fun - fun_rate * dt, 0.0, 100.0);
    }

    /// Restore a need by the given amount (clamped to the valid range)
    pub fn restore(&mut self, kind: NeedKind, amount: f32) {
        let slot = match kind {
            NeedKind::Hunger => &mut self.hunger,
            NeedKind::Thirst => &mut self.thirst,
            NeedKind::Toilet => &mut self.toilet,
            NeedKind::Fun => &mut self.fun,
            NeedKind::Energy => &mut self.energy,
        };
        *slot = clamp(*slot + amount, 0.0, 100.0);
    }

    /// Most urgent need below the urgency threshold, if any
    ///
    /// Checked in fixed priority order: a desperate bladder outranks an
    /// empty stomach outranks tired feet.
    pub fn most_urgent(&self) -> Option<(NeedKind, f32)> {
        let threshold = config().urgent_need_threshold;
        if self.toilet < threshold {
            return Some((NeedKind::Toilet, self.toilet));
        }
        if self.thirst < threshold {
            return Some((NeedKind::Thirst, self.thirst));
        }
        if self.hunger < threshold {
            return Some((NeedKind::Hunger, self.hunger));
        }
        if self.energy < threshold {
            return Some((NeedKind::Energy, self.energy));
        }
        None
    }

    /// Average of the four non-fun needs (the comfort half of happiness)
    pub fn comfort_average(&self) -> f32 {
        (self.hunger + self.thirst + self.toilet + self.energy) / 4.0
    }

    /// True when every need sits inside [0, 100]
    pub fn in_range(&self) -> bool {
        [self.hunger, self.thirst, self.toilet, self.fun, self.energy]
            .iter()
            .all(|&n| (0.0..=100.0).contains(&n))
    }
}
