//! Park events: human-readable notifications out of the simulation
//!
//! Each `Park::update` returns the events raised during that tick; the UI
//! layer renders them as transient messages. The park also keeps a bounded
//! log for the event feed panel.

use serde::{Deserialize, Serialize};

use crate::weather::WeatherKind;

/// Something notable that happened during a tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParkEvent {
    WeatherChanged {
        kind: WeatherKind,
        description: String,
    },
    RideBuilt {
        name: String,
        cost: f64,
    },
    RideDemolished {
        name: String,
        refund: f64,
    },
    RideBrokeDown {
        name: String,
    },
    RideRepaired {
        name: String,
    },
    VisitorComplaint {
        text: String,
    },
    ObjectiveCompleted {
        id: String,
        description: String,
        reward: f64,
    },
    AchievementUnlocked {
        name: String,
        reward: f64,
    },
    ScenarioCompleted {
        name: String,
        bonus: f64,
    },
    ResearchCompleted {
        name: String,
    },
    CampaignStarted {
        name: String,
        cost: f64,
    },
    CampaignCompleted {
        name: String,
    },
    RandomEvent {
        description: String,
    },
}

impl ParkEvent {
    /// Formatted message for on-screen display
    pub fn message(&self) -> String {
        match self {
            Self::WeatherChanged { description, .. } => {
                format!("Weather Update: {}", description)
            }
            Self::RideBuilt { name, cost } => format!("{} built for ${:.0}!", name, cost),
            Self::RideDemolished { name, refund } => {
                format!("{} demolished (${:.0} refunded)", name, refund)
            }
            Self::RideBrokeDown { name } => format!("{} has broken down!", name),
            Self::RideRepaired { name } => format!("{} is operational again", name),
            Self::VisitorComplaint { text } => text.clone(),
            Self::ObjectiveCompleted {
                description,
                reward,
                ..
            } => format!("Objective complete: {} (+${:.0})", description, reward),
            Self::AchievementUnlocked { name, reward } => {
                format!("Achievement: {} - ${:.0}!", name, reward)
            }
            Self::ScenarioCompleted { name, bonus } => {
                format!("Scenario Complete: {}! Bonus: ${:.0}", name, bonus)
            }
            Self::ResearchCompleted { name } => format!("Research complete: {}", name),
            Self::CampaignStarted { name, cost } => {
                format!("Started {} campaign for ${:.0}", name, cost)
            }
            Self::CampaignCompleted { name } => format!("{} campaign completed", name),
            Self::RandomEvent { description } => description.clone(),
        }
    }
}

/// Bounded in-memory feed of recent events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<ParkEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, event: ParkEvent) {
        self.events.push(event);
        if self.events.len() > self.capacity {
            let overflow = self.events.len() - self.capacity;
            self.events.drain(..overflow);
        }
    }

    pub fn extend(&mut self, events: &[ParkEvent]) {
        for event in events {
            self.push(event.clone());
        }
    }

    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ParkEvent> {
        self.events.iter().rev().take(count)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_is_bounded() {
        let mut log = EventLog::new(3);
        for i in 0..10 {
            log.push(ParkEvent::RideBrokeDown {
                name: format!("Ride #{}", i),
            });
        }
        assert_eq!(log.len(), 3);

        // Most recent first
        let names: Vec<String> = log.recent(3).map(|e| e.message()).collect();
        assert!(names[0].contains("Ride #9"));
    }

    #[test]
    fn test_messages_are_human_readable() {
        let event = ParkEvent::AchievementUnlocked {
            name: "Millionaire Tycoon".into(),
            reward: 50_000.0,
        };
        assert_eq!(event.message(), "Achievement: Millionaire Tycoon - $50000!");
    }
}
