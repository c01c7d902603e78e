//! Research projects
//!
//! Research is a money-gated, time-boxed investment that permanently
//! improves one aspect of park operation when it completes.

use serde::{Deserialize, Serialize};

use crate::core::types::ResearchId;

/// What a research project improves once finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResearchKind {
    /// Better inspection schedules: rides break down less often
    RideEngineering,
    /// Smarter layouts and signage: more visitors find their way in
    CrowdFlow,
    /// Guest-services training: a standing comfort bonus to park mood
    GuestServices,
}

impl ResearchKind {
    pub const ALL: [ResearchKind; 3] = [
        ResearchKind::RideEngineering,
        ResearchKind::CrowdFlow,
        ResearchKind::GuestServices,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RideEngineering => "Ride Engineering",
            Self::CrowdFlow => "Crowd Flow Analysis",
            Self::GuestServices => "Guest Services Training",
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            Self::RideEngineering => 8_000.0,
            Self::CrowdFlow => 6_000.0,
            Self::GuestServices => 5_000.0,
        }
    }

    /// Time to complete, in game-hours
    pub fn duration_hours(&self) -> f32 {
        match self {
            Self::RideEngineering => 48.0,
            Self::CrowdFlow => 36.0,
            Self::GuestServices => 24.0,
        }
    }
}

/// Typed research-start payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    pub kind: ResearchKind,
}

/// A funded research project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchProject {
    pub id: ResearchId,
    pub kind: ResearchKind,
    pub cost: f64,
    pub duration_hours: f32,
    pub progress_hours: f32,
    pub completed: bool,
}

impl ResearchProject {
    pub fn new(id: ResearchId, kind: ResearchKind) -> Self {
        Self {
            id,
            kind,
            cost: kind.cost(),
            duration_hours: kind.duration_hours(),
            progress_hours: 0.0,
            completed: false,
        }
    }

    /// Advance by `dt` game-seconds; returns true on the completing tick
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.completed {
            return false;
        }
        self.progress_hours += dt / 3600.0;
        if self.progress_hours >= self.duration_hours {
            self.completed = true;
            return true;
        }
        false
    }

    /// Completion fraction for progress bars, 0-1
    pub fn progress(&self) -> f32 {
        (self.progress_hours / self.duration_hours).min(1.0)
    }
}
