//! Weather controller: rotation, continuous effects, forecast
//!
//! Holds a single current condition and replaces it wholesale when its
//! duration elapses or the rotation interval is reached. Continuous
//! per-tick effects (visitor happiness, cleanliness, ride sensitivity) are
//! queried by the park aggregate each update.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::ride::Ride;
use crate::weather::condition::{Season, WeatherCondition, WeatherKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherController {
    current: WeatherCondition,
    /// Game-seconds since the last rotation
    rotation_timer: f32,
}

impl WeatherController {
    pub fn new<R: Rng>(season: Season, rng: &mut R) -> Self {
        Self {
            current: WeatherCondition::generate_for_season(season, rng),
            rotation_timer: 0.0,
        }
    }

    pub fn current(&self) -> &WeatherCondition {
        &self.current
    }

    /// Advance timers; returns the new condition if the weather changed
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        season: Season,
        rng: &mut R,
    ) -> Option<WeatherCondition> {
        self.rotation_timer += dt;
        self.current.remaining_hours -= dt / 3600.0;

        if self.current.remaining_hours <= 0.0
            || self.rotation_timer >= config().weather_rotation_interval
        {
            self.current = WeatherCondition::generate_for_season(season, rng);
            self.rotation_timer = 0.0;
            tracing::debug!(weather = ?self.current.kind, "weather changed");
            return Some(self.current.clone());
        }

        None
    }

    /// Scripted-event override: replace the condition immediately
    pub fn force<R: Rng>(&mut self, kind: WeatherKind, rng: &mut R) -> WeatherCondition {
        self.current = WeatherCondition::generate(kind, rng);
        self.rotation_timer = 0.0;
        self.current.clone()
    }

    /// Next `count` conditions, independently sampled from the season pool
    pub fn forecast<R: Rng>(
        &self,
        season: Season,
        count: usize,
        rng: &mut R,
    ) -> Vec<WeatherCondition> {
        (0..count)
            .map(|_| WeatherCondition::generate_for_season(season, rng))
            .collect()
    }

    /// Toggle weather sensitivity on every ride for the current condition
    pub fn apply_to_rides(&self, rides: &mut [Ride]) {
        for ride in rides.iter_mut() {
            ride.weather_sensitive = ride.kind.weather_sensitive_in(self.current.kind);
        }
    }

    /// Happiness delta for one visitor over `dt` game-seconds
    ///
    /// `sensitivity` is the visitor's 0-100 weather sensitivity;
    /// `preference` is their favorite weather (None = no preference).
    /// Effects are tuned per game-minute, hence the dt/60 proration.
    pub fn visitor_happiness_delta(
        &self,
        sensitivity: f32,
        preference: Option<WeatherKind>,
        dt: f32,
    ) -> f32 {
        let mut effect = match preference {
            Some(kind) if kind == self.current.kind => 5.0,
            Some(_) => 0.0,
            None => 1.0,
        };

        effect += self.current.kind.happiness_effect(sensitivity / 100.0);
        effect * dt / 60.0
    }

    /// Cleanliness delta over `dt` game-seconds (rain washes litter around)
    pub fn cleanliness_delta(&self, dt: f32) -> f32 {
        if self.current.kind.degrades_cleanliness() {
            -0.1 * dt / 60.0
        } else {
            0.0
        }
    }
}
