//! In-game clock: speed scaling, pause, and calendar derivation
//!
//! The driver loop is the sole time source; every update receives elapsed
//! wall seconds and the clock converts them to game seconds via the speed
//! multiplier. No simulation component reads ambient time itself.

use serde::{Deserialize, Serialize};

use crate::core::config::config;

/// Game-seconds in one in-game day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one in-game month (fixed-length months keep the math simple)
pub const DAYS_PER_MONTH: u64 = 30;

/// Months in one in-game year
pub const MONTHS_PER_YEAR: u64 = 12;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tracks in-game time with a configurable speed multiplier and pause flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    /// Game-seconds elapsed since the park opened
    seconds: f64,
    /// Speed multiplier applied to incoming elapsed time
    speed: f32,
    /// While paused, `scale` returns zero and the clock does not advance
    paused: bool,
}

impl GameClock {
    /// New clock starting at 9:00 on day 1 of June (opening day)
    pub fn new() -> Self {
        let opening = (5 * DAYS_PER_MONTH) as f64 * SECONDS_PER_DAY + 9.0 * 3600.0;
        Self {
            seconds: opening,
            speed: 1.0,
            paused: false,
        }
    }

    /// Convert elapsed wall seconds into game seconds
    ///
    /// Returns 0 while paused so callers can short-circuit their tick.
    pub fn scale(&self, elapsed: f32) -> f32 {
        if self.paused {
            0.0
        } else {
            elapsed * self.speed
        }
    }

    /// Advance the clock by already-scaled game seconds
    pub fn advance(&mut self, game_seconds: f32) {
        self.seconds += game_seconds as f64;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the speed multiplier, clamped to the configured range
    pub fn set_speed(&mut self, speed: f32) {
        let cfg = config();
        self.speed = speed.max(cfg.min_game_speed).min(cfg.max_game_speed);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn total_seconds(&self) -> f64 {
        self.seconds
    }

    /// Days elapsed since epoch (day 0 = Jan 1, year 1)
    pub fn total_days(&self) -> u64 {
        (self.seconds / SECONDS_PER_DAY) as u64
    }

    /// Calendar year, starting at 1
    pub fn year(&self) -> u64 {
        self.total_days() / (DAYS_PER_MONTH * MONTHS_PER_YEAR) + 1
    }

    /// Month within the year, 1-12
    pub fn month(&self) -> u32 {
        ((self.total_days() / DAYS_PER_MONTH) % MONTHS_PER_YEAR) as u32 + 1
    }

    /// Day within the month, 1-30
    pub fn day_of_month(&self) -> u32 {
        (self.total_days() % DAYS_PER_MONTH) as u32 + 1
    }

    /// Hour of day, 0-23
    pub fn hour(&self) -> u32 {
        ((self.seconds % SECONDS_PER_DAY) / 3600.0) as u32
    }

    /// Minute within the hour, 0-59
    pub fn minute(&self) -> u32 {
        ((self.seconds % 3600.0) / 60.0) as u32
    }

    /// Human-readable date/time for the UI header
    pub fn formatted(&self) -> String {
        format!(
            "Year {}, {} {} - {:02}:{:02}",
            self.year(),
            MONTH_NAMES[(self.month() - 1) as usize],
            self.day_of_month(),
            self.hour(),
            self.minute()
        )
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_in_june() {
        let clock = GameClock::new();
        assert_eq!(clock.month(), 6);
        assert_eq!(clock.day_of_month(), 1);
        assert_eq!(clock.hour(), 9);
    }

    #[test]
    fn test_clock_advance_rolls_days() {
        let mut clock = GameClock::new();
        clock.advance(SECONDS_PER_DAY as f32);
        assert_eq!(clock.day_of_month(), 2);
        assert_eq!(clock.month(), 6);
    }

    #[test]
    fn test_scale_respects_pause() {
        let mut clock = GameClock::new();
        assert_eq!(clock.scale(2.0), 2.0);

        clock.set_paused(true);
        assert_eq!(clock.scale(2.0), 0.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut clock = GameClock::new();
        clock.set_speed(100.0);
        assert_eq!(clock.speed(), 4.0);

        clock.set_speed(0.1);
        assert_eq!(clock.speed(), 1.0);
    }

    #[test]
    fn test_formatted_date() {
        let clock = GameClock::new();
        assert_eq!(clock.formatted(), "Year 1, Jun 1 - 09:00");
    }
}
