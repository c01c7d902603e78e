//! Weather kinds, seasons, and condition generation
//!
//! Weather affects visitor arrivals, visitor happiness, and ride
//! availability. Seasons change the probability pool a new condition is
//! drawn from.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Current weather kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snow,
    Heatwave,
}

impl WeatherKind {
    /// Multiplier applied to the visitor spawn rate under this weather
    pub fn visitor_multiplier(&self) -> f32 {
        match self {
            Self::Sunny => 1.3,
            Self::Cloudy => 0.9,
            Self::Rainy => 0.4,
            Self::Stormy => 0.2,
            Self::Snow => 0.6,
            Self::Heatwave => 0.7,
        }
    }

    /// Multiplier applied to ride availability under this weather
    pub fn ride_availability_multiplier(&self) -> f32 {
        match self {
            Self::Sunny => 1.0,
            Self::Cloudy => 1.0,
            Self::Rainy => 0.6,
            Self::Stormy => 0.3,
            Self::Snow => 0.7,
            Self::Heatwave => 0.8,
        }
    }

    /// Sampling range for condition intensity (0-100)
    pub fn intensity_range(&self) -> (f32, f32) {
        match self {
            Self::Sunny => (60.0, 100.0),
            Self::Cloudy => (40.0, 70.0),
            Self::Rainy => (50.0, 100.0),
            Self::Stormy => (80.0, 100.0),
            Self::Snow => (30.0, 70.0),
            Self::Heatwave => (90.0, 100.0),
        }
    }

    /// Sampling range for condition duration in game-hours
    pub fn duration_range_hours(&self) -> (f32, f32) {
        match self {
            Self::Sunny => (4.0, 8.0),
            Self::Cloudy => (3.0, 6.0),
            Self::Rainy => (2.0, 5.0),
            Self::Stormy => (1.0, 3.0),
            Self::Snow => (3.0, 8.0),
            Self::Heatwave => (6.0, 12.0),
        }
    }

    /// One-line description shown when the weather changes
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sunny => "Beautiful sunny weather brings more visitors!",
            Self::Cloudy => "Overcast skies with comfortable temperatures",
            Self::Rainy => "Heavy rain forces some rides to close and keeps visitors away",
            Self::Stormy => "Severe thunderstorm! Most rides are closed for safety",
            Self::Snow => "Snow creates a winter wonderland but affects operations",
            Self::Heatwave => "Extreme heat makes visitors seek shade and air conditioning",
        }
    }

    /// Per-game-minute happiness delta for a visitor with the given weather
    /// sensitivity (0-1)
    pub fn happiness_effect(&self, sensitivity: f32) -> f32 {
        match self {
            Self::Sunny => 3.0 * (1.0 - sensitivity),
            Self::Cloudy => 1.0,
            Self::Rainy => -8.0 * sensitivity,
            Self::Stormy => -15.0 * sensitivity,
            Self::Snow => -5.0 * sensitivity,
            Self::Heatwave => -10.0 * sensitivity,
        }
    }

    /// Whether this weather degrades park cleanliness (mud, litter washout)
    pub fn degrades_cleanliness(&self) -> bool {
        matches!(self, Self::Rainy | Self::Stormy)
    }
}

/// Season derived from the in-game month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Get season from calendar month (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Weighted pool of weather kinds for this season
    ///
    /// Duplicated entries weight the draw (spring rains twice as often,
    /// summer is mostly sunny).
    pub fn weather_pool(&self) -> &'static [WeatherKind] {
        use WeatherKind::*;
        match self {
            Self::Spring => &[Sunny, Cloudy, Rainy, Rainy],
            Self::Summer => &[Sunny, Sunny, Sunny, Heatwave, Cloudy],
            Self::Autumn => &[Cloudy, Cloudy, Rainy, Sunny],
            Self::Winter => &[Snow, Cloudy, Cloudy, Sunny],
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::Summer
    }
}

/// A transient global weather condition
///
/// Replaced wholesale when its duration elapses or the rotation interval is
/// reached; never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub kind: WeatherKind,
    /// Strength of the condition, 0-100
    pub intensity: f32,
    /// Remaining duration in game-hours
    pub remaining_hours: f32,
    pub visitor_multiplier: f32,
    pub ride_availability_multiplier: f32,
    pub description: String,
}

impl WeatherCondition {
    /// Sample a fresh condition of the given kind
    pub fn generate<R: Rng>(kind: WeatherKind, rng: &mut R) -> Self {
        let (int_lo, int_hi) = kind.intensity_range();
        let (dur_lo, dur_hi) = kind.duration_range_hours();
        Self {
            kind,
            intensity: rng.gen_range(int_lo..int_hi),
            remaining_hours: rng.gen_range(dur_lo..dur_hi),
            visitor_multiplier: kind.visitor_multiplier(),
            ride_availability_multiplier: kind.ride_availability_multiplier(),
            description: kind.description().to_string(),
        }
    }

    /// Draw a kind from the season's weighted pool and sample a condition
    pub fn generate_for_season<R: Rng>(season: Season, rng: &mut R) -> Self {
        let pool = season.weather_pool();
        let kind = pool[rng.gen_range(0..pool.len())];
        Self::generate(kind, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
    }

    #[test]
    fn test_generated_condition_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let cond = WeatherCondition::generate_for_season(Season::Summer, &mut rng);
            let (lo, hi) = cond.kind.intensity_range();
            assert!(cond.intensity >= lo && cond.intensity <= hi);
            assert!(cond.remaining_hours > 0.0);
        }
    }

    #[test]
    fn test_winter_pool_has_snow_not_heatwave() {
        let pool = Season::Winter.weather_pool();
        assert!(pool.contains(&WeatherKind::Snow));
        assert!(!pool.contains(&WeatherKind::Heatwave));
    }

    #[test]
    fn test_storm_suppresses_visitors_most() {
        assert!(
            WeatherKind::Stormy.visitor_multiplier() < WeatherKind::Rainy.visitor_multiplier()
        );
        assert!(WeatherKind::Sunny.visitor_multiplier() > 1.0);
    }
}
