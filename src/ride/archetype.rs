//! Ride archetypes with fixed stat presets

use serde::{Deserialize, Serialize};

use crate::weather::condition::WeatherKind;

/// Type of ride
///
/// Each kind carries a fixed preset: cycle duration, staffing need,
/// capacity, costs, ratings, footprint, and weather-sensitivity rules.
/// `Prototype` is the unclassified fallback (120 s cycle, one operator,
/// weather-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideKind {
    FerrisWheel,
    RollerCoaster,
    Carousel,
    BumperCars,
    WaterSlide,
    DropTower,
    HauntedHouse,
    LogFlume,
    Prototype,
}

impl RideKind {
    pub const ALL: [RideKind; 9] = [
        RideKind::FerrisWheel,
        RideKind::RollerCoaster,
        RideKind::Carousel,
        RideKind::BumperCars,
        RideKind::WaterSlide,
        RideKind::DropTower,
        RideKind::HauntedHouse,
        RideKind::LogFlume,
        RideKind::Prototype,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FerrisWheel => "Ferris Wheel",
            Self::RollerCoaster => "Roller Coaster",
            Self::Carousel => "Carousel",
            Self::BumperCars => "Bumper Cars",
            Self::WaterSlide => "Water Slide",
            Self::DropTower => "Drop Tower",
            Self::HauntedHouse => "Haunted House",
            Self::LogFlume => "Log Flume",
            Self::Prototype => "Prototype Ride",
        }
    }

    /// Seconds for one full rider cycle
    pub fn cycle_seconds(&self) -> f32 {
        match self {
            Self::FerrisWheel => 300.0,
            Self::RollerCoaster => 180.0,
            Self::Carousel => 90.0,
            Self::BumperCars => 120.0,
            Self::WaterSlide => 150.0,
            Self::DropTower => 60.0,
            Self::HauntedHouse => 240.0,
            Self::LogFlume => 200.0,
            Self::Prototype => 120.0,
        }
    }

    /// Operators needed to run this ride
    pub fn staff_required(&self) -> u32 {
        match self {
            Self::FerrisWheel => 1,
            Self::RollerCoaster => 3,
            Self::Carousel => 1,
            Self::BumperCars => 2,
            Self::WaterSlide => 2,
            Self::DropTower => 2,
            Self::HauntedHouse => 2,
            Self::LogFlume => 2,
            Self::Prototype => 1,
        }
    }

    /// Riders per cycle
    pub fn capacity(&self) -> u32 {
        match self {
            Self::FerrisWheel => 20,
            Self::RollerCoaster => 24,
            Self::Carousel => 16,
            Self::BumperCars => 12,
            Self::WaterSlide => 10,
            Self::DropTower => 16,
            Self::HauntedHouse => 8,
            Self::LogFlume => 12,
            Self::Prototype => 8,
        }
    }

    /// One-time purchase cost
    pub fn purchase_cost(&self) -> f64 {
        match self {
            Self::FerrisWheel => 8_000.0,
            Self::RollerCoaster => 15_000.0,
            Self::Carousel => 5_000.0,
            Self::BumperCars => 6_500.0,
            Self::WaterSlide => 9_500.0,
            Self::DropTower => 12_000.0,
            Self::HauntedHouse => 7_000.0,
            Self::LogFlume => 11_000.0,
            Self::Prototype => 5_000.0,
        }
    }

    /// Upkeep cost per game-hour of ownership (paid whether open or not)
    pub fn maintenance_per_hour(&self) -> f64 {
        match self {
            Self::FerrisWheel => 60.0,
            Self::RollerCoaster => 120.0,
            Self::Carousel => 35.0,
            Self::BumperCars => 45.0,
            Self::WaterSlide => 70.0,
            Self::DropTower => 90.0,
            Self::HauntedHouse => 50.0,
            Self::LogFlume => 85.0,
            Self::Prototype => 40.0,
        }
    }

    /// Ratings as (excitement, intensity, nausea), each 0-100
    pub fn ratings(&self) -> (f32, f32, f32) {
        match self {
            Self::FerrisWheel => (35.0, 10.0, 5.0),
            Self::RollerCoaster => (85.0, 80.0, 45.0),
            Self::Carousel => (30.0, 15.0, 10.0),
            Self::BumperCars => (55.0, 40.0, 20.0),
            Self::WaterSlide => (65.0, 55.0, 35.0),
            Self::DropTower => (80.0, 90.0, 60.0),
            Self::HauntedHouse => (60.0, 45.0, 15.0),
            Self::LogFlume => (70.0, 50.0, 30.0),
            Self::Prototype => (40.0, 30.0, 20.0),
        }
    }

    /// Per-rider ticket price, derived from excitement and intensity
    pub fn ticket_price(&self) -> f64 {
        let (excitement, intensity, _) = self.ratings();
        2.0 + ((excitement + intensity) / 20.0) as f64
    }

    /// Footprint on the park grid as (width, depth) in meters
    pub fn footprint(&self) -> (f32, f32) {
        match self {
            Self::FerrisWheel => (6.0, 6.0),
            Self::RollerCoaster => (8.0, 6.0),
            Self::Carousel => (4.0, 4.0),
            Self::BumperCars => (4.0, 4.0),
            Self::WaterSlide => (4.0, 6.0),
            Self::DropTower => (2.0, 2.0),
            Self::HauntedHouse => (6.0, 4.0),
            Self::LogFlume => (8.0, 4.0),
            Self::Prototype => (4.0, 4.0),
        }
    }

    /// Whether this ride becomes weather-sensitive under the given condition
    ///
    /// Water and open-track rides suffer in rain and storms; tall metal
    /// rides get too hot to run safely in a heatwave.
    pub fn weather_sensitive_in(&self, weather: WeatherKind) -> bool {
        match weather {
            WeatherKind::Rainy | WeatherKind::Stormy => matches!(
                self,
                Self::WaterSlide | Self::RollerCoaster | Self::LogFlume
            ),
            WeatherKind::Heatwave => matches!(self, Self::RollerCoaster | Self::DropTower),
            _ => false,
        }
    }

    /// Whether this ride suits family-oriented visitors (low intensity)
    pub fn is_family_friendly(&self) -> bool {
        let (_, intensity, _) = self.ratings();
        intensity <= 45.0
    }

    /// Whether this ride qualifies as a thrill ride (high excitement)
    pub fn is_thrill_ride(&self) -> bool {
        let (excitement, _, _) = self.ratings();
        excitement >= 65.0
    }
}
