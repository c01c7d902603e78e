//! Weather and seasons: condition generation and continuous effects

pub mod condition;
pub mod controller;

pub use condition::{Season, WeatherCondition, WeatherKind};
pub use controller::WeatherController;
