//! Facilities: shops, stalls, and restrooms

use serde::{Deserialize, Serialize};

use crate::core::types::{FacilityId, Vec3};

/// Type of facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityKind {
    FoodStand,
    DrinkStall,
    GiftShop,
    Restroom,
}

impl FacilityKind {
    pub const ALL: [FacilityKind; 4] = [
        FacilityKind::FoodStand,
        FacilityKind::DrinkStall,
        FacilityKind::GiftShop,
        FacilityKind::Restroom,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FoodStand => "Food Stand",
            Self::DrinkStall => "Drink Stall",
            Self::GiftShop => "Gift Shop",
            Self::Restroom => "Restroom",
        }
    }

    /// One-time construction cost
    pub fn cost(&self) -> f64 {
        match self {
            Self::FoodStand => 1_800.0,
            Self::DrinkStall => 1_200.0,
            Self::GiftShop => 2_000.0,
            Self::Restroom => 1_500.0,
        }
    }

    /// Baseline income per game-hour at full customer flow
    pub fn income_per_hour(&self) -> f64 {
        match self {
            Self::FoodStand => 120.0,
            Self::DrinkStall => 80.0,
            Self::GiftShop => 150.0,
            Self::Restroom => 0.0,
        }
    }

    /// Upkeep per game-hour
    pub fn maintenance_per_hour(&self) -> f64 {
        match self {
            Self::FoodStand => 20.0,
            Self::DrinkStall => 12.0,
            Self::GiftShop => 25.0,
            Self::Restroom => 15.0,
        }
    }

    /// Customers served at once
    pub fn customer_capacity(&self) -> u32 {
        match self {
            Self::FoodStand => 10,
            Self::DrinkStall => 6,
            Self::GiftShop => 8,
            Self::Restroom => 4,
        }
    }

    /// Price of one purchase, charged to the visitor
    pub fn price(&self) -> f64 {
        match self {
            Self::FoodStand => 12.0,
            Self::DrinkStall => 5.0,
            Self::GiftShop => 18.0,
            Self::Restroom => 0.0,
        }
    }

    /// Footprint as (width, depth) in meters
    pub fn footprint(&self) -> (f32, f32) {
        (2.0, 2.0)
    }

    /// Fraction refunded on demolition
    pub fn refund(&self) -> f64 {
        match self {
            Self::GiftShop => 200.0,
            _ => self.cost() * 0.1,
        }
    }
}

/// A built facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub kind: FacilityKind,
    pub name: String,
    pub position: Vec3,
    pub cost: f64,
    pub income_per_hour: f64,
    pub maintenance_per_hour: f64,
    pub customer_capacity: u32,
    /// Visitors currently at the counter; refreshed each tick by the park
    pub current_customers: u32,
}

impl Facility {
    pub fn new(id: FacilityId, kind: FacilityKind, name: String, position: Vec3) -> Self {
        Self {
            id,
            kind,
            name,
            position,
            cost: kind.cost(),
            income_per_hour: kind.income_per_hour(),
            maintenance_per_hour: kind.maintenance_per_hour(),
            customer_capacity: kind.customer_capacity(),
            current_customers: 0,
        }
    }

    /// Passive income over `dt` seconds, scaled by current customer flow
    pub fn income(&self, dt: f32) -> f64 {
        if self.customer_capacity == 0 {
            return 0.0;
        }
        let flow = (self.current_customers as f64 / self.customer_capacity as f64).min(1.0);
        self.income_per_hour * flow * (dt / 3600.0) as f64
    }

    /// Upkeep owed over `dt` seconds
    pub fn maintenance(&self, dt: f32) -> f64 {
        self.maintenance_per_hour * (dt / 3600.0) as f64
    }
}
