//! Economic aggregation
//!
//! One net money delta per tick: ride tickets and facility trade on the
//! income side; wages and upkeep on the expense side. Gate admissions and
//! visitor purchases land in the park's pending-income pot during the tick
//! and are folded in here.

use crate::core::config::config;
use crate::park::park::Park;

/// Income/expense totals for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct EconomyDelta {
    pub income: f64,
    pub expenses: f64,
}

impl EconomyDelta {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Apply the tick's economic step to the park balance
pub(crate) fn economic_step(park: &mut Park, dt: f32) -> EconomyDelta {
    let mut delta = EconomyDelta::default();

    for ride in &park.rides {
        delta.income += ride.income(dt);
        delta.expenses += ride.maintenance(dt);
    }

    for facility in &park.facilities {
        delta.income += facility.income(dt);
        delta.expenses += facility.maintenance(dt);
    }

    for staff in &park.staff {
        delta.expenses += staff.wages(dt);
    }

    delta.income += park.pending_income;
    park.pending_income = 0.0;

    park.stats.money += delta.net();
    if !config().allow_debt && park.stats.money < 0.0 {
        park.stats.money = 0.0;
    }

    // Monthly ledger rolls over with the calendar
    let month = park.clock.month();
    if month != park.ledger_month {
        tracing::info!(
            income = park.monthly_income,
            expenses = park.monthly_expenses,
            "monthly ledger closed"
        );
        park.monthly_income = 0.0;
        park.monthly_expenses = 0.0;
        park.ledger_month = month;
    }
    park.monthly_income += delta.income;
    park.monthly_expenses += delta.expenses;

    delta
}

/// Weighted sum of construction, reputation, and guest sentiment
pub(crate) fn park_value(park: &Park) -> f64 {
    let ride_value: f64 = park.rides.iter().map(|r| r.purchase_cost * 0.7).sum();
    let facility_value: f64 = park.facilities.iter().map(|f| f.cost * 0.6).sum();
    ride_value
        + facility_value
        + park.stats.reputation as f64 * 50.0
        + park.stats.happiness as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;
    use crate::park::staff::{StaffConfig, StaffRole};
    use crate::ride::RideKind;

    #[test]
    fn test_wages_drain_money() {
        let mut park = Park::new("Test Park", 42);
        park.hire_staff(StaffConfig {
            role: StaffRole::Janitor,
            name: None,
        });
        let before = park.stats.money;

        economic_step(&mut park, 3600.0);
        assert!(park.stats.money < before);
    }

    #[test]
    fn test_pending_income_is_folded_once() {
        let mut park = Park::new("Test Park", 42);
        park.pending_income = 100.0;
        let before = park.stats.money;

        let delta = economic_step(&mut park, 0.0);
        assert!((delta.income - 100.0).abs() < 0.001);
        assert!((park.stats.money - before - 100.0).abs() < 0.001);

        // Second step sees nothing left in the pot
        let delta = economic_step(&mut park, 0.0);
        assert_eq!(delta.income, 0.0);
    }

    #[test]
    fn test_park_value_grows_with_construction() {
        let mut park = Park::new("Test Park", 42);
        let empty_value = park_value(&park);

        park.add_ride(RideKind::RollerCoaster, Vec3::ground(10.0, 10.0));
        assert!(park_value(&park) > empty_value);
    }
}
