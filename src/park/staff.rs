//! Staff members and hiring

use serde::{Deserialize, Serialize};

use crate::core::types::{StaffId, Vec3};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Repairs broken-down rides
    Mechanic,
    /// Keeps the grounds clean
    Janitor,
    /// Lifts visitor spirits around the park
    Entertainer,
    /// Deters trouble; bad random events hit less often
    SecurityGuard,
}

impl StaffRole {
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Mechanic,
        StaffRole::Janitor,
        StaffRole::Entertainer,
        StaffRole::SecurityGuard,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mechanic => "Mechanic",
            Self::Janitor => "Janitor",
            Self::Entertainer => "Entertainer",
            Self::SecurityGuard => "Security Guard",
        }
    }

    /// Wage per game-hour
    pub fn salary_per_hour(&self) -> f64 {
        match self {
            Self::Mechanic => 28.0,
            Self::Janitor => 15.0,
            Self::Entertainer => 20.0,
            Self::SecurityGuard => 22.0,
        }
    }
}

/// Typed hiring payload (commands carry no open-ended dictionaries)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffConfig {
    pub role: StaffRole,
    /// Optional badge name; a default is generated when absent
    pub name: Option<String>,
}

/// An employed staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    pub role: StaffRole,
    pub salary_per_hour: f64,
    /// 0-100; boosted by morale events
    pub morale: f32,
    pub position: Vec3,
}

impl Staff {
    pub fn new(id: StaffId, config: StaffConfig, position: Vec3) -> Self {
        let name = config
            .name
            .unwrap_or_else(|| format!("{} #{}", config.role.display_name(), id.0));
        Self {
            id,
            name,
            role: config.role,
            salary_per_hour: config.role.salary_per_hour(),
            morale: 70.0,
            position,
        }
    }

    /// Wages owed over `dt` game-seconds
    pub fn wages(&self, dt: f32) -> f64 {
        self.salary_per_hour * (dt / 3600.0) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_uses_role_and_id() {
        let staff = Staff::new(
            StaffId(7),
            StaffConfig {
                role: StaffRole::Mechanic,
                name: None,
            },
            Vec3::default(),
        );
        assert_eq!(staff.name, "Mechanic #7");
        assert_eq!(staff.salary_per_hour, 28.0);
    }

    #[test]
    fn test_wages_prorate() {
        let staff = Staff::new(
            StaffId(1),
            StaffConfig {
                role: StaffRole::Janitor,
                name: Some("Pat".into()),
            },
            Vec3::default(),
        );
        assert!((staff.wages(1800.0) - 7.5).abs() < 0.001);
    }
}
