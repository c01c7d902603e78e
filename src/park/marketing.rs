//! Marketing campaigns
//!
//! A campaign is a money-gated, time-boxed reputation and spawn-rate
//! booster. At most one campaign of each type runs at a time.

use serde::{Deserialize, Serialize};

/// Campaign archetype with fixed cost, length, and effectiveness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignKind {
    Radio,
    Tv,
    Newspaper,
    Online,
    Billboard,
}

impl CampaignKind {
    pub const ALL: [CampaignKind; 5] = [
        CampaignKind::Radio,
        CampaignKind::Tv,
        CampaignKind::Newspaper,
        CampaignKind::Online,
        CampaignKind::Billboard,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Radio => "Radio Advertising",
            Self::Tv => "Television Commercial",
            Self::Newspaper => "Newspaper Ads",
            Self::Online => "Online Marketing",
            Self::Billboard => "Billboard Campaign",
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            Self::Radio => 2_000.0,
            Self::Tv => 8_000.0,
            Self::Newspaper => 1_500.0,
            Self::Online => 3_000.0,
            Self::Billboard => 5_000.0,
        }
    }

    /// Campaign length in game-days
    pub fn duration_days(&self) -> f32 {
        match self {
            Self::Radio => 7.0,
            Self::Tv => 14.0,
            Self::Newspaper => 5.0,
            Self::Online => 10.0,
            Self::Billboard => 30.0,
        }
    }

    /// Effectiveness percentage, 0-100
    pub fn effectiveness(&self) -> f32 {
        match self {
            Self::Radio => 60.0,
            Self::Tv => 85.0,
            Self::Newspaper => 45.0,
            Self::Online => 70.0,
            Self::Billboard => 50.0,
        }
    }

    /// Advertised visitor draw over the whole campaign
    pub fn expected_visitor_increase(&self) -> u32 {
        match self {
            Self::Radio => 50,
            Self::Tv => 200,
            Self::Newspaper => 30,
            Self::Online => 80,
            Self::Billboard => 100,
        }
    }
}

/// A running campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingCampaign {
    pub kind: CampaignKind,
    pub days_remaining: f32,
}

impl MarketingCampaign {
    pub fn new(kind: CampaignKind) -> Self {
        Self {
            kind,
            days_remaining: kind.duration_days(),
        }
    }

    /// Continuous reputation trickle over `dt` game-seconds
    pub fn reputation_trickle(&self, dt: f32) -> f32 {
        0.1 * (self.kind.effectiveness() / 100.0) * (dt / 3600.0)
    }

    /// One-time reputation bonus granted when the campaign wraps up
    pub fn completion_bonus(&self) -> f32 {
        (self.kind.effectiveness() / 10.0).floor()
    }

    /// Multiplier contribution to the visitor spawn rate while active
    pub fn spawn_boost(&self) -> f32 {
        1.0 + 0.002 * self.kind.effectiveness()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_presets_match_catalog() {
        assert_eq!(CampaignKind::Tv.cost(), 8_000.0);
        assert_eq!(CampaignKind::Tv.duration_days(), 14.0);
        assert_eq!(CampaignKind::Billboard.duration_days(), 30.0);
        assert_eq!(CampaignKind::Newspaper.cost(), 1_500.0);
    }

    #[test]
    fn test_completion_bonus_scales_with_effectiveness() {
        assert_eq!(MarketingCampaign::new(CampaignKind::Tv).completion_bonus(), 8.0);
        assert_eq!(
            MarketingCampaign::new(CampaignKind::Newspaper).completion_bonus(),
            4.0
        );
    }

    #[test]
    fn test_spawn_boost_above_one() {
        for kind in CampaignKind::ALL {
            assert!(MarketingCampaign::new(kind).spawn_boost() > 1.0);
        }
    }
}
