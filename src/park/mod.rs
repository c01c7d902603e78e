//! The park aggregate and everything it owns

pub mod economy;
pub mod events;
pub mod facility;
pub mod marketing;
pub mod objectives;
pub mod park;
pub mod placement;
pub mod research;
pub mod spawn;
pub mod staff;
pub mod stats;

pub use events::{EventLog, ParkEvent};
pub use facility::{Facility, FacilityKind};
pub use marketing::{CampaignKind, MarketingCampaign};
pub use objectives::{Objective, ObjectiveKind};
pub use park::Park;
pub use research::{ResearchConfig, ResearchKind, ResearchProject};
pub use staff::{Staff, StaffConfig, StaffRole};
pub use stats::ParkStats;
