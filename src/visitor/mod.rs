//! Visitors: needs, personality, movement, and decision-making

pub mod decision;
pub mod needs;
pub mod personality;
pub mod visitor;

pub use needs::{NeedKind, Needs};
pub use personality::Personality;
pub use visitor::{Activity, SpendCategory, Visitor, VisitorOutcome};
