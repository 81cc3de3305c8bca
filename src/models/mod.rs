//! Core data models for the outlook lookup.

pub mod location;
pub mod outlook;
pub mod risk;

pub use location::Location;
pub use outlook::{polygon_rings, OutlookCollection, OutlookProperties};
pub use risk::{RiskAssessment, RiskLevel, NO_RISK};
