//! Stormrisk - severe weather outlook lookup for a single point
//!
//! This library provides the archive resolver, the point-in-polygon risk
//! classifier and the SVG renderer used by the `stormrisk` binary.

pub mod archive;
pub mod config;
pub mod models;
pub mod pip;
pub mod render;

pub use archive::{OutlookFetcher, Snapshot};
pub use models::{Location, OutlookCollection, RiskAssessment, RiskLevel};
pub use pip::RiskClassifier;
