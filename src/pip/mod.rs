//! Point-in-Polygon (PIP) risk lookup.
//!
//! Turns outlook features into simple polygons and finds the last one in
//! feed order that contains the query point.

mod classifier;
mod geometry;

pub use classifier::{RiskArea, RiskClassifier};
pub use geometry::ring_to_polygon;
