//! Query point for the risk lookup.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Geographic point (lon/lat, WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            bail!("Latitude {} out of range [-90, 90]", lat);
        }
        if !(-180.0..=180.0).contains(&lon) {
            bail!("Longitude {} out of range [-180, 180]", lon);
        }
        Ok(Self { lat, lon })
    }

    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            lat: 41.44777,
            lon: -90.50483,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parse "lat,lon"
impl FromStr for Location {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .with_context(|| format!("Location '{}' is not in lat,lon form", s))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude '{}'", lat.trim()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude '{}'", lon.trim()))?;
        Location::new(lon, lat)
    }
}
