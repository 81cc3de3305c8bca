//! Point-in-polygon risk classification.

use anyhow::{bail, Result};
use geo::{Contains, Polygon};
use tracing::debug;

use super::geometry::ring_to_polygon;
use crate::models::{
    polygon_rings, Location, OutlookCollection, OutlookProperties, RiskAssessment,
};

/// One ring of a risk feature as a simple polygon, with its metadata
#[derive(Debug, Clone)]
pub struct RiskArea {
    pub label: String,
    pub description: Option<String>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub polygon: Polygon<f64>,
}

/// Risk areas in feed order (lowest to highest severity)
pub struct RiskClassifier {
    areas: Vec<RiskArea>,
}

impl RiskClassifier {
    /// Flatten every ring of every feature into a risk area.
    ///
    /// Holes are not subtracted: each ring, interior or not, becomes its own
    /// polygon carrying the feature's label.
    pub fn from_collection(collection: &OutlookCollection) -> Result<Self> {
        let mut areas = Vec::new();

        for (idx, feature) in collection.features.iter().enumerate() {
            let geometry = match &feature.geometry {
                Some(g) => g,
                None => {
                    debug!("Feature {} has no geometry", idx);
                    continue;
                }
            };

            let rings = polygon_rings(geometry);
            if rings.is_empty() {
                debug!("Feature {} has no polygon rings", idx);
                continue;
            }

            let props = OutlookProperties::from_feature(feature);
            let label = match props.risk_label() {
                Some(l) => l.to_string(),
                None => bail!("Outlook feature {} has no LABEL or LABEL2", idx),
            };

            debug!(
                "Feature {} ({}) issued {} valid {} expires {}",
                idx,
                label,
                props.issue.as_deref().unwrap_or("?"),
                props.valid.as_deref().unwrap_or("?"),
                props.expire.as_deref().unwrap_or("?")
            );

            for ring in rings {
                match ring_to_polygon(ring) {
                    Some(polygon) => areas.push(RiskArea {
                        label: label.clone(),
                        description: props.label2.clone(),
                        stroke: props.stroke.clone(),
                        fill: props.fill.clone(),
                        polygon,
                    }),
                    None => debug!("Skipping degenerate ring in feature {} ({})", idx, label),
                }
            }
        }

        debug!("Built {} risk areas", areas.len());
        Ok(Self { areas })
    }

    /// Classify a point. The last containing area wins.
    pub fn classify(&self, location: Location) -> RiskAssessment {
        let point = location.point();

        let matched = self
            .areas
            .iter()
            .filter(|area| area.polygon.contains(&point))
            .last();

        match matched {
            Some(area) => {
                debug!("{} is inside {}", location, area.label);
                RiskAssessment::Risk {
                    label: area.label.clone(),
                    description: area.description.clone(),
                }
            }
            None => RiskAssessment::NoRisk,
        }
    }

    pub fn areas(&self) -> &[RiskArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
