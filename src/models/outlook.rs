//! Categorical day 1 outlook layer on top of `geojson` types.

use geojson::{Feature, FeatureCollection, Geometry, LineStringType, Value};

/// Feature collection returned by the archive
pub type OutlookCollection = FeatureCollection;

/// Properties published with each risk polygon
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlookProperties {
    /// Short risk tag, e.g. "MRGL"
    pub label: Option<String>,
    /// Long risk text, e.g. "Marginal Risk"
    pub label2: Option<String>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub valid: Option<String>,
    pub expire: Option<String>,
    pub issue: Option<String>,
}

fn string_property(feature: &Feature, key: &str) -> Option<String> {
    feature
        .property(key)
        .and_then(|v| v.as_str())
        .map(String::from)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl OutlookProperties {
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            label: string_property(feature, "LABEL"),
            label2: string_property(feature, "LABEL2"),
            stroke: string_property(feature, "stroke"),
            fill: string_property(feature, "fill"),
            valid: string_property(feature, "VALID"),
            expire: string_property(feature, "EXPIRE"),
            issue: string_property(feature, "ISSUE"),
        }
    }

    /// Risk label of the feature: `LABEL`, else `LABEL2`
    pub fn risk_label(&self) -> Option<&str> {
        non_empty(&self.label).or_else(|| non_empty(&self.label2))
    }
}

/// Every ring of the polygonal parts of a geometry, flattened.
///
/// Interior rings are returned alongside exterior ones; callers treat every
/// ring as an independent simple polygon.
pub fn polygon_rings(geometry: &Geometry) -> Vec<&LineStringType> {
    match &geometry.value {
        Value::Polygon(polygon) => polygon.iter().collect(),
        Value::MultiPolygon(polygons) => polygons.iter().flatten().collect(),
        Value::GeometryCollection(geometries) => {
            geometries.iter().flat_map(polygon_rings).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-95.0, 40.0], [-90.0, 40.0], [-90.0, 45.0], [-95.0, 40.0]]],
                        [[[-80.0, 30.0], [-79.0, 30.0], [-79.0, 31.0, 0.0], [-80.0, 30.0]],
                         [[-79.8, 30.2], [-79.5, 30.2], [-79.5, 30.5], [-79.8, 30.2]]]
                    ]
                },
                "properties": {
                    "DN": 2,
                    "VALID": "202305151300",
                    "EXPIRE": "202305161200",
                    "ISSUE": "202305151250",
                    "LABEL": "TSTM",
                    "LABEL2": "General Thunderstorms Risk",
                    "stroke": "#55BB55",
                    "fill": "#C1E9C1"
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-90.0, 40.0] },
                "properties": { "LABEL2": "Marginal Risk" }
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {}
            }
        ]
    }"##;

    fn sample() -> OutlookCollection {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample_collection() {
        let collection = sample();
        assert_eq!(collection.features.len(), 3);

        let first = &collection.features[0];
        let props = OutlookProperties::from_feature(first);
        assert_eq!(props.risk_label(), Some("TSTM"));
        assert_eq!(props.fill.as_deref(), Some("#C1E9C1"));
        assert_eq!(props.valid.as_deref(), Some("202305151300"));
        assert_eq!(props.issue.as_deref(), Some("202305151250"));

        let rings = polygon_rings(first.geometry.as_ref().unwrap());
        assert_eq!(rings.len(), 3);
        assert_eq!(rings[1][2], vec![-79.0, 31.0, 0.0]);
    }

    #[test]
    fn test_non_polygon_and_missing_geometry() {
        let collection = sample();

        let point = &collection.features[1];
        assert!(polygon_rings(point.geometry.as_ref().unwrap()).is_empty());
        assert_eq!(
            OutlookProperties::from_feature(point).risk_label(),
            Some("Marginal Risk")
        );

        let empty = &collection.features[2];
        assert!(empty.geometry.is_none());
        assert_eq!(OutlookProperties::from_feature(empty).risk_label(), None);
    }

    #[test]
    fn test_empty_label_falls_back_to_label2() {
        let props = OutlookProperties {
            label: Some(String::new()),
            label2: Some("Marginal Risk".to_string()),
            ..OutlookProperties::default()
        };
        assert_eq!(props.risk_label(), Some("Marginal Risk"));

        let blank = OutlookProperties {
            label: Some(String::new()),
            label2: Some(String::new()),
            ..OutlookProperties::default()
        };
        assert_eq!(blank.risk_label(), None);
    }

    #[test]
    fn test_geometry_collection_rings() {
        let geometry: Geometry = serde_json::from_str(
            r#"{"type":"GeometryCollection","geometries":[
                {"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]},
                {"type":"LineString","coordinates":[[0,0],[1,1]]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(polygon_rings(&geometry).len(), 1);
    }

    #[test]
    fn test_empty_collection() {
        let collection: OutlookCollection =
            serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(collection.features.is_empty());
    }
}
