use geo::{Coord, LineString, Polygon};

use geojson::LineStringType;

/// Build a simple polygon from one feed ring.
///
/// Positions shorter than two ordinates are skipped. The ring is closed if
/// the feed left it open; fewer than three distinct vertices yields `None`.
pub fn ring_to_polygon(ring: &LineStringType) -> Option<Polygon<f64>> {
    let mut coords: Vec<Coord<f64>> = ring
        .iter()
        .filter_map(|position| match position.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            _ => None,
        })
        .collect();

    if coords.len() < 3 {
        return None;
    }

    // Close the ring if needed
    if coords.first() != coords.last() {
        coords.push(coords[0]);
    }

    if coords.len() < 4 {
        return None;
    }

    Some(Polygon::new(LineString::new(coords), vec![]))
}
