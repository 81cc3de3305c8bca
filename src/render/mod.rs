//! SVG rendering of outlook polygons for visual inspection.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{Location, RiskLevel};
use crate::pip::RiskArea;

/// Approximate lon/lat bounds of the continental US
pub const CONUS_BOUNDS: Bounds = Bounds {
    min_lon: -125.0,
    max_lon: -67.0,
    min_lat: 24.0,
    max_lat: 50.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Render options; the aspect ratio is always 1 degree : 1 degree
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub bounds: Bounds,
    /// Pixels per degree
    pub scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bounds: CONUS_BOUNDS,
            scale: 20.0,
        }
    }
}

impl RenderOptions {
    fn width(&self) -> f64 {
        (self.bounds.max_lon - self.bounds.min_lon) * self.scale
    }

    fn height(&self) -> f64 {
        (self.bounds.max_lat - self.bounds.min_lat) * self.scale
    }

    /// Lon/lat to SVG pixel space (y grows downward)
    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            (lon - self.bounds.min_lon) * self.scale,
            (self.bounds.max_lat - lat) * self.scale,
        )
    }
}

/// Accept only `#` followed by 3, 6 or 8 hex digits
fn sanitize_color(color: Option<&str>) -> Option<&str> {
    color.filter(|c| {
        let hex = match c.strip_prefix('#') {
            Some(h) => h,
            None => return false,
        };
        matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|ch| ch.is_ascii_hexdigit())
    })
}

fn area_colors(area: &RiskArea) -> (&str, &str) {
    let (default_stroke, default_fill) = area
        .label
        .parse::<RiskLevel>()
        .map(|level| level.colors())
        .unwrap_or(("#444444", "#CCCCCC"));

    (
        sanitize_color(area.stroke.as_deref()).unwrap_or(default_stroke),
        sanitize_color(area.fill.as_deref()).unwrap_or(default_fill),
    )
}

/// Render risk areas, in feed order, plus an optional query point marker.
pub fn render_svg(areas: &[RiskArea], location: Option<Location>, options: &RenderOptions) -> String {
    let width = options.width();
    let height = options.height();

    let mut svg = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(
        svg,
        r##"  <rect x="0" y="0" width="{:.0}" height="{:.0}" fill="#FFFFFF"/>"##,
        width, height
    );

    for area in areas {
        let (stroke, fill) = area_colors(area);
        let points: Vec<String> = area
            .polygon
            .exterior()
            .coords()
            .map(|c| {
                let (x, y) = options.project(c.x, c.y);
                format!("{:.2},{:.2}", x, y)
            })
            .collect();

        let _ = writeln!(
            svg,
            r#"  <polygon points="{}" stroke="{}" fill="{}" stroke-width="1"/>"#,
            points.join(" "),
            stroke,
            fill
        );
    }

    if let Some(location) = location {
        let (x, y) = options.project(location.lon, location.lat);
        let _ = writeln!(
            svg,
            r##"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="#000000"/>"##,
            x, y
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the SVG to `path`
pub fn write_svg<P: AsRef<Path>>(
    path: P,
    areas: &[RiskArea],
    location: Option<Location>,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(areas, location, options);
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote outlook graph to {}", path.display());
    Ok(())
}
