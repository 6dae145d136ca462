//! Shape-to-code serializer.
//!
//! [`render`] maps a [`DrawnGeometry`] to the Leaflet code snippet that
//! recreates it: coordinates with three decimal places, radii rounded to
//! whole units, one snippet per shape, newline-terminated. Pure functions,
//! no side effects, no failure modes — unknown kinds never reach this
//! module because [`DrawnGeometry`] is a closed set.
//!
//! The emitted constructor calls pass coordinates as `[lng, lat]`. Leaflet
//! itself expects `[lat, lng]`, but the ordering is part of the tool's
//! observable output and is kept as-is; see DESIGN.md.

#[cfg(test)]
#[path = "snippet_test.rs"]
mod snippet_test;

use crate::consts::{COORD_DECIMALS, RADIUS_DECIMALS};
use crate::geometry::{DrawnGeometry, LatLng};

/// Render the snippet recreating `geometry`, terminated by a newline.
#[must_use]
pub fn render(geometry: &DrawnGeometry) -> String {
    match geometry {
        DrawnGeometry::Marker { at } => marker(at),
        DrawnGeometry::Polyline { points } => vertex_list("myPolyline", "L.polyline", points, "\t"),
        DrawnGeometry::Polygon { points } => vertex_list("myPolygon", "L.polygon", points, "\t\t"),
        DrawnGeometry::Circle { center, radius } => circle_like("myCircle", "L.circle", center, *radius),
        DrawnGeometry::Rectangle { south_west, north_east } => rectangle(south_west, north_east),
        DrawnGeometry::CircleMarker { center, radius } => {
            circle_like("myCircleMarker", "L.circleMarker", center, *radius)
        }
    }
}

/// One coordinate, fixed-point with three decimals.
fn coord(value: f64) -> String {
    format!("{value:.COORD_DECIMALS$}")
}

/// A `[lng, lat]` pair as it appears inside the emitted constructor calls.
fn pair(point: &LatLng) -> String {
    format!("[{}, {}]", coord(point.lng), coord(point.lat))
}

/// Radius rounded to whole units, no trailing separator.
fn radius_arg(radius: f64) -> String {
    format!("{radius:.RADIUS_DECIMALS$}")
}

fn marker(at: &LatLng) -> String {
    format!("var myMarker = L.marker({}).addTo(map);\n", pair(at))
}

/// Shared body for polylines and polygons; only the variable name,
/// constructor, and indentation differ.
fn vertex_list(var: &str, ctor: &str, points: &[LatLng], indent: &str) -> String {
    let mut out = format!("var {var} = {ctor}([\n");
    let count = points.len();
    for (i, point) in points.iter().enumerate() {
        if i + 1 < count {
            out.push_str(&format!("{indent}{},\n", pair(point)));
        } else {
            out.push_str(&format!("{indent}{}]\n", pair(point)));
        }
    }
    out.push_str(").addTo(map);\n");
    out
}

fn circle_like(var: &str, ctor: &str, center: &LatLng, radius: f64) -> String {
    format!(
        "var {var} = {ctor}({}, {}).addTo(map);\n",
        pair(center),
        radius_arg(radius)
    )
}

fn rectangle(south_west: &LatLng, north_east: &LatLng) -> String {
    format!(
        "var myRectangle = L.rectangle({}, {}).addTo(map);\n",
        pair(south_west),
        pair(north_east)
    )
}
