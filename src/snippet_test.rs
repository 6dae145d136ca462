use super::*;
use crate::geometry::DrawnGeometry;

fn p(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

// =============================================================
// Marker
// =============================================================

#[test]
fn marker_emits_lng_lat_with_three_decimals() {
    let snippet = render(&DrawnGeometry::Marker { at: p(45.1234, -93.5678) });
    assert_eq!(snippet, "var myMarker = L.marker([-93.568, 45.123]).addTo(map);\n");
}

#[test]
fn marker_pads_whole_degrees_to_three_decimals() {
    let snippet = render(&DrawnGeometry::Marker { at: p(1.0, 2.0) });
    assert_eq!(snippet, "var myMarker = L.marker([2.000, 1.000]).addTo(map);\n");
}

// =============================================================
// Polyline / polygon
// =============================================================

#[test]
fn polyline_three_points_exact_output() {
    let snippet = render(&DrawnGeometry::Polyline {
        points: vec![p(1.0, 2.0), p(3.0, 4.0), p(5.0, 6.0)],
    });
    assert_eq!(
        snippet,
        "var myPolyline = L.polyline([\n\
         \t[2.000, 1.000],\n\
         \t[4.000, 3.000],\n\
         \t[6.000, 5.000]]\n\
         ).addTo(map);\n"
    );
}

#[test]
fn polyline_point_lines_are_comma_joined_except_last() {
    let snippet = render(&DrawnGeometry::Polyline {
        points: vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)],
    });
    let point_lines: Vec<&str> = snippet
        .lines()
        .filter(|line| line.starts_with('\t'))
        .collect();
    assert_eq!(point_lines.len(), 3);
    assert!(point_lines[0].ends_with(','));
    assert!(point_lines[1].ends_with(','));
    // The last point closes the outer array.
    assert!(point_lines[2].ends_with("]]"));
}

#[test]
fn polyline_two_points_minimal() {
    let snippet = render(&DrawnGeometry::Polyline { points: vec![p(0.0, 0.0), p(1.0, 1.0)] });
    assert_eq!(
        snippet,
        "var myPolyline = L.polyline([\n\t[0.000, 0.000],\n\t[1.000, 1.000]]\n).addTo(map);\n"
    );
}

#[test]
fn polygon_uses_two_tab_indent_and_polygon_constructor() {
    let snippet = render(&DrawnGeometry::Polygon {
        points: vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)],
    });
    assert_eq!(
        snippet,
        "var myPolygon = L.polygon([\n\
         \t\t[0.000, 0.000],\n\
         \t\t[1.000, 0.000],\n\
         \t\t[1.000, 1.000]]\n\
         ).addTo(map);\n"
    );
}

// =============================================================
// Circle / circle marker
// =============================================================

#[test]
fn circle_rounds_radius_to_whole_meters() {
    let snippet = render(&DrawnGeometry::Circle { center: p(10.0, 20.0), radius: 150.6 });
    assert_eq!(snippet, "var myCircle = L.circle([20.000, 10.000], 151).addTo(map);\n");
}

#[test]
fn circle_radius_has_no_trailing_separator() {
    let snippet = render(&DrawnGeometry::Circle { center: p(0.0, 0.0), radius: 42.0 });
    assert_eq!(snippet, "var myCircle = L.circle([0.000, 0.000], 42).addTo(map);\n");
}

#[test]
fn circle_marker_emits_circle_marker_constructor() {
    let snippet = render(&DrawnGeometry::CircleMarker { center: p(5.5, 6.25), radius: 10.0 });
    assert_eq!(
        snippet,
        "var myCircleMarker = L.circleMarker([6.250, 5.500], 10).addTo(map);\n"
    );
}

// =============================================================
// Rectangle
// =============================================================

#[test]
fn rectangle_emits_both_corners() {
    let snippet = render(&DrawnGeometry::Rectangle {
        south_west: p(0.0, 0.0),
        north_east: p(1.0, 1.0),
    });
    assert_eq!(
        snippet,
        "var myRectangle = L.rectangle([0.000, 0.000], [1.000, 1.000]).addTo(map);\n"
    );
}

#[test]
fn rectangle_preserves_lng_lat_ordering_per_corner() {
    let snippet = render(&DrawnGeometry::Rectangle {
        south_west: p(10.0, -20.0),
        north_east: p(30.0, -5.0),
    });
    assert_eq!(
        snippet,
        "var myRectangle = L.rectangle([-20.000, 10.000], [-5.000, 30.000]).addTo(map);\n"
    );
}

// =============================================================
// Cross-cutting
// =============================================================

#[test]
fn rendering_is_deterministic() {
    let geometry = DrawnGeometry::Polygon {
        points: vec![p(12.3456, -65.4321), p(0.0001, 0.0009), p(-4.0, 8.0)],
    };
    assert_eq!(render(&geometry), render(&geometry));
}

#[test]
fn every_snippet_is_newline_terminated() {
    let shapes = [
        DrawnGeometry::Marker { at: p(1.0, 2.0) },
        DrawnGeometry::Polyline { points: vec![p(0.0, 0.0), p(1.0, 1.0)] },
        DrawnGeometry::Polygon { points: vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)] },
        DrawnGeometry::Circle { center: p(0.0, 0.0), radius: 1.0 },
        DrawnGeometry::Rectangle { south_west: p(0.0, 0.0), north_east: p(1.0, 1.0) },
        DrawnGeometry::CircleMarker { center: p(0.0, 0.0), radius: 1.0 },
    ];
    for shape in &shapes {
        assert!(render(shape).ends_with('\n'), "{:?} not newline-terminated", shape.kind());
    }
}

#[test]
fn coordinates_always_carry_exactly_three_decimals() {
    let snippet = render(&DrawnGeometry::Marker { at: p(-0.5, 100.0) });
    assert_eq!(snippet, "var myMarker = L.marker([100.000, -0.500]).addTo(map);\n");
}
