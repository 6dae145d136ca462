//! Drawn-shape data model: geographic points, the closed set of drawable
//! kinds, and the geometry snapshot taken when a draw gesture completes.
//!
//! Data flows into this layer from the leaflet-draw `draw:created` event:
//! the boundary parses the event's kind tag with [`GeometryKind::from_tag`],
//! then extracts a [`DrawnGeometry`] from the finished layer. The snapshot
//! is immutable — the serializer only reads it, and the visual shape on the
//! map lives its own life afterwards.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The kind of a drawable shape, matching the leaflet-draw `layerType` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    /// Point marker.
    Marker,
    /// Open sequence of line segments.
    Polyline,
    /// Closed ring (closure is the renderer's job, not the data's).
    Polygon,
    /// Circle with a radius in meters.
    Circle,
    /// Axis-aligned rectangle given by its corner bounds.
    Rectangle,
    /// Fixed-size circular marker; radius in screen-ish units.
    CircleMarker,
}

/// Error raised when an incoming kind tag is not one of the six known kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("unrecognized geometry kind: {0:?}")]
    UnrecognizedKind(String),
}

impl GeometryKind {
    /// Parse a leaflet-draw `layerType` tag.
    ///
    /// # Errors
    /// Returns [`GeometryError::UnrecognizedKind`] for any tag outside the
    /// closed set; callers surface that to the user and drop the event.
    pub fn from_tag(tag: &str) -> Result<Self, GeometryError> {
        match tag {
            "marker" => Ok(Self::Marker),
            "polyline" => Ok(Self::Polyline),
            "polygon" => Ok(Self::Polygon),
            "circle" => Ok(Self::Circle),
            "rectangle" => Ok(Self::Rectangle),
            "circlemarker" => Ok(Self::CircleMarker),
            other => Err(GeometryError::UnrecognizedKind(other.to_owned())),
        }
    }

    /// The canonical tag string for this kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::CircleMarker => "circlemarker",
        }
    }
}

/// Snapshot of a shape the user has finished drawing.
///
/// The wire form is internally tagged with `kind`, using the same lowercase
/// tags leaflet-draw reports, e.g.
/// `{"kind":"circle","center":{"lat":10.0,"lng":20.0},"radius":150.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawnGeometry {
    /// A point marker.
    Marker {
        /// Marker position.
        at: LatLng,
    },
    /// An open polyline with at least two points in practice.
    Polyline {
        /// Vertices in draw order.
        points: Vec<LatLng>,
    },
    /// A polygon ring; implicitly closed by the renderer.
    Polygon {
        /// Ring vertices in draw order, first point not repeated at the end.
        points: Vec<LatLng>,
    },
    /// A circle of `radius` meters around `center`.
    Circle {
        /// Circle center.
        center: LatLng,
        /// Radius in meters.
        radius: f64,
    },
    /// An axis-aligned rectangle given by two opposite corners.
    Rectangle {
        /// South-west corner.
        south_west: LatLng,
        /// North-east corner.
        north_east: LatLng,
    },
    /// A fixed-size circle marker.
    CircleMarker {
        /// Marker position.
        center: LatLng,
        /// Radius, whole units.
        radius: f64,
    },
}

impl DrawnGeometry {
    /// The kind of this geometry.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Marker { .. } => GeometryKind::Marker,
            Self::Polyline { .. } => GeometryKind::Polyline,
            Self::Polygon { .. } => GeometryKind::Polygon,
            Self::Circle { .. } => GeometryKind::Circle,
            Self::Rectangle { .. } => GeometryKind::Rectangle,
            Self::CircleMarker { .. } => GeometryKind::CircleMarker,
        }
    }

    /// Whether the snapshot honors the data invariants: finite coordinates
    /// and a non-negative radius. The widget always hands us well-formed
    /// geometry; violations are logged at the boundary, never fatal.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        fn finite(p: &LatLng) -> bool {
            p.lat.is_finite() && p.lng.is_finite()
        }
        match self {
            Self::Marker { at } => finite(at),
            Self::Polyline { points } | Self::Polygon { points } => points.iter().all(finite),
            Self::Circle { center, radius } | Self::CircleMarker { center, radius } => {
                finite(center) && radius.is_finite() && *radius >= 0.0
            }
            Self::Rectangle { south_west, north_east } => finite(south_west) && finite(north_east),
        }
    }
}
