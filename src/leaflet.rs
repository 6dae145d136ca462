//! Bindings to the slice of the Leaflet API this tool touches.
//!
//! The map, tile layer, feature group, and draw control come from the
//! Leaflet / leaflet-draw globals the host page loads; drawn layers are
//! read back through their accessor methods when a draw gesture completes.
//! [`geometry_from_layer`] is the one conversion point from widget objects
//! into the crate's own [`DrawnGeometry`] model — everything past it is
//! pure Rust.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::geometry::{DrawnGeometry, GeometryKind, LatLng};

#[wasm_bindgen]
extern "C" {
    /// A Leaflet map instance.
    pub type Map;

    /// `L.map(containerId, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &Map, group: &FeatureGroup);

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &Map, control: &DrawControl);

    /// Subscribe to a map event.
    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function);

    /// A tile base layer.
    pub type TileLayer;

    /// `L.tileLayer(url, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);

    /// Overlay group collecting every drawn shape.
    #[wasm_bindgen(js_namespace = L)]
    #[derive(Clone)]
    pub type FeatureGroup;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new() -> FeatureGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &FeatureGroup, layer: &Layer);

    /// Remove every layer in the group; the map's base layer is unaffected.
    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &FeatureGroup);

    /// The leaflet-draw toolbar, `L.Control.Draw`.
    #[wasm_bindgen(js_namespace = ["L", "Control"], js_name = Draw)]
    pub type DrawControl;

    #[wasm_bindgen(constructor, js_namespace = ["L", "Control"], js_class = "Draw")]
    pub fn new(options: &JsValue) -> DrawControl;

    /// A finished drawn layer (marker, path, circle, ...). Which accessors
    /// exist depends on the layer's kind; dispatch on the event's kind tag
    /// before touching them.
    pub type Layer;

    #[wasm_bindgen(method, js_name = getLatLng)]
    pub fn get_lat_lng(this: &Layer) -> JsLatLng;

    #[wasm_bindgen(method, js_name = getLatLngs)]
    pub fn get_lat_lngs(this: &Layer) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = getRadius)]
    pub fn get_radius(this: &Layer) -> f64;

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &Layer) -> LatLngBounds;

    /// A Leaflet `LatLngBounds`.
    pub type LatLngBounds;

    #[wasm_bindgen(method, js_name = getSouthWest)]
    pub fn get_south_west(this: &LatLngBounds) -> JsLatLng;

    #[wasm_bindgen(method, js_name = getNorthEast)]
    pub fn get_north_east(this: &LatLngBounds) -> JsLatLng;

    /// A Leaflet `LatLng` object.
    pub type JsLatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &JsLatLng) -> f64;

    /// Payload of the leaflet-draw `draw:created` event.
    pub type DrawCreatedEvent;

    /// The kind tag of the drawn shape (`"marker"`, `"polyline"`, ...).
    #[wasm_bindgen(method, getter, js_name = layerType)]
    pub fn layer_type(this: &DrawCreatedEvent) -> String;

    /// The finished layer itself.
    #[wasm_bindgen(method, getter)]
    pub fn layer(this: &DrawCreatedEvent) -> Layer;
}

/// Snapshot `layer` into the crate's geometry model.
///
/// `kind` must match the layer (it comes from the same event); each kind
/// reads only the accessors its layer class actually has.
#[must_use]
pub fn geometry_from_layer(kind: GeometryKind, layer: &Layer) -> DrawnGeometry {
    match kind {
        GeometryKind::Marker => DrawnGeometry::Marker { at: to_latlng(&layer.get_lat_lng()) },
        GeometryKind::Polyline => DrawnGeometry::Polyline { points: vertex_points(layer) },
        GeometryKind::Polygon => DrawnGeometry::Polygon { points: vertex_points(layer) },
        GeometryKind::Circle => DrawnGeometry::Circle {
            center: to_latlng(&layer.get_lat_lng()),
            radius: layer.get_radius(),
        },
        GeometryKind::Rectangle => {
            let bounds = layer.get_bounds();
            DrawnGeometry::Rectangle {
                south_west: to_latlng(&bounds.get_south_west()),
                north_east: to_latlng(&bounds.get_north_east()),
            }
        }
        GeometryKind::CircleMarker => DrawnGeometry::CircleMarker {
            center: to_latlng(&layer.get_lat_lng()),
            radius: layer.get_radius(),
        },
    }
}

fn to_latlng(js: &JsLatLng) -> LatLng {
    LatLng::new(js.lat(), js.lng())
}

/// Read a path layer's vertices. Polygons nest their outer ring one array
/// level deeper than polylines; take the outer ring and ignore holes,
/// which the draw plugin cannot produce.
fn vertex_points(layer: &Layer) -> Vec<LatLng> {
    let raw = layer.get_lat_lngs();
    let first = raw.get(0);
    let ring = if first.is_instance_of::<js_sys::Array>() {
        first.unchecked_into::<js_sys::Array>()
    } else {
        raw
    };
    ring.iter().map(|v| to_latlng(v.unchecked_ref())).collect()
}
