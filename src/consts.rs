//! Shared constants for the annotation tool.

// ── Map bootstrap ───────────────────────────────────────────────

/// Tile source for the base layer.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution string shown on the base layer.
pub const TILE_ATTRIBUTION: &str = "OpenStreetMap";

/// Initial map center, latitude.
pub const INITIAL_LAT: f64 = 0.0;

/// Initial map center, longitude.
pub const INITIAL_LNG: f64 = 0.0;

/// Initial map zoom level.
pub const INITIAL_ZOOM: f64 = 3.0;

// ── Host page elements ──────────────────────────────────────────

/// Id of the map container element.
pub const MAP_CONTAINER_ID: &str = "mapDiv";

/// Id of the results text area the snippets are appended to.
pub const RESULTS_AREA_ID: &str = "resultsContentArea";

/// Selector for the copy-to-clipboard button.
pub const COPY_BUTTON_SELECTOR: &str = ".copyButton";

// ── Snippet formatting ──────────────────────────────────────────

/// Decimal places for coordinates (degrees) in emitted snippets.
pub const COORD_DECIMALS: usize = 3;

/// Decimal places for radii (meters) in emitted snippets.
pub const RADIUS_DECIMALS: usize = 0;
