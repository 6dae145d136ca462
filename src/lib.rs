//! Map annotation tool: draw shapes on a Leaflet map, get the code back.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The user
//! draws shapes (marker, polyline, polygon, circle, rectangle, circle
//! marker) with the leaflet-draw plugin; each completed shape is serialized
//! into a Leaflet code snippet that recreates it, appended to a results
//! text area, and copyable to the clipboard. The host page provides only the
//! map container, the results area, and a copy button — all wiring lives
//! here.
//!
//! The serialization core is pure Rust with no browser dependencies, so it
//! is tested on the host; the `wasm-bindgen` boundary around it stays thin.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Drawn-shape data model and kind-tag parsing |
//! | [`snippet`] | Shape-to-code serializer |
//! | [`session`] | Per-session snippet buffer |
//! | [`leaflet`] | Bindings to the Leaflet API surface the tool touches |
//! | [`app`] | Application context: map bootstrap and event wiring |
//! | [`consts`] | Shared constants (tile source, initial view, DOM ids) |

pub mod app;
pub mod consts;
pub mod geometry;
pub mod leaflet;
pub mod session;
pub mod snippet;
