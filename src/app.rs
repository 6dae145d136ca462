//! Application context: map bootstrap and event wiring.
//!
//! ARCHITECTURE
//! ============
//! [`App`] is the one owner of everything mutable at runtime: the map and
//! its base layer, the feature group holding drawn overlays, the results
//! text area, and the [`SessionCore`] snippet buffer. The host page calls
//! `App.init()` once on load; after that the tool is driven entirely by
//! widget events:
//!
//! - `draw:created` — serialize the finished shape and append the snippet
//!   to the results area (unknown kinds get a blocking alert instead);
//! - `draw:drawstart` — a new drawing session: clear the buffer, the
//!   results area, and the drawn overlays;
//! - a click on the copy button — write the results area's contents
//!   verbatim to the clipboard, logging success or failure.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlTextAreaElement};

use crate::consts::{
    COPY_BUTTON_SELECTOR, INITIAL_LAT, INITIAL_LNG, INITIAL_ZOOM, MAP_CONTAINER_ID, RESULTS_AREA_ID,
    TILE_ATTRIBUTION, TILE_URL,
};
use crate::geometry::GeometryKind;
use crate::leaflet::{self, DrawControl, DrawCreatedEvent, FeatureGroup, Map};
use crate::session::SessionCore;

/// One running annotation session. Exactly one per page.
#[wasm_bindgen]
pub struct App {
    map: Map,
    drawn: FeatureGroup,
    results: HtmlTextAreaElement,
    session: Rc<RefCell<SessionCore>>,
}

#[wasm_bindgen]
impl App {
    /// Boot the tool against the host page. Call once on page load; the
    /// returned handle keeps the context alive on the JS side.
    ///
    /// # Errors
    /// Fails if the expected host elements are missing or the logger is
    /// already installed.
    pub fn init() -> Result<App, JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let results = results_area(&document)?;
        results.set_value("");

        let map = leaflet::new_map(MAP_CONTAINER_ID, &map_options()?);
        leaflet::new_tile_layer(TILE_URL, &tile_options()?).add_to(&map);

        let drawn = FeatureGroup::new();
        map.add_layer(&drawn);
        map.add_control(&DrawControl::new(&draw_options(&drawn)?));

        let session = Rc::new(RefCell::new(SessionCore::new()));

        let app = App { map, drawn, results, session };
        app.wire_draw_created();
        app.wire_draw_start();
        app.wire_copy_button(&document)?;
        log::info!("annotation tool ready");
        Ok(app)
    }
}

impl App {
    /// A shape was finished: serialize it and append the snippet, or alert
    /// on an unrecognized kind. The shape joins the overlay group either
    /// way, matching the widget's own behavior.
    fn wire_draw_created(&self) {
        let session = Rc::clone(&self.session);
        let drawn = self.drawn.clone();
        let results = self.results.clone();
        let handler = Closure::<dyn FnMut(DrawCreatedEvent)>::new(move |event: DrawCreatedEvent| {
            let layer = event.layer();
            match GeometryKind::from_tag(&event.layer_type()) {
                Ok(kind) => {
                    let geometry = leaflet::geometry_from_layer(kind, &layer);
                    if !geometry.is_well_formed() {
                        log::warn!("widget delivered malformed {} geometry", kind.tag());
                    }
                    session.borrow_mut().record(&geometry);
                    results.set_value(session.borrow().buffer());
                }
                Err(err) => {
                    log::warn!("{err}");
                    alert("Input geometry not recognized!");
                }
            }
            drawn.add_layer(&layer);
        });
        self.map.on("draw:created", handler.as_ref().unchecked_ref());
        // Handlers live for the page lifetime.
        handler.forget();
    }

    /// A new drawing session started: clear the buffer, the results area,
    /// and the drawn overlays. The tile base layer is untouched.
    fn wire_draw_start(&self) {
        let session = Rc::clone(&self.session);
        let drawn = self.drawn.clone();
        let results = self.results.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            session.borrow_mut().reset();
            results.set_value("");
            drawn.clear_layers();
            log::debug!("drawing session reset");
        });
        self.map.on("draw:drawstart", handler.as_ref().unchecked_ref());
        handler.forget();
    }

    /// Copy the results area to the clipboard on button click.
    fn wire_copy_button(&self, document: &Document) -> Result<(), JsValue> {
        let button = document
            .query_selector(COPY_BUTTON_SELECTOR)?
            .ok_or_else(|| JsValue::from_str("copy button not found"))?;
        let results = self.results.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            // The display surface is authoritative: copy what the user
            // sees, including any manual edits, not the session buffer.
            copy_to_clipboard(results.value());
        });
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
        Ok(())
    }
}

fn results_area(document: &Document) -> Result<HtmlTextAreaElement, JsValue> {
    document
        .get_element_by_id(RESULTS_AREA_ID)
        .ok_or_else(|| JsValue::from_str("results area not found"))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_element| JsValue::from_str("results area is not a textarea"))
}

fn map_options() -> Result<JsValue, JsValue> {
    let center = js_sys::Array::of2(&JsValue::from_f64(INITIAL_LAT), &JsValue::from_f64(INITIAL_LNG));
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("center"), &center)?;
    js_sys::Reflect::set(&options, &JsValue::from_str("zoom"), &JsValue::from_f64(INITIAL_ZOOM))?;
    Ok(options.into())
}

fn tile_options() -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(TILE_ATTRIBUTION),
    )?;
    Ok(options.into())
}

fn draw_options(drawn: &FeatureGroup) -> Result<JsValue, JsValue> {
    let edit = js_sys::Object::new();
    js_sys::Reflect::set(&edit, &JsValue::from_str("featureGroup"), drawn.as_ref())?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("edit"), &edit)?;
    Ok(options.into())
}

/// Fire-and-forget clipboard write; the outcome is log-only.
fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        log::warn!("clip error: no window");
        return;
    };
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => log::info!("clip copied: {text}"),
            Err(err) => log::warn!("clip error: {err:?}"),
        }
    });
}

/// Blocking user notification for events that must not pass silently.
fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("alert unavailable: no window");
        return;
    };
    if window.alert_with_message(message).is_err() {
        log::warn!("alert failed: {message}");
    }
}
