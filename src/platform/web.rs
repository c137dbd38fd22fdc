//! Browser bindings
//!
//! Thin `wasm-bindgen` wrapper around [`FlightComputer`]. Pointer coordinates
//! arrive in surface pixels; event timestamps come from `Date.now()`. Structured
//! results leave as JSON strings for the page script to paint.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::computer::{FlightComputer, Gesture, MarkerId, Outcome, Side};
use crate::renderer;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("E6B analog flight computer loaded");
}

fn to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Handle owned by the page; one per mounted instrument
#[wasm_bindgen]
pub struct E6bComputer {
    inner: FlightComputer,
}

#[wasm_bindgen]
impl E6bComputer {
    /// Mount with optional JSON settings; bad settings fall back to defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Self {
        let settings = settings_json
            .as_deref()
            .map(Settings::from_json_or_default)
            .unwrap_or_default();
        Self {
            inner: FlightComputer::new(settings),
        }
    }

    /// Returns whether the surface needs repainting
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.inner
            .pointer_down(Vec2::new(x, y), js_sys::Date::now())
            .needs_redraw()
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.inner.pointer_move(Vec2::new(x, y)).needs_redraw()
    }

    /// Returns true when the release counts as a tap
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        matches!(
            self.inner.pointer_up(Vec2::new(x, y)),
            Outcome::DragEnded(Gesture::Tap)
        )
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.inner.pointer_leave();
    }

    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        self.inner.tap(Vec2::new(x, y)).needs_redraw()
    }

    /// Accepts "wind"/"a" or "calculator"/"b"
    #[wasm_bindgen(js_name = selectSide)]
    pub fn select_side(&mut self, side: &str) -> Result<(), JsValue> {
        let side = Side::from_str(side)
            .ok_or_else(|| JsValue::from_str(&format!("unknown side: {side}")))?;
        self.inner.select_side(side);
        Ok(())
    }

    pub fn side(&self) -> String {
        self.inner.view().side.as_str().to_string()
    }

    #[wasm_bindgen(js_name = resetAll)]
    pub fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    #[wasm_bindgen(js_name = clearMarkers)]
    pub fn clear_markers(&mut self) {
        self.inner.clear_markers();
    }

    #[wasm_bindgen(js_name = toggleMarker)]
    pub fn toggle_marker(&mut self, id: u64) {
        self.inner.toggle_marker_selection(MarkerId(id));
    }

    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.inner.scene().to_json().map_err(to_js)
    }

    /// Interleaved `[x, y, r, g, b, a]` triangle vertices
    pub fn vertices(&self) -> js_sys::Float32Array {
        let vertices = renderer::tessellate(&self.inner.scene());
        js_sys::Float32Array::from(renderer::vertex::as_floats(&vertices))
    }

    #[wasm_bindgen(js_name = readoutsJson)]
    pub fn readouts_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.readouts()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = statusJson)]
    pub fn status_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.status_readout()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = markerListJson)]
    pub fn marker_list_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.marker_list()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = settingsJson)]
    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.inner.settings().to_json().map_err(to_js)
    }
}
