//! Bindings to the externally supplied globe library.
//!
//! The host page provides these functions before the wasm module boots. They
//! are thin wrappers over the globe SDK; no logic lives on this surface. All
//! camera commands are fire-and-forget: the globe sequences or interrupts its
//! own animations, and nothing here waits for completion.

use navigation::GlobeView;
use story::{CameraPose, LonLat};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = meridianFlyTo)]
    fn meridian_fly_to(
        lon_deg: f64,
        lat_deg: f64,
        duration_ms: u32,
        pitch_deg: f64,
        heading_deg: f64,
        roll_deg: f64,
    );

    #[wasm_bindgen(js_name = meridianCreateHighlight)]
    fn meridian_create_highlight(lon_deg: f64, lat_deg: f64, radius_m: f64);

    #[wasm_bindgen(js_name = meridianRemoveHighlight)]
    fn meridian_remove_highlight();

    #[wasm_bindgen(js_name = meridianSetSelectedMarker)]
    fn meridian_set_selected_marker(index: u32);

    #[wasm_bindgen(js_name = meridianClearSelectedMarker)]
    fn meridian_clear_selected_marker();

    #[wasm_bindgen(js_name = meridianAddMarker)]
    pub(crate) fn meridian_add_marker(index: u32, lon_deg: f64, lat_deg: f64, title: &str);
}

#[derive(Debug, Default)]
pub struct JsGlobe;

impl JsGlobe {
    pub fn new() -> Self {
        Self
    }
}

impl GlobeView for JsGlobe {
    fn fly_to(&mut self, target: LonLat, duration_ms: u32, pose: CameraPose) {
        meridian_fly_to(
            target.lon_deg,
            target.lat_deg,
            duration_ms,
            pose.pitch_deg,
            pose.heading_deg,
            pose.roll_deg,
        );
    }

    fn create_highlight(&mut self, center: LonLat, radius_m: f64) {
        meridian_create_highlight(center.lon_deg, center.lat_deg, radius_m);
    }

    fn remove_highlight(&mut self) {
        meridian_remove_highlight();
    }

    fn set_selected_marker(&mut self, index: Option<usize>) {
        match index {
            Some(index) => meridian_set_selected_marker(index as u32),
            None => meridian_clear_selected_marker(),
        }
    }
}
