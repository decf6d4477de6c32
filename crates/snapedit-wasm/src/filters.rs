//! Filter catalog WASM bindings.

use snapedit_core::filter;
use wasm_bindgen::prelude::*;

use crate::error::{edit_error, serialization_error};
use crate::types::JsBitmap;

/// The filter menu: `[{ displayName, id }]` in display order.
#[wasm_bindgen]
pub fn list_available_filters() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&filter::list_available_filters())
        .map_err(serialization_error)
}

/// Apply a catalog filter to a standalone bitmap, e.g. to render menu thumbnails.
///
/// Throws `UnknownFilter` or `FilterApplicationFailed`.
#[wasm_bindgen]
pub fn apply_filter(image: &JsBitmap, id: &str) -> Result<JsBitmap, JsValue> {
    filter::apply_filter_by_id(image.as_bitmap(), id)
        .map(JsBitmap::from_bitmap)
        .map_err(edit_error)
}
