//! Export encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_bitmap } from '@snapedit/wasm';
//!
//! const payload = encode_bitmap(bitmap, { kind: 'lossy', quality: 0.8 });
//! const blob = new Blob([payload.bytes()], { type: payload.mime_type });
//! ```

use snapedit_core::encode::{self, ExportPayload, ExportTarget};
use wasm_bindgen::prelude::*;

use crate::error::{edit_error, invalid_argument};
use crate::types::JsBitmap;

/// Encoded image bytes plus the labels a share destination needs.
#[wasm_bindgen]
pub struct JsExportPayload {
    inner: ExportPayload,
}

#[wasm_bindgen]
impl JsExportPayload {
    /// Encoded file contents as a `Uint8Array` (a copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    /// `image/jpeg` or `image/png`.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.format.mime_type().to_string()
    }

    /// `public.jpeg` or `public.png`, for share sheets keyed on type identifiers.
    #[wasm_bindgen(getter)]
    pub fn type_identifier(&self) -> String {
        self.inner.format.type_identifier().to_string()
    }

    /// Suggested file extension, without the dot.
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.format.extension().to_string()
    }
}

impl JsExportPayload {
    pub(crate) fn from_payload(inner: ExportPayload) -> Self {
        Self { inner }
    }
}

/// Encode a bitmap outside of any session.
///
/// `target` is `{ kind: 'lossy', quality }` or `{ kind: 'lossless' }`.
#[wasm_bindgen]
pub fn encode_bitmap(image: &JsBitmap, target: JsValue) -> Result<JsExportPayload, JsValue> {
    let target: ExportTarget = serde_wasm_bindgen::from_value(target).map_err(invalid_argument)?;
    encode::encode(image.as_bitmap(), target)
        .map(JsExportPayload::from_payload)
        .map_err(edit_error)
}
