//! Edit session WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { JsEditSession, decode_image } from '@snapedit/wasm';
//!
//! const session = new JsEditSession();
//! session.load(decode_image(bytes));
//! session.apply_filter('Sepia');
//! session.crop(0, 0, 800, 600, 90);
//! draw(session.current_preview());
//!
//! const payload = session.export_for_destination('facebook');
//! ```

use snapedit_core::{
    CropRect, CropSpec, EditSession, EditorConfig, ExportTarget, SessionState, ShareDestination,
};
use wasm_bindgen::prelude::*;

use crate::encode::JsExportPayload;
use crate::error::{decode_error, edit_error, invalid_argument};
use crate::types::JsBitmap;

/// One photo being edited: the loaded original and the current result.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
    config: EditorConfig,
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create an empty session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(EditorConfig::default())
    }

    /// Create an empty session from a (possibly partial) config object,
    /// e.g. `{ export: { lossyQuality: 0.7 } }`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<JsEditSession, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config).map_err(invalid_argument)?;
        Ok(Self::from_config(config))
    }

    /// `"Empty"`, `"Loaded"` or `"Edited"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.inner.state() {
            SessionState::Empty => "Empty",
            SessionState::Loaded => "Loaded",
            SessionState::Edited => "Edited",
        }
        .to_string()
    }

    /// Title for the host's share sheet.
    #[wasm_bindgen(getter)]
    pub fn share_title(&self) -> String {
        self.config.export.share_title.clone()
    }

    /// Load a photo, discarding any previous one. Throws `EmptyImage`.
    pub fn load(&mut self, image: &JsBitmap) -> Result<(), JsValue> {
        self.inner
            .load(image.as_bitmap().clone())
            .map_err(edit_error)
    }

    /// Decode an image file and load it in one step.
    pub fn load_encoded(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let bitmap = snapedit_core::decode::decode_image(bytes).map_err(decode_error)?;
        self.inner.load(bitmap).map_err(edit_error)
    }

    /// Apply a catalog filter to the current image.
    pub fn apply_filter(&mut self, id: &str) -> Result<(), JsValue> {
        self.inner.apply_filter(id).map_err(edit_error)
    }

    /// Crop to the rectangle, then rotate by `rotation` degrees
    /// (a multiple of 90, positive is counter-clockwise).
    pub fn crop(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        rotation: i32,
    ) -> Result<(), JsValue> {
        let spec = CropSpec::new(CropRect::new(x, y, width, height), rotation);
        self.inner.crop(&spec).map_err(edit_error)
    }

    /// Restore the loaded original.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.inner.reset().map_err(edit_error)
    }

    /// Copy of the image to display.
    pub fn current_preview(&self) -> Result<JsBitmap, JsValue> {
        self.inner
            .current_preview()
            .map(|bitmap| JsBitmap::from_bitmap(bitmap.clone()))
            .map_err(edit_error)
    }

    /// Export in whatever format `destination` prefers.
    ///
    /// `"facebook"` gets JPEG at the configured quality, `"twitter"` gets
    /// PNG, and any other name gets PNG.
    pub fn export_for_destination(&self, destination: &str) -> Result<JsExportPayload, JsValue> {
        let capability = ShareDestination::from_name(destination).capability();
        let target = ExportTarget::for_destination(&capability, &self.config.export);
        self.export(target)
    }

    /// Export as JPEG. `quality` must lie in `(0, 1]`.
    pub fn export_lossy(&self, quality: f32) -> Result<JsExportPayload, JsValue> {
        self.export(ExportTarget::Lossy { quality })
    }

    /// Export as PNG.
    pub fn export_lossless(&self) -> Result<JsExportPayload, JsValue> {
        self.export(ExportTarget::Lossless)
    }
}

impl JsEditSession {
    pub(crate) fn from_config(config: EditorConfig) -> Self {
        Self {
            inner: EditSession::new(),
            config,
        }
    }

    fn export(&self, target: ExportTarget) -> Result<JsExportPayload, JsValue> {
        self.inner
            .export(target)
            .map(JsExportPayload::from_payload)
            .map_err(edit_error)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn error_name(value: JsValue) -> String {
        let err: js_sys::Error = value.dyn_into().unwrap();
        err.name().into()
    }

    #[wasm_bindgen_test]
    fn test_operations_before_load() {
        let mut session = JsEditSession::new();
        assert_eq!(error_name(session.apply_filter("Sepia").unwrap_err()), "NoImageLoaded");
        assert_eq!(error_name(session.reset().unwrap_err()), "NoImageLoaded");
        assert_eq!(error_name(session.export_lossless().err().unwrap()), "NoImageLoaded");
    }

    #[wasm_bindgen_test]
    fn test_bad_crop_is_rejected() {
        let mut session = JsEditSession::new();
        session.load(&JsBitmap::new(4, 4, vec![0; 64]).unwrap()).unwrap();
        assert_eq!(error_name(session.crop(0, 0, 10, 4, 0).unwrap_err()), "InvalidCropRegion");
        assert_eq!(error_name(session.crop(0, 0, 2, 2, 45).unwrap_err()), "InvalidRotation");
        assert_eq!(session.state(), "Loaded");
    }

    #[wasm_bindgen_test]
    fn test_export_lossy_rejects_zero_quality() {
        let mut session = JsEditSession::new();
        session.load(&JsBitmap::new(4, 4, vec![0; 64]).unwrap()).unwrap();
        assert_eq!(error_name(session.export_lossy(0.0).err().unwrap()), "InvalidQuality");
    }
}
