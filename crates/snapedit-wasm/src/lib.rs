//! SnapEdit WASM - WebAssembly bindings for SnapEdit
//!
//! This crate exposes the snapedit-core editing session, filter catalog and
//! export encoder to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA bitmaps
//! - `session` - The edit session (load, filter, crop, reset, export)
//! - `filters` - Filter catalog listing and standalone filter application
//! - `decode` - Image file decoding with EXIF orientation
//! - `encode` - Export payloads and standalone encoding
//!
//! Failures are thrown as `Error` objects whose `name` is the error kind.
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession, decode_image, list_available_filters } from '@snapedit/wasm';
//!
//! await init();
//!
//! const session = new JsEditSession();
//! session.load(decode_image(new Uint8Array(await file.arrayBuffer())));
//! for (const { displayName, id } of list_available_filters()) {
//!   addMenuItem(displayName, () => session.apply_filter(id));
//! }
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod error;
mod filters;
mod session;
mod types;

pub use decode::{decode_image, get_orientation};
pub use encode::{encode_bitmap, JsExportPayload};
pub use filters::{apply_filter, list_available_filters};
pub use session::JsEditSession;
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
