//! Conversion of core errors into JavaScript `Error` objects.
//!
//! The error's `name` is set to the stable kind string (`NoImageLoaded`,
//! `UnknownFilter`, ...) so TypeScript can branch on `err.name` instead of
//! parsing messages.

use snapedit_core::decode::DecodeError;
use snapedit_core::EditError;
use wasm_bindgen::JsValue;

fn js_error(kind: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    err.set_name(kind);
    err.into()
}

pub(crate) fn edit_error(e: EditError) -> JsValue {
    js_error(e.kind(), &e.to_string())
}

pub(crate) fn decode_error(e: DecodeError) -> JsValue {
    js_error(e.kind(), &e.to_string())
}

/// Errors from `serde-wasm-bindgen` when a JS object has the wrong shape.
pub(crate) fn invalid_argument(e: serde_wasm_bindgen::Error) -> JsValue {
    js_error("InvalidArgument", &e.to_string())
}

/// Errors from `serde-wasm-bindgen` when a Rust value cannot be sent to JS.
pub(crate) fn serialization_error(e: serde_wasm_bindgen::Error) -> JsValue {
    js_error("SerializationError", &e.to_string())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_error_name_is_kind() {
        let value = edit_error(EditError::UnknownFilter("Blur".to_string()));
        let err: js_sys::Error = value.dyn_into().unwrap();
        assert_eq!(String::from(err.name()), "UnknownFilter");
        assert_eq!(String::from(err.message()), "Unknown filter: Blur");
    }

    #[wasm_bindgen_test]
    fn test_decode_error_name() {
        let value = decode_error(DecodeError::InvalidFormat);
        let err: js_sys::Error = value.dyn_into().unwrap();
        assert_eq!(String::from(err.name()), "InvalidFormat");
    }

    #[wasm_bindgen_test]
    fn test_serde_error_names() {
        let err: js_sys::Error = serialization_error(serde_wasm_bindgen::Error::new("bad value"))
            .dyn_into()
            .unwrap();
        assert_eq!(String::from(err.name()), "SerializationError");
        assert_eq!(String::from(err.message()), "bad value");

        let err: js_sys::Error = invalid_argument(serde_wasm_bindgen::Error::new("missing field"))
            .dyn_into()
            .unwrap();
        assert_eq!(String::from(err.name()), "InvalidArgument");
    }
}
