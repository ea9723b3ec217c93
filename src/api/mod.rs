//! The desktop exposes its operations to the JavaScript UI layer.
//! Values cross the boundary as plain objects through `serde-wasm-bindgen`.
//! Every call that changes the desktop saves the session afterwards.
pub mod assistant;
pub mod explorer;
pub mod fs;
pub mod session;
pub mod terminal;
pub mod window;

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsValue;

/// Convert a value for the UI.
/// Maps become plain objects, flattened structs like `Entry` serialize as maps.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(JsValue::from)
}

/// Convert a value coming from the UI
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Turn any error into a value the UI can catch
pub(crate) fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
