use mominos_wm::{
    app::AppKind,
    window::{Size, Snap, WindowId, WindowPatch, WindowSpec},
};
use wasm_bindgen::prelude::*;

use super::{from_js, js_error, to_js};
use crate::{mutate_desktop, with_desktop};

fn window_id(id: &str) -> Result<WindowId, JsValue> {
    id.parse().map_err(js_error)
}

/// Open a window for an app by name, e.g. `"files"` or `"terminal"`.
/// Returns the new window's id.
#[wasm_bindgen(js_name = wmOpenApp)]
pub fn wm_open_app(app: &str) -> Result<String, JsValue> {
    let app: AppKind = app.parse().map_err(js_error)?;
    let id = mutate_desktop(|d| d.open_app(app)).map_err(js_error)?;
    Ok(id.to_string())
}

/// Open a window from a full description
#[wasm_bindgen(js_name = wmAddWindow)]
pub fn wm_add_window(spec: JsValue) -> Result<String, JsValue> {
    let spec: WindowSpec = from_js(spec)?;
    let id = mutate_desktop(|d| d.wm.add_window(spec)).map_err(js_error)?;
    Ok(id.to_string())
}

#[wasm_bindgen(js_name = wmUpdateWindow)]
pub fn wm_update_window(id: &str, patch: JsValue) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    let patch: WindowPatch = from_js(patch)?;
    mutate_desktop(|d| d.wm.update_window(id, patch)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmRemoveWindow)]
pub fn wm_remove_window(id: &str) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.remove_window(id)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmBringToFront)]
pub fn wm_bring_to_front(id: &str) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.bring_to_front(id)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmSetActive)]
pub fn wm_set_active(id: Option<String>) -> Result<(), JsValue> {
    let id = id.as_deref().map(window_id).transpose()?;
    mutate_desktop(|d| d.wm.set_active(id)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmMinimize)]
pub fn wm_minimize(id: &str) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.minimize(id)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmRestore)]
pub fn wm_restore(id: &str) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.restore(id)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmToggleMaximize)]
pub fn wm_toggle_maximize(id: &str) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.toggle_maximize(id)).map_err(js_error)
}

/// Snap to `"left"`, `"right"` or release with `"none"`
#[wasm_bindgen(js_name = wmSnap)]
pub fn wm_snap(id: &str, side: JsValue) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    let side: Snap = from_js(side)?;
    mutate_desktop(|d| d.wm.snap(id, side)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmMove)]
pub fn wm_move(id: &str, x: i32, y: i32) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.move_to(id, x, y)).map_err(js_error)
}

#[wasm_bindgen(js_name = wmResize)]
pub fn wm_resize(id: &str, width: u32, height: u32) -> Result<bool, JsValue> {
    let id = window_id(id)?;
    mutate_desktop(|d| d.wm.resize(id, Size::new(width, height))).map_err(js_error)
}

/// Every window, bottom to top
#[wasm_bindgen(js_name = wmWindows)]
pub fn wm_windows() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.wm.stacking())).map_err(js_error)?
}

#[wasm_bindgen(js_name = wmActive)]
pub fn wm_active() -> Result<Option<String>, JsValue> {
    with_desktop(|d| d.wm.active().map(|id| id.to_string())).map_err(js_error)
}

/// The app catalog for launchers
#[wasm_bindgen(js_name = wmApps)]
pub fn wm_apps() -> Result<JsValue, JsValue> {
    let apps: Vec<_> = AppKind::ALL
        .iter()
        .map(|app| (app.id(), app.title(), app.description()))
        .collect();
    to_js(&apps)
}
