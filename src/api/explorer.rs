use mominos_fs::{
    entry::EntryId,
    upload::{check_size, UploadSource},
};
use wasm_bindgen::prelude::*;

use super::{js_error, to_js};
use crate::{mutate_desktop, with_desktop};

/// The filtered contents of the folder being shown
#[wasm_bindgen(js_name = explorerListing)]
pub fn explorer_listing() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.explorer.listing(&d.fs))).map_err(js_error)?
}

#[wasm_bindgen(js_name = explorerLocation)]
pub fn explorer_location() -> Result<String, JsValue> {
    with_desktop(|d| d.explorer.location(&d.fs)).map_err(js_error)
}

#[wasm_bindgen(js_name = explorerOpen)]
pub fn explorer_open(id: &str) -> Result<bool, JsValue> {
    mutate_desktop(|d| d.explorer.open(&d.fs, &EntryId::from(id))).map_err(js_error)
}

#[wasm_bindgen(js_name = explorerBack)]
pub fn explorer_back() -> Result<(), JsValue> {
    mutate_desktop(|d| d.explorer.back(&d.fs)).map_err(js_error)
}

#[wasm_bindgen(js_name = explorerHome)]
pub fn explorer_home() -> Result<(), JsValue> {
    mutate_desktop(|d| d.explorer.home()).map_err(js_error)
}

#[wasm_bindgen(js_name = explorerSetFilter)]
pub fn explorer_set_filter(filter: &str) -> Result<(), JsValue> {
    change(|d| d.explorer.set_filter(filter))
}

/// Switch between grid and list, returning the new mode
#[wasm_bindgen(js_name = explorerToggleView)]
pub fn explorer_toggle_view() -> Result<JsValue, JsValue> {
    let view = mutate_desktop(|d| {
        d.explorer.toggle_view();
        d.explorer.view()
    })
    .map_err(js_error)?;
    to_js(&view)
}

/// Toggle an entry in the selection
#[wasm_bindgen(js_name = explorerSelect)]
pub fn explorer_select(id: &str) -> Result<(), JsValue> {
    change(|d| d.explorer.select(&EntryId::from(id)))
}

#[wasm_bindgen(js_name = explorerSelection)]
pub fn explorer_selection() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.explorer.selection().collect::<Vec<_>>())).map_err(js_error)?
}

#[wasm_bindgen(js_name = explorerNewFolder)]
pub fn explorer_new_folder() -> Result<JsValue, JsValue> {
    let folder = mutate_desktop(|d| d.explorer.new_folder(&mut d.fs))
        .map_err(js_error)?
        .map_err(js_error)?;
    to_js(&folder)
}

#[wasm_bindgen(js_name = explorerDeleteSelection)]
pub fn explorer_delete_selection() -> Result<u32, JsValue> {
    mutate_desktop(|d| d.explorer.delete_selection(&mut d.fs) as u32).map_err(js_error)
}

#[wasm_bindgen(js_name = explorerCopySelection)]
pub fn explorer_copy_selection() -> Result<JsValue, JsValue> {
    let copies = mutate_desktop(|d| d.explorer.copy_selection(&mut d.fs)).map_err(js_error)?;
    to_js(&copies)
}

#[wasm_bindgen(js_name = explorerBeginDrag)]
pub fn explorer_begin_drag(id: &str) -> Result<(), JsValue> {
    change(|d| d.explorer.begin_drag(&EntryId::from(id)))
}

#[wasm_bindgen(js_name = explorerCancelDrag)]
pub fn explorer_cancel_drag() -> Result<(), JsValue> {
    change(|d| d.explorer.cancel_drag())
}

/// Drop the dragged entry onto a folder, or the root for `undefined`.
/// A rejected drop throws and leaves the tree as it was.
#[wasm_bindgen(js_name = explorerDrop)]
pub fn explorer_drop(target: Option<String>) -> Result<(), JsValue> {
    let target = target.as_deref().map(EntryId::from);
    mutate_desktop(|d| d.explorer.drop_onto(&mut d.fs, target.as_ref()))
        .map_err(js_error)?
        .map_err(js_error)
}

/// Upload a browser file into the folder being shown
#[wasm_bindgen(js_name = explorerUpload)]
pub async fn explorer_upload(file: web_sys::File) -> Result<JsValue, JsValue> {
    check_size(&UploadSource::name(&file), UploadSource::size(&file)).map_err(js_error)?;
    let content = file.read_text().await.map_err(js_error)?;

    let entry = mutate_desktop(|d| {
        let current = d.explorer.current(&d.fs).cloned();
        d.fs.finish_upload(&file, content, current.as_ref())
    })
    .map_err(js_error)?
    .map_err(js_error)?;
    to_js(&entry)
}

/// Run a change that has no result
fn change(f: impl FnOnce(&mut crate::desktop::Desktop)) -> Result<(), JsValue> {
    mutate_desktop(f).map_err(js_error)
}
