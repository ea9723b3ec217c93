use mominos_fs::{
    entry::EntryId,
    upload::{check_size, UploadSource},
    EntryPatch,
};
use wasm_bindgen::prelude::*;

use super::{from_js, js_error, to_js};
use crate::{mutate_desktop, with_desktop};

fn parent_id(parent: Option<String>) -> Option<EntryId> {
    parent.as_deref().map(EntryId::from)
}

/// The entries directly inside a folder, or the root for `undefined`
#[wasm_bindgen(js_name = fsList)]
pub fn fs_list(parent: Option<String>) -> Result<JsValue, JsValue> {
    let parent = parent_id(parent);
    with_desktop(|d| to_js(&d.fs.list(parent.as_ref())))
        .map_err(js_error)?
}

#[wasm_bindgen(js_name = fsGet)]
pub fn fs_get(id: &str) -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.fs.get(&EntryId::from(id)))).map_err(js_error)?
}

#[wasm_bindgen(js_name = fsPath)]
pub fn fs_path(id: &str) -> Result<Option<String>, JsValue> {
    with_desktop(|d| d.fs.path_of(&EntryId::from(id))).map_err(js_error)
}

#[wasm_bindgen(js_name = fsCreateFile)]
pub fn fs_create_file(name: &str, content: &str, parent: Option<String>) -> Result<JsValue, JsValue> {
    let parent = parent_id(parent);
    let entry = mutate_desktop(|d| d.fs.create_file(name, content, parent.as_ref()))
        .map_err(js_error)?
        .map_err(js_error)?;
    to_js(&entry)
}

#[wasm_bindgen(js_name = fsCreateFolder)]
pub fn fs_create_folder(name: &str, parent: Option<String>) -> Result<JsValue, JsValue> {
    let parent = parent_id(parent);
    let entry = mutate_desktop(|d| d.fs.create_folder(name, parent.as_ref()))
        .map_err(js_error)?
        .map_err(js_error)?;
    to_js(&entry)
}

/// Merge `{ name?, content? }` into an entry
#[wasm_bindgen(js_name = fsUpdateFile)]
pub fn fs_update_file(id: &str, patch: JsValue) -> Result<bool, JsValue> {
    let patch: EntryPatch = from_js(patch)?;
    mutate_desktop(|d| d.fs.update_file(&EntryId::from(id), patch)).map_err(js_error)
}

#[wasm_bindgen(js_name = fsRename)]
pub fn fs_rename(id: &str, name: &str) -> Result<bool, JsValue> {
    mutate_desktop(|d| d.fs.rename(&EntryId::from(id), name)).map_err(js_error)
}

#[wasm_bindgen(js_name = fsDelete)]
pub fn fs_delete(id: &str) -> Result<bool, JsValue> {
    mutate_desktop(|d| d.fs.delete(&EntryId::from(id))).map_err(js_error)
}

#[wasm_bindgen(js_name = fsMove)]
pub fn fs_move(id: &str, parent: Option<String>) -> Result<bool, JsValue> {
    let parent = parent_id(parent);
    mutate_desktop(|d| d.fs.move_entry(&EntryId::from(id), parent.as_ref())).map_err(js_error)
}

#[wasm_bindgen(js_name = fsCopy)]
pub fn fs_copy(id: &str, parent: Option<String>) -> Result<String, JsValue> {
    let parent = parent_id(parent);
    let copy = mutate_desktop(|d| d.fs.copy(&EntryId::from(id), parent.as_ref()))
        .map_err(js_error)?
        .map_err(js_error)?;
    Ok(copy.to_string())
}

#[wasm_bindgen(js_name = fsSearch)]
pub fn fs_search(query: &str) -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.fs.search(query))).map_err(js_error)?
}

#[wasm_bindgen(js_name = fsStats)]
pub fn fs_stats() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.fs.stats())).map_err(js_error)?
}

/// The text of a previewable file
#[wasm_bindgen(js_name = fsPreview)]
pub fn fs_preview(id: &str) -> Result<Option<String>, JsValue> {
    with_desktop(|d| d.fs.preview(&EntryId::from(id)).map(str::to_string)).map_err(js_error)
}

#[wasm_bindgen(js_name = fsDownload)]
pub fn fs_download(id: &str) -> Result<(), JsValue> {
    with_desktop(|d| d.fs.download_file(&EntryId::from(id))).map_err(js_error)
}

#[wasm_bindgen(js_name = fsExport)]
pub fn fs_export() -> Result<String, JsValue> {
    with_desktop(|d| d.fs.export())
        .map_err(js_error)?
        .map_err(js_error)
}

/// Replace the whole tree. A document that fails validation changes nothing.
#[wasm_bindgen(js_name = fsImport)]
pub fn fs_import(json: &str) -> Result<bool, JsValue> {
    mutate_desktop(|d| d.fs.import(json)).map_err(js_error)
}

/// Upload a browser file into a folder.
/// The desktop is only borrowed before and after the file is read.
#[wasm_bindgen(js_name = fsUpload)]
pub async fn fs_upload(file: web_sys::File, parent: Option<String>) -> Result<JsValue, JsValue> {
    check_size(&UploadSource::name(&file), UploadSource::size(&file)).map_err(js_error)?;
    let content = file.read_text().await.map_err(js_error)?;

    let parent = parent_id(parent);
    let entry = mutate_desktop(|d| d.fs.finish_upload(&file, content, parent.as_ref()))
        .map_err(js_error)?
        .map_err(js_error)?;
    to_js(&entry)
}
