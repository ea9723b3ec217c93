use mominos_fs::time::Timestamp;
use mominos_session::{
    auth::{Authenticator, Directory},
    settings::SettingsPatch,
};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use super::{from_js, js_error, to_js};
use crate::{mutate_desktop, with_desktop};

/// The accounts offered on the login screen
#[wasm_bindgen(js_name = sessionUsers)]
pub fn session_users() -> Result<JsValue, JsValue> {
    to_js(&Directory::default().users())
}

/// Log in and return the user. Bad credentials throw with a message for the login screen.
#[wasm_bindgen(js_name = sessionLogin)]
pub fn session_login(username: &str, password: &str) -> Result<JsValue, JsValue> {
    let user = mutate_desktop(|d| d.login(&Directory::default(), username, password))
        .map_err(js_error)?
        .map_err(js_error)?;
    to_js(&user)
}

#[wasm_bindgen(js_name = sessionLogout)]
pub fn session_logout() -> Result<(), JsValue> {
    mutate_desktop(|d| d.logout()).map_err(js_error)
}

/// The whole session document as it would be saved
#[wasm_bindgen(js_name = sessionState)]
pub fn session_state() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.snapshot())).map_err(js_error)?
}

#[wasm_bindgen(js_name = settingsGet)]
pub fn settings_get() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.session.settings)).map_err(js_error)?
}

/// Merge a partial settings object and return the result
#[wasm_bindgen(js_name = settingsUpdate)]
pub fn settings_update(patch: JsValue) -> Result<JsValue, JsValue> {
    let patch: SettingsPatch = from_js(patch)?;
    let settings = mutate_desktop(|d| {
        d.update_settings(patch);
        d.session.settings.clone()
    })
    .map_err(js_error)?;
    to_js(&settings)
}

#[wasm_bindgen(js_name = notificationsList)]
pub fn notifications_list() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(d.notifications.notifications())).map_err(js_error)?
}

#[wasm_bindgen(js_name = notificationsUnread)]
pub fn notifications_unread() -> Result<u32, JsValue> {
    with_desktop(|d| d.notifications.unread_count() as u32).map_err(js_error)
}

#[wasm_bindgen(js_name = notificationsMarkAllRead)]
pub fn notifications_mark_all_read() -> Result<(), JsValue> {
    mutate_desktop(|d| d.notifications.mark_all_read()).map_err(js_error)
}

#[wasm_bindgen(js_name = notificationsDismiss)]
pub fn notifications_dismiss(id: &str) -> Result<bool, JsValue> {
    let id = Uuid::parse_str(id).map_err(js_error)?;
    mutate_desktop(|d| d.notifications.dismiss(id)).map_err(js_error)
}

#[wasm_bindgen(js_name = notificationsClear)]
pub fn notifications_clear() -> Result<(), JsValue> {
    mutate_desktop(|d| d.notifications.clear()).map_err(js_error)
}

/// Drop expired notifications. The UI calls this on a timer.
#[wasm_bindgen(js_name = notificationsTick)]
pub fn notifications_tick() -> Result<u32, JsValue> {
    mutate_desktop(|d| d.tick(Timestamp::now()) as u32).map_err(js_error)
}

/// Search files, apps, settings pages and system actions
#[wasm_bindgen(js_name = globalSearch)]
pub fn global_search(query: &str) -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(&d.search(query))).map_err(js_error)?
}
