use wasm_bindgen::prelude::*;

use super::{js_error, to_js};
use crate::{mutate_desktop, with_desktop};

/// Run a command line, returning `{ type: "text" | "error" | "clear", content? }`
#[wasm_bindgen(js_name = terminalRun)]
pub fn terminal_run(line: &str) -> Result<JsValue, JsValue> {
    let output = mutate_desktop(|d| d.run_command(line)).map_err(js_error)?;
    to_js(&output)
}

#[wasm_bindgen(js_name = terminalPwd)]
pub fn terminal_pwd() -> Result<String, JsValue> {
    with_desktop(|d| d.terminal.pwd(&d.fs)).map_err(js_error)
}

#[wasm_bindgen(js_name = terminalHistory)]
pub fn terminal_history() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(d.terminal.history())).map_err(js_error)?
}
