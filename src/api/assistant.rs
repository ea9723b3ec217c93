use chrono::Utc;
use mominos_assistant::{
    backend::{CompletionBackend, FetchBackend},
    message::Action,
    speech, THINKING_DELAY,
};
use wasm_bindgen::prelude::*;

use super::{from_js, js_error, to_js};
use crate::{mutate_desktop, with_desktop};

/// Ask the remote assistant, or the reply table while the assistant is switched off.
/// The desktop is released while the request is in flight, failures answer offline.
#[wasm_bindgen(js_name = assistantAsk)]
pub async fn assistant_ask(input: String) -> Result<JsValue, JsValue> {
    if !with_desktop(|d| d.session.ai_enabled).map_err(js_error)? {
        return assistant_ask_local(&input);
    }

    let (request, backend) = mutate_desktop(|d| {
        (d.assistant.prepare(&input), d.assistant.backend().clone())
    })
    .map_err(js_error)?;

    let outcome = match request {
        Some(request) => Some(backend.complete(&request).await),
        None => None,
    };

    let reply = mutate_desktop(|d| d.assistant.finish(&input, outcome, Utc::now()))
        .map_err(js_error)?;
    to_js(&reply)
}

/// Answer from the built in reply table
#[wasm_bindgen(js_name = assistantAskLocal)]
pub fn assistant_ask_local(input: &str) -> Result<JsValue, JsValue> {
    let reply = mutate_desktop(|d| d.ask_locally(input)).map_err(js_error)?;
    to_js(&reply)
}

/// Milliseconds the UI shows the typing indicator before a local reply
#[wasm_bindgen(js_name = assistantThinkingDelay)]
pub fn assistant_thinking_delay() -> u32 {
    THINKING_DELAY.as_millis() as u32
}

/// Run one of the actions attached to a reply and tell the UI what to do next
#[wasm_bindgen(js_name = assistantPerform)]
pub fn assistant_perform(action: JsValue) -> Result<JsValue, JsValue> {
    let action: Action = from_js(action)?;
    let effect = mutate_desktop(|d| d.perform(&action)).map_err(js_error)?;
    to_js(&effect)
}

#[wasm_bindgen(js_name = assistantHistory)]
pub fn assistant_history() -> Result<JsValue, JsValue> {
    with_desktop(|d| to_js(d.assistant.history())).map_err(js_error)?
}

#[wasm_bindgen(js_name = assistantClear)]
pub fn assistant_clear() -> Result<(), JsValue> {
    mutate_desktop(|d| d.assistant.clear_history()).map_err(js_error)
}

#[wasm_bindgen(js_name = assistantSetEnabled)]
pub fn assistant_set_enabled(enabled: bool) -> Result<(), JsValue> {
    mutate_desktop(|d| d.session.ai_enabled = enabled).map_err(js_error)
}

/// Point the assistant at a messages endpoint. The key is kept in memory only.
#[wasm_bindgen(js_name = assistantConfigure)]
pub fn assistant_configure(endpoint: Option<String>, api_key: &str) -> Result<(), JsValue> {
    let mut backend = FetchBackend::new(api_key);
    if let Some(endpoint) = endpoint {
        backend.endpoint = endpoint;
    }
    mutate_desktop(|d| d.assistant.set_backend(backend)).map_err(js_error)
}

/// Read a reply out loud
#[wasm_bindgen(js_name = assistantSpeak)]
pub fn assistant_speak(text: &str) -> Result<(), JsValue> {
    speech::speak(text).map_err(js_error)
}

/// Create `New Document.txt` in the folder the explorer shows
#[wasm_bindgen(js_name = createDocument)]
pub fn create_document() -> Result<String, JsValue> {
    let id = mutate_desktop(|d| d.create_document())
        .map_err(js_error)?
        .map_err(js_error)?;
    Ok(id.to_string())
}
