use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::{
    error::Error,
    message::{Message, Role},
};

/// The context every remote request starts with
pub const SYSTEM_CONTEXT: &str = "You are Momin, an advanced AI assistant for MominOS, a modern \
desktop operating system interface. You can manage files, launch and control applications, run \
system commands, search files, apps and information, send emails and set reminders.\n\n\
Available apps: Calculator, File Explorer, Music, Browser, Email, Calendar, Terminal, Settings, \
Code Editor, Photos. Files live in a hierarchical tree of folders.\n\n\
Be helpful, concise and natural. Suggest relevant actions when appropriate and use markdown \
formatting for readability.";

/// One turn of the prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for PromptMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }
}

/// What is sent to a completion backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system: String,
    pub messages: Vec<PromptMessage>,
}

impl CompletionRequest {
    /// Build a request from the tail of a conversation.
    /// System messages are folded into the context instead of the turn list.
    pub fn from_history(history: &[Message], window: usize) -> Self {
        let start = history.len().saturating_sub(window);
        Self {
            system: SYSTEM_CONTEXT.to_string(),
            messages: history[start..]
                .iter()
                .filter(|m| m.role != Role::System)
                .map(PromptMessage::from)
                .collect(),
        }
    }
}

/// Something that can turn a prompt into reply text
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error>;
}

/// A backend that asks a messages endpoint over HTTPS with `fetch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchBackend {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for FetchBackend {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            api_key: String::new(),
            model: "claude-3-sonnet-20240229".to_string(),
            max_tokens: 1000,
        }
    }
}

#[derive(Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl FetchBackend {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            ..Self::default()
        }
    }

    /// The JSON body for a request
    pub fn body(&self, request: &CompletionRequest) -> Result<String, Error> {
        serde_json::to_string(&MessagesBody {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: &request.system,
            messages: &request.messages,
            temperature: 0.7,
        })
        .map_err(|e| Error::Malformed(e.to_string()))
    }

    async fn post(&self, body: &str) -> Result<String, Error> {
        let window = web_sys::window().ok_or(Error::Unavailable("Window".to_string()))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_body(&body.into());

        let request = Request::new_with_str_and_init(&self.endpoint, &init)
            .map_err(|e| Error::Network(format!("{:?}", e)))?;
        let headers = request.headers();
        for (name, value) in [
            ("Content-Type", "application/json"),
            ("x-api-key", self.api_key.as_str()),
            ("anthropic-version", "2023-06-01"),
        ] {
            headers
                .set(name, value)
                .map_err(|e| Error::Network(format!("{:?}", e)))?;
        }

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| Error::Network(format!("{:?}", e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| Error::Network(format!("{:?}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::Network(format!("{:?}", e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| Error::Network(format!("{:?}", e)))?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Err(failure(status, &text));
        }
        Ok(text)
    }
}

/// The error for a non-success response.
/// Rate limits and quota messages count as quota errors.
pub fn failure(status: u16, body: &str) -> Error {
    let body = body.to_lowercase();
    if status == 429 || body.contains("quota") || body.contains("rate_limit") {
        Error::QuotaExceeded
    } else {
        Error::Http(status)
    }
}

/// Pull the reply text out of a messages response body
pub fn parse_reply(body: &str) -> Result<String, Error> {
    let response: MessagesResponse =
        serde_json::from_str(body).map_err(|e| Error::Malformed(e.to_string()))?;
    response
        .content
        .into_iter()
        .find_map(|block| block.text)
        .ok_or(Error::Malformed("no text in response".to_string()))
}

impl CompletionBackend for FetchBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        let body = self.body(request)?;
        let raw = self.post(&body).await?;
        parse_reply(&raw)
    }
}
