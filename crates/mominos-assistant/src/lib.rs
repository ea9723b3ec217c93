//! The desktop assistant.
//! Replies come from a remote completion backend when one answers, and from fixed
//! tables otherwise, so the assistant always has something to say.
use std::time::Duration;

use backend::{CompletionBackend, CompletionRequest};
use chrono::{DateTime, Utc};
use error::Error;
use message::{Intent, Message, Reply};

pub mod backend;
pub mod canned;
pub mod error;
pub mod intent;
pub mod keywords;
pub mod message;
pub mod offline;
pub mod speech;
pub mod tests;

/// How many messages of the conversation are sent with each request
pub const HISTORY_WINDOW: usize = 10;

/// The pause before a local reply is shown
pub const THINKING_DELAY: Duration = Duration::from_secs(1);

/// An assistant conversation bound to a completion backend
#[derive(Debug, Clone)]
pub struct Assistant<B> {
    backend: B,
    history: Vec<Message>,
    quota_exceeded: bool,
}

impl<B: CompletionBackend> Assistant<B> {
    pub fn new(backend: B) -> Self {
        Self::with_history(backend, Vec::new())
    }

    /// Resume a saved conversation
    pub fn with_history(backend: B, history: Vec<Message>) -> Self {
        Self {
            backend,
            history,
            quota_exceeded: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Point the assistant at another backend, keeping the conversation
    pub fn set_backend(&mut self, backend: B) {
        self.backend = backend;
        self.quota_exceeded = false;
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Whether requests currently skip the backend
    pub fn is_quota_exceeded(&self) -> bool {
        self.quota_exceeded
    }

    /// Answer from the local reply table without touching the backend
    pub fn respond_locally(&mut self, input: &str, now: DateTime<Utc>) -> Reply {
        self.history.push(Message::user(input));
        let reply = canned::canned_reply(input, now);
        self.history.push(Message::assistant(&reply));
        reply
    }

    /// Record the user's input and build the request for the backend.
    /// Returns None while the quota is exhausted, the caller then goes straight to [`Assistant::finish`].
    pub fn prepare(&mut self, input: &str) -> Option<CompletionRequest> {
        self.history.push(Message::user(input));
        if self.quota_exceeded {
            log::info!("Completion quota exhausted, answering offline");
            return None;
        }
        Some(CompletionRequest::from_history(&self.history, HISTORY_WINDOW))
    }

    /// Turn the backend's outcome into a reply and record it.
    /// Any failure falls back to the offline table.
    pub fn finish(
        &mut self,
        input: &str,
        outcome: Option<Result<String, Error>>,
        now: DateTime<Utc>,
    ) -> Reply {
        let reply = match outcome {
            Some(Ok(content)) => {
                self.quota_exceeded = false;
                let (intent, actions) = intent::classify(input);
                Reply::new(content, intent).with_actions(actions)
            }
            Some(Err(e)) => {
                log::warn!("Assistant request failed, answering offline: {}", e);
                if e.is_quota() {
                    self.quota_exceeded = true;
                }
                Self::offline(input, now)
            }
            None => Self::offline(input, now),
        };
        self.history.push(Message::assistant(&reply));
        reply
    }

    /// Ask the backend and record the exchange
    pub async fn ask(&mut self, input: &str) -> Reply {
        let outcome = match self.prepare(input) {
            Some(request) => Some(self.backend.complete(&request).await),
            None => None,
        };
        self.finish(input, outcome, Utc::now())
    }

    fn offline(input: &str, now: DateTime<Utc>) -> Reply {
        let (_, actions) = intent::classify(input);
        Reply {
            content: offline::fallback_reply(input, now),
            actions,
            intent: Intent::Offline,
            confidence: 0.5,
        }
    }
}
