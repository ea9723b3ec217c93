use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// What the user seems to want
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    OpenApp,
    FileManagement,
    Search,
    Communication,
    Reminder,
    General,
    Offline,
}

/// The kind of a suggested action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OpenApp,
    OpenFile,
    OpenUrl,
    Search,
    SystemCommand,
    CreateFile,
    SendEmail,
    SetReminder,
}

/// A button the assistant offers next to a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: String,
    pub value: String,
}

impl Action {
    pub fn new(kind: ActionKind, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn open_app(label: impl Into<String>, app: impl Into<String>) -> Self {
        Self::new(ActionKind::OpenApp, label, app)
    }

    pub fn open_url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(ActionKind::OpenUrl, label, url)
    }
}

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl Message {
    pub fn user(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.to_string(),
            timestamp: Utc::now(),
            intent: None,
            actions: Vec::new(),
        }
    }

    pub fn assistant(reply: &Reply) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: reply.content.clone(),
            timestamp: Utc::now(),
            intent: Some(reply.intent),
            actions: reply.actions.clone(),
        }
    }
}

/// The assistant's answer to one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub actions: Vec<Action>,
    pub intent: Intent,
    pub confidence: f32,
}

impl Reply {
    pub fn new(content: impl Into<String>, intent: Intent) -> Self {
        Self {
            content: content.into(),
            actions: Vec::new(),
            intent,
            confidence: 0.9,
        }
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }
}
