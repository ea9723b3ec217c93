use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::Error, window::Size};

/// The applications a window can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    Browser,
    FileExplorer,
    Email,
    Calendar,
    Music,
    Photos,
    Terminal,
    Code,
    Store,
    Weather,
    Assistant,
    Settings,
    Calculator,
}

impl AppKind {
    pub const ALL: [AppKind; 13] = [
        Self::Browser,
        Self::FileExplorer,
        Self::Email,
        Self::Calendar,
        Self::Music,
        Self::Photos,
        Self::Terminal,
        Self::Code,
        Self::Store,
        Self::Weather,
        Self::Assistant,
        Self::Settings,
        Self::Calculator,
    ];

    /// The id the UI uses for the app, the same as its serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::FileExplorer => "file-explorer",
            Self::Email => "email",
            Self::Calendar => "calendar",
            Self::Music => "music",
            Self::Photos => "photos",
            Self::Terminal => "terminal",
            Self::Code => "code",
            Self::Store => "store",
            Self::Weather => "weather",
            Self::Assistant => "assistant",
            Self::Settings => "settings",
            Self::Calculator => "calculator",
        }
    }

    /// The window title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Browser => "Browser",
            Self::FileExplorer => "File Explorer",
            Self::Email => "Email",
            Self::Calendar => "Calendar",
            Self::Music => "Music Player",
            Self::Photos => "Photos",
            Self::Terminal => "Terminal",
            Self::Code => "Code Editor",
            Self::Store => "Sierro Store",
            Self::Weather => "Weather",
            Self::Assistant => "AI Assistant",
            Self::Settings => "Settings",
            Self::Calculator => "Calculator",
        }
    }

    /// A one line description for launchers and search
    pub fn description(&self) -> &'static str {
        match self {
            Self::Browser => "Browse the web",
            Self::FileExplorer => "Browse and manage files",
            Self::Email => "Send and receive emails",
            Self::Calendar => "Manage schedule and events",
            Self::Music => "Play audio files",
            Self::Photos => "View and edit images",
            Self::Terminal => "Command line interface",
            Self::Code => "Edit text and code files",
            Self::Store => "Discover and install apps",
            Self::Weather => "Forecasts and conditions",
            Self::Assistant => "Ask Momin for help",
            Self::Settings => "System preferences",
            Self::Calculator => "Scientific calculator",
        }
    }

    /// The size a freshly opened window gets
    pub fn default_size(&self) -> Size {
        match self {
            Self::Calculator => Size::new(320, 480),
            Self::Weather => Size::new(480, 560),
            Self::Terminal | Self::Assistant => Size::new(720, 480),
            Self::Settings => Size::new(760, 520),
            Self::Browser | Self::Code | Self::Photos | Self::Store => Size::new(1024, 700),
            _ => Size::new(900, 600),
        }
    }
}

impl FromStr for AppKind {
    type Err = Error;

    /// Parse an app name the way users and the assistant spell it
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "browser" | "chrome" | "web" => Ok(Self::Browser),
            "files" | "file" | "file-explorer" | "explorer" => Ok(Self::FileExplorer),
            "email" | "mail" => Ok(Self::Email),
            "calendar" => Ok(Self::Calendar),
            "music" => Ok(Self::Music),
            "photos" => Ok(Self::Photos),
            "terminal" => Ok(Self::Terminal),
            "code" | "editor" => Ok(Self::Code),
            "store" => Ok(Self::Store),
            "weather" => Ok(Self::Weather),
            "assistant" | "ai" => Ok(Self::Assistant),
            "settings" => Ok(Self::Settings),
            "calculator" | "calc" => Ok(Self::Calculator),
            other => Err(Error::UnknownApp(other.to_string())),
        }
    }
}
