//! The local reply table used when the assistant answers without a remote backend.
use chrono::{DateTime, Utc};

use crate::{
    keywords::{contains_any, contains_word, format_date, format_time, google_search_url, strip_verbs},
    message::{Action, Intent, Reply},
};

struct Launch {
    keywords: &'static [&'static str],
    reply: &'static str,
    label: &'static str,
    app: &'static str,
}

const LAUNCH_VERBS: &[&str] = &["open", "launch", "start"];

const LAUNCHES: &[Launch] = &[
    Launch {
        keywords: &["calculator", "calc"],
        reply: "Opening Calculator for you!",
        label: "Open Calculator",
        app: "calculator",
    },
    Launch {
        keywords: &["browser", "chrome", "web"],
        reply: "Launching Browser to browse the web!",
        label: "Open Browser",
        app: "browser",
    },
    Launch {
        keywords: &["calendar"],
        reply: "Opening Calendar to manage your schedule!",
        label: "Open Calendar",
        app: "calendar",
    },
    Launch {
        keywords: &["mail", "email"],
        reply: "Opening Mail to check your messages!",
        label: "Open Mail",
        app: "mail",
    },
    Launch {
        keywords: &["music", "audio", "player"],
        reply: "Starting Music app for your listening pleasure!",
        label: "Open Music",
        app: "music",
    },
    Launch {
        keywords: &["terminal", "console", "command"],
        reply: "Opening Terminal for command line access!",
        label: "Open Terminal",
        app: "terminal",
    },
    Launch {
        keywords: &["code", "editor", "programming"],
        reply: "Launching Code Editor for development!",
        label: "Open Code",
        app: "code",
    },
    Launch {
        keywords: &["photos", "images", "gallery"],
        reply: "Opening Photos to view your images!",
        label: "Open Photos",
        app: "photos",
    },
    Launch {
        keywords: &["files", "explorer", "folder"],
        reply: "Opening File Explorer to browse your files!",
        label: "Open Files",
        app: "files",
    },
    Launch {
        keywords: &["settings", "preferences", "config"],
        reply: "Opening Settings to customize your system!",
        label: "Open Settings",
        app: "settings",
    },
];

const HELP: &str = "I'm your intelligent OS assistant! I can:\n\n\
• Open any application instantly\n\
• Browse the web and search for information\n\
• Manage your system settings\n\
• Provide real-time information\n\
• Execute voice commands\n\
• Learn from your usage patterns\n\n\
Just tell me what you need, and I'll make it happen!";

/// The first greeting shown in a fresh conversation
pub const WELCOME: &str = "Hello! I'm Momin, your AI assistant. I can help you navigate MominOS, \
open applications, browse the web, or answer questions. What would you like to do?";

/// Answer an input from the fixed reply table.
/// Rules are checked in order and the first match wins.
pub fn canned_reply(input: &str, now: DateTime<Utc>) -> Reply {
    let input = input.trim().to_lowercase();

    if contains_any(&input, LAUNCH_VERBS) {
        if let Some(launch) = LAUNCHES.iter().find(|l| contains_any(&input, l.keywords)) {
            return Reply::new(launch.reply, Intent::OpenApp)
                .with_actions(vec![Action::open_app(launch.label, launch.app)]);
        }
    }

    if contains_any(&input, &["search", "google", "find"]) {
        let term = strip_verbs(&input, &["search", "google", "find"]);
        if !term.is_empty() {
            return Reply::new(format!("Searching for \"{}\" on the web!", term), Intent::Search)
                .with_actions(vec![
                    Action::open_url(format!("Search: {}", term), google_search_url(&term)),
                    Action::open_app("Open Browser", "browser"),
                ]);
        }
    }

    if input.contains("youtube") {
        return Reply::new("Opening YouTube for video content!", Intent::General)
            .with_actions(vec![Action::open_url("Open YouTube", "https://www.youtube.com")]);
    }

    if input.contains("github") {
        return Reply::new("Opening GitHub for code repositories!", Intent::General)
            .with_actions(vec![Action::open_url("Open GitHub", "https://www.github.com")]);
    }

    if contains_any(&input, &["time", "clock"]) {
        return Reply::new(
            format!(
                "The current time is {}. Today is {}.",
                format_time(now),
                format_date(now)
            ),
            Intent::General,
        );
    }

    if input.contains("weather") {
        return Reply::new(
            "I'd love to check the weather for you! Let me open a weather service.",
            Intent::General,
        )
        .with_actions(vec![Action::open_url("Check Weather", "https://weather.com")]);
    }

    if contains_any(&input, &["help", "what can you do", "capabilities"]) {
        return Reply::new(HELP, Intent::General).with_actions(vec![
            Action::open_app("Show All Apps", "launcher"),
            Action::open_app("System Settings", "settings"),
        ]);
    }

    if contains_word(&input, &["hello", "hi", "hey"]) {
        return Reply::new(
            "Hello! I'm Momin, your AI companion. I'm here to make your MominOS experience \
             seamless and intelligent. How can I assist you today?",
            Intent::General,
        );
    }

    if input.contains("thank") {
        return Reply::new(
            "You're very welcome! I'm always here to help. Is there anything else you'd like me to do?",
            Intent::General,
        );
    }

    Reply::new(
        format!(
            "I understand you're asking about \"{}\". While I'm continuously learning, I can help you \
             with opening applications, browsing the web, or system tasks. Would you like me to search \
             for more information about this?",
            input
        ),
        Intent::General,
    )
    .with_actions(vec![
        Action::open_url(format!("Search: {}", input), google_search_url(&input)),
        Action::open_app("Open Browser", "browser"),
    ])
}
