//! Replies used when the remote backend cannot answer.
use chrono::{DateTime, Utc};

use crate::keywords::{contains_any, contains_word, format_date, format_time, strip_verbs};

const TOPICS: &[(&[&str], &str)] = &[
    (
        &["calculator", "math"],
        "I'll open the Calculator app for you! Perfect for all your mathematical calculations.",
    ),
    (
        &["browser", "internet", "web"],
        "Opening the Browser! Ready to explore the web and discover new content.",
    ),
    (
        &["calendar", "schedule", "appointment"],
        "Launching Calendar to help you stay organized and manage your schedule effectively!",
    ),
    (
        &["mail", "email"],
        "Opening your Mail application. Let's check those important messages and stay connected!",
    ),
    (
        &["music", "audio", "song"],
        "Starting the Music player! Time to enjoy your favorite tunes and discover new sounds.",
    ),
    (
        &["terminal", "command", "console"],
        "Opening Terminal for advanced system access. Welcome to the command line interface!",
    ),
    (
        &["code", "programming", "editor"],
        "Launching the Code Editor! Ready to write some amazing code and build great software.",
    ),
    (
        &["photos", "images", "pictures"],
        "Opening Photos to browse your visual memories and manage your image collection!",
    ),
    (
        &["files", "folder", "explorer"],
        "Opening File Explorer to navigate your files and manage your digital storage efficiently!",
    ),
    (
        &["settings", "preferences", "configure"],
        "Opening Settings to customize your MominOS experience and adjust system preferences!",
    ),
];

const HELP: &str = "I'm Momin, your AI assistant! Even in offline mode, I can help you:\n\n\
• Open any application instantly\n\
• Navigate the system efficiently\n\
• Provide basic system information\n\
• Execute common tasks\n\
• Guide you through MominOS features\n\n\
Just speak naturally - I understand context and can assist with most tasks!";

/// The deterministic reply for an input while offline
pub fn fallback_reply(input: &str, now: DateTime<Utc>) -> String {
    let normalized = input.to_lowercase();

    if let Some((_, reply)) = TOPICS.iter().find(|(keywords, _)| contains_any(&normalized, keywords)) {
        return reply.to_string();
    }

    if contains_any(&normalized, &["search", "find", "google"]) {
        let term = strip_verbs(input, &["search", "google", "find", "look for"]);
        return format!(
            "I'll search for \"{}\" across the web to find you the most relevant results!",
            term
        );
    }

    if contains_any(&normalized, &["time", "clock"]) {
        return format!(
            "It's currently {} on {}. Hope you're having a great day!",
            format_time(now),
            format_date(now)
        );
    }

    if contains_word(&normalized, &["hello", "hi", "hey"]) {
        return "Hello! I'm Momin, your intelligent AI assistant built into MominOS. I'm currently \
                running in offline mode but still ready to help you navigate and use your system \
                efficiently!"
            .to_string();
    }

    if contains_any(&normalized, &["help", "what can you do"]) {
        return HELP.to_string();
    }

    if normalized.contains("thank") {
        return "You're very welcome! I'm always here to help make your MominOS experience smooth \
                and productive."
            .to_string();
    }

    format!(
        "I understand you're asking about \"{}\". While I'm currently in offline mode, I can still \
         help you navigate MominOS efficiently. Try asking me to open specific apps, search for \
         information, or tell me what you'd like to accomplish!",
        input
    )
}
