use crate::{
    keywords::{contains_any, strip_verbs},
    message::{Action, ActionKind, Intent},
};

const APPS: &[&str] = &[
    "calculator", "file", "music", "browser", "email", "calendar", "terminal", "settings", "code",
    "photos",
];

/// Work out what the user asked for and which actions fit.
/// Used to decorate replies that come back from the remote backend.
pub fn classify(input: &str) -> (Intent, Vec<Action>) {
    let lower = input.to_lowercase();
    let mut actions = Vec::new();

    if contains_any(&lower, &["open", "launch", "start"]) {
        if let Some(app) = launched_app(&lower) {
            actions.push(Action::open_app(format!("Open {}", app), app));
        }
        return (Intent::OpenApp, actions);
    }

    if contains_any(&lower, &["file", "folder", "document"]) {
        if contains_any(&lower, &["create", "new"]) {
            actions.push(Action::new(ActionKind::CreateFile, "Create new file", "new_file"));
        } else if lower.contains("find") {
            actions.push(Action::new(ActionKind::OpenFile, "Open file explorer", "file_explorer"));
        }
        return (Intent::FileManagement, actions);
    }

    if contains_any(&lower, &["search", "find"]) {
        let query = strip_verbs(&lower, &["search", "find"]);
        actions.push(Action::new(ActionKind::Search, "Search files and apps", query));
        return (Intent::Search, actions);
    }

    if contains_any(&lower, &["email", "mail"]) {
        actions.push(Action::new(ActionKind::SendEmail, "Open email app", "email"));
        return (Intent::Communication, actions);
    }

    if contains_any(&lower, &["reminder", "schedule"]) {
        actions.push(Action::new(ActionKind::SetReminder, "Set reminder", input.trim()));
        return (Intent::Reminder, actions);
    }

    (Intent::General, actions)
}

/// The app named right after a launch verb, as in "open terminal"
fn launched_app(lower: &str) -> Option<&'static str> {
    let mut words = lower.split_whitespace();
    while let Some(word) = words.next() {
        if matches!(word, "open" | "launch" | "start") {
            let next = words.clone().next()?;
            if let Some(app) = APPS.iter().find(|app| next.starts_with(**app)) {
                return Some(*app);
            }
        }
    }
    None
}
