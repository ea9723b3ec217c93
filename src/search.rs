//! Desktop wide search over files, apps, settings pages and system actions.
use std::cmp::Ordering;

use mominos_fs::{entry::EntryKind, FileSystem};
use mominos_wm::app::AppKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    File,
    Folder,
    App,
    Setting,
    Action,
}

/// One search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HitKind,
    pub title: String,
    pub description: String,
    pub score: f32,
}

const SETTINGS: &[(&str, &str)] = &[
    ("Display Settings", "Change screen resolution and brightness"),
    ("Sound Settings", "Adjust volume and audio preferences"),
    ("Network Settings", "Configure WiFi and network connections"),
    ("Privacy Settings", "Manage privacy and security options"),
    ("System Updates", "Check for system updates"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("Take Screenshot", "Capture screen image"),
    ("Empty Trash", "Permanently delete files in trash"),
    ("Restart System", "Restart the operating system"),
    ("Sleep Mode", "Put system to sleep"),
    ("Lock Screen", "Lock the screen"),
];

/// Search everything. Results are ordered by score, ties keep their source order.
pub fn global_search(fs: &FileSystem, query: &str) -> Vec<SearchHit> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit> = fs
        .search(query)
        .into_iter()
        .map(|entry| {
            let kind = match entry.kind() {
                EntryKind::File => HitKind::File,
                EntryKind::Folder => HitKind::Folder,
            };
            let label = if entry.is_folder() { "Folder" } else { "File" };
            let path = fs.path_of(entry.id()).unwrap_or_default();
            SearchHit {
                id: entry.id().to_string(),
                kind,
                title: entry.name().to_string(),
                description: format!("{} • {}", label, path),
                score: if needle.contains(&entry.name().to_lowercase()) {
                    1.0
                } else {
                    0.5
                },
            }
        })
        .collect();

    hits.extend(
        AppKind::ALL
            .iter()
            .filter(|app| matches(&needle, app.title(), app.description()))
            .map(|app| SearchHit {
                id: app.id().to_string(),
                kind: HitKind::App,
                title: app.title().to_string(),
                description: app.description().to_string(),
                score: 1.0,
            }),
    );
    hits.extend(table_hits(&needle, SETTINGS, HitKind::Setting, 0.8));
    hits.extend(table_hits(&needle, ACTIONS, HitKind::Action, 0.6));

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}

fn matches(needle: &str, name: &str, description: &str) -> bool {
    name.to_lowercase().contains(needle) || description.to_lowercase().contains(needle)
}

fn table_hits<'a>(
    needle: &'a str,
    table: &'a [(&'a str, &'a str)],
    kind: HitKind,
    score: f32,
) -> impl Iterator<Item = SearchHit> + 'a {
    table
        .iter()
        .filter(move |(name, description)| matches(needle, name, description))
        .map(move |(name, description)| SearchHit {
            id: name.to_lowercase().replace(' ', "-"),
            kind,
            title: name.to_string(),
            description: description.to_string(),
            score,
        })
}
