use serde::{Deserialize, Serialize};

use crate::util;

/// The icon family of an entry, derived from its kind and extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Folder,
    Document,
    Image,
    Audio,
    Video,
    Code,
    Archive,
    Spreadsheet,
    Presentation,
    Data,
    Database,
}

#[rustfmt::skip]
const EXTENSIONS: &[(&str, IconCategory)] = &[
    ("txt", IconCategory::Document), ("doc", IconCategory::Document), ("docx", IconCategory::Document),
    ("pdf", IconCategory::Document), ("rtf", IconCategory::Document),
    ("jpg", IconCategory::Image), ("jpeg", IconCategory::Image), ("png", IconCategory::Image),
    ("gif", IconCategory::Image), ("bmp", IconCategory::Image), ("svg", IconCategory::Image),
    ("mp3", IconCategory::Audio), ("wav", IconCategory::Audio), ("flac", IconCategory::Audio),
    ("aac", IconCategory::Audio),
    ("mp4", IconCategory::Video), ("avi", IconCategory::Video), ("mov", IconCategory::Video),
    ("mkv", IconCategory::Video),
    ("js", IconCategory::Code), ("ts", IconCategory::Code), ("jsx", IconCategory::Code),
    ("tsx", IconCategory::Code), ("html", IconCategory::Code), ("css", IconCategory::Code),
    ("json", IconCategory::Code), ("py", IconCategory::Code), ("java", IconCategory::Code),
    ("cpp", IconCategory::Code), ("c", IconCategory::Code),
    ("zip", IconCategory::Archive), ("rar", IconCategory::Archive), ("7z", IconCategory::Archive),
    ("tar", IconCategory::Archive), ("gz", IconCategory::Archive),
    ("xls", IconCategory::Spreadsheet), ("xlsx", IconCategory::Spreadsheet), ("csv", IconCategory::Spreadsheet),
    ("ppt", IconCategory::Presentation), ("pptx", IconCategory::Presentation),
    ("xml", IconCategory::Data),
    ("sql", IconCategory::Database), ("db", IconCategory::Database), ("sqlite", IconCategory::Database),
];

/// Extensions whose content can be shown as text in a preview
const PREVIEWABLE: &[&str] = &[
    "txt", "md", "js", "ts", "html", "css", "json", "py", "java", "cpp", "c",
];

impl IconCategory {
    /// Look up the category of a file by its name.
    /// Unknown or missing extensions are documents.
    pub fn for_file(name: &str) -> Self {
        let Some(ext) = util::extension(name) else {
            return Self::Document;
        };
        EXTENSIONS
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, category)| *category)
            .unwrap_or(Self::Document)
    }

    /// The glyph shown for the category
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::Document => "📄",
            Self::Image => "🖼️",
            Self::Audio => "🎵",
            Self::Video => "🎬",
            Self::Code => "📝",
            Self::Archive => "📦",
            Self::Spreadsheet => "📊",
            Self::Presentation => "📽️",
            Self::Data => "📋",
            Self::Database => "🗄️",
        }
    }
}

/// Whether the file's content can be previewed as text
pub fn is_previewable(name: &str) -> bool {
    util::extension(name)
        .map(|ext| PREVIEWABLE.contains(&ext.as_str()))
        .unwrap_or(false)
}
