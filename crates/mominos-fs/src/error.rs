use crate::entry::EntryId;

/// An error for mominos-fs
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NoSuchEntry(EntryId),
    NoSuchPath(String),
    NotAFolder(EntryId),
    NotAFile(EntryId),
    DuplicateId(EntryId),
    WouldCreateCycle { entry: EntryId, target: EntryId },
    BrokenLink { entry: EntryId, link: EntryId },
    FileTooLarge { name: String, size: u64, limit: u64 },
    ReadFailed(String),
    Malformed(String),
    Browser(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchEntry(id) => write!(f, "No such file or folder: {}", id),
            Self::NoSuchPath(path) => write!(f, "No such file or directory: {}", path),
            Self::NotAFolder(id) => write!(f, "{} is not a folder", id),
            Self::NotAFile(id) => write!(f, "{} is not a file", id),
            Self::DuplicateId(id) => write!(f, "The id {} is used by more than one entry", id),
            Self::WouldCreateCycle { entry, target } => write!(
                f,
                "Cannot move {} into {}: the target is inside the folder being moved",
                entry, target
            ),
            Self::BrokenLink { entry, link } => write!(
                f,
                "The entry {} has an inconsistent link to {}",
                entry, link
            ),
            Self::FileTooLarge { name, limit, .. } => write!(
                f,
                "{}: file size exceeds maximum limit of {}MB",
                name,
                limit / 1024 / 1024
            ),
            Self::ReadFailed(reason) => write!(f, "Failed to read file: {}", reason),
            Self::Malformed(reason) => write!(f, "Malformed file system document: {}", reason),
            Self::Browser(reason) => write!(f, "Browser call failed: {}", reason),
        }
    }
}
