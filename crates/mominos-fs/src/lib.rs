//! The virtual file system of the desktop.
//! Every mutation of the tree goes through [`FileSystem`], which keeps each entry's `parent`
//! in agreement with its parent's `children`.
use entry::{Entry, EntryId, EntryKind, Node};
use error::Error;
use serde::{Deserialize, Serialize};
use table::EntryTable;
use time::Timestamp;
use upload::UploadSource;

pub mod download;
pub mod entry;
pub mod error;
pub mod explorer;
pub mod icon;
pub mod table;
pub mod tests;
pub mod time;
pub mod upload;
pub mod util;

use download::Download;

const WELCOME_TEXT: &str = "Welcome to MominOS!\n\nThis is your personal digital workspace. You can:\n- Create and organize files\n- Upload and manage documents\n- Store your photos and music\n- Keep your work organized\n\nEnjoy your new desktop experience!";

/// A partial update of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Totals over the whole tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_files: usize,
    pub total_folders: usize,
    pub total_size: u64,
    pub last_modified: Option<Timestamp>,
}

/// The file system service
#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    table: EntryTable,
}

impl FileSystem {
    /// Create an empty file system
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system holding the first run folders and the welcome file
    pub fn with_defaults() -> Self {
        let mut fs = Self::new();
        fs.seed_defaults();
        fs
    }

    /// Restore a file system from persisted entries
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, Error> {
        Ok(Self {
            table: EntryTable::from_entries(entries)?,
        })
    }

    /// Populate an empty tree with the default folders and the welcome file.
    /// Does nothing if anything already exists.
    pub fn seed_defaults(&mut self) {
        if !self.table.is_empty() {
            return;
        }
        for (id, name) in [
            ("folder-documents", "Documents"),
            ("folder-pictures", "Pictures"),
            ("folder-music", "Music"),
            ("folder-downloads", "Downloads"),
        ] {
            let folder = Entry::folder(EntryId::new(id), name);
            if let Err(e) = self.table.insert(folder, None) {
                log::error!("Failed to seed {}: {}", name, e);
            }
        }
        let welcome = Entry::file(
            EntryId::new("file-welcome"),
            "Welcome.txt",
            Some(WELCOME_TEXT.to_string()),
        );
        if let Err(e) = self.table.insert(welcome, None) {
            log::error!("Failed to seed the welcome file: {}", e);
        }
    }

    /// Read access to the underlying table
    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.table.get(id)
    }

    /// The entries in a folder, or at the root for `None`
    pub fn list(&self, parent: Option<&EntryId>) -> Vec<&Entry> {
        self.table.children_of(parent)
    }

    /// All entries in store order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.table.iter()
    }

    pub fn path_of(&self, id: &EntryId) -> Option<String> {
        self.table.path_of(id)
    }

    /// Resolve an absolute path. `Ok(None)` is the root.
    pub fn resolve(&self, path: &str) -> Result<Option<EntryId>, Error> {
        self.table.resolve(path)
    }

    /// Create a file under `parent`, or at the root for `None`
    pub fn create_file(
        &mut self,
        name: &str,
        content: &str,
        parent: Option<&EntryId>,
    ) -> Result<Entry, Error> {
        let file = Entry::file(
            EntryId::generate(EntryKind::File),
            name,
            Some(content.to_string()),
        );
        self.insert(file, parent)
    }

    /// Create a folder under `parent`, or at the root for `None`
    pub fn create_folder(&mut self, name: &str, parent: Option<&EntryId>) -> Result<Entry, Error> {
        let folder = Entry::folder(EntryId::generate(EntryKind::Folder), name);
        self.insert(folder, parent)
    }

    /// Merge a partial update into an entry.
    /// Returns `false` for an unknown id or content on a folder.
    pub fn update_file(&mut self, id: &EntryId, patch: EntryPatch) -> bool {
        match self.try_update_file(id, patch) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Update rejected: {}", e);
                false
            }
        }
    }

    pub fn try_update_file(&mut self, id: &EntryId, patch: EntryPatch) -> Result<(), Error> {
        let entry = self
            .table
            .get_mut(id)
            .ok_or_else(|| Error::NoSuchEntry(id.clone()))?;
        if patch.content.is_some() && entry.is_folder() {
            return Err(Error::NotAFile(id.clone()));
        }

        if let Some(name) = patch.name {
            entry.name = name;
        }
        if let Some(content) = patch.content {
            entry.set_content(content);
        }
        entry.touch();
        Ok(())
    }

    /// Delete an entry and, for folders, everything inside it.
    /// Returns `false` if the id is unknown, so a second delete is a no-op.
    pub fn delete(&mut self, id: &EntryId) -> bool {
        match self.table.remove(id) {
            Some(removed) => {
                log::debug!("Deleted {} ({} entries)", id, removed.len());
                true
            }
            None => false,
        }
    }

    /// Move an entry into a folder, or to the root for `None`.
    /// Returns `false` if the move was rejected.
    pub fn move_entry(&mut self, id: &EntryId, parent: Option<&EntryId>) -> bool {
        match self.try_move(id, parent) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Move rejected: {}", e);
                false
            }
        }
    }

    pub fn try_move(&mut self, id: &EntryId, parent: Option<&EntryId>) -> Result<(), Error> {
        self.table.reparent(id, parent)?;
        if let Some(entry) = self.table.get_mut(id) {
            entry.touch();
        }
        Ok(())
    }

    /// Rename an entry. Its icon follows the new extension.
    pub fn rename(&mut self, id: &EntryId, name: &str) -> bool {
        self.update_file(
            id,
            EntryPatch {
                name: Some(name.to_string()),
                content: None,
            },
        )
    }

    /// Copy a file or a whole folder into `parent` with fresh ids.
    /// Returns the id of the new top level entry.
    pub fn copy(&mut self, id: &EntryId, parent: Option<&EntryId>) -> Result<EntryId, Error> {
        let source = self
            .table
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NoSuchEntry(id.clone()))?;
        if let Some(target) = parent {
            if target == id || self.table.descendants(id).contains(target) {
                return Err(Error::WouldCreateCycle {
                    entry: id.clone(),
                    target: target.clone(),
                });
            }
        }

        let mut copy = source.clone();
        copy.id = EntryId::generate(source.kind());
        copy.parent = None;
        copy.touch();
        if let Some(children) = copy.children_mut() {
            children.clear();
        }
        let copy_id = copy.id.clone();
        self.table.insert(copy, parent)?;

        for child in source.children() {
            self.copy(child, Some(&copy_id))?;
        }
        Ok(copy_id)
    }

    /// Upload a browser file into `parent`.
    /// The size is checked before anything is read.
    pub async fn upload_file<S: UploadSource>(
        &mut self,
        source: &S,
        parent: Option<&EntryId>,
    ) -> Result<Entry, Error> {
        upload::check_size(&source.name(), source.size())?;
        let content = source.read_text().await?;
        self.finish_upload(source, content, parent)
    }

    /// Store the content of an upload that has already been size checked and read.
    /// Split out so callers that cannot hold the file system across the read can finish later.
    pub fn finish_upload<S: UploadSource>(
        &mut self,
        source: &S,
        content: String,
        parent: Option<&EntryId>,
    ) -> Result<Entry, Error> {
        let mut file = Entry::file(
            EntryId::generate(EntryKind::File),
            &source.name(),
            Some(content),
        );
        if let Node::File { metadata, .. } = &mut file.node {
            *metadata = Some(source.metadata());
        }
        file.size = source.size();
        self.insert(file, parent)
    }

    /// The payload for saving a file through the browser
    pub fn download(&self, id: &EntryId) -> Option<Download> {
        let entry = self.table.get(id)?;
        if entry.is_folder() {
            return None;
        }
        Some(Download {
            name: entry.name.clone(),
            mime_type: "text/plain".to_string(),
            bytes: entry.content().unwrap_or_default().as_bytes().to_vec(),
        })
    }

    /// Trigger a browser save of a file
    pub fn download_file(&self, id: &EntryId) {
        let Some(download) = self.download(id) else {
            return;
        };
        if let Err(e) = download.save() {
            log::error!("Failed to download {}: {}", id, e);
        }
    }

    /// Case insensitive substring search over names and file content, in store order
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let query = query.to_lowercase();
        self.table
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&query)
                    || entry
                        .content()
                        .map(|c| c.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            total_files: 0,
            total_folders: 0,
            total_size: 0,
            last_modified: None,
        };
        for entry in self.table.iter() {
            if entry.is_folder() {
                stats.total_folders += 1;
            } else {
                stats.total_files += 1;
                stats.total_size += entry.size;
            }
            stats.last_modified = stats.last_modified.max(Some(entry.modified));
        }
        stats
    }

    /// The text content of a previewable file
    pub fn preview(&self, id: &EntryId) -> Option<&str> {
        let entry = self.table.get(id)?;
        if entry.is_folder() || !icon::is_previewable(&entry.name) {
            return None;
        }
        entry.content()
    }

    /// Serialize the whole tree as a json document
    pub fn export(&self) -> Result<String, Error> {
        let entries: Vec<&Entry> = self.table.iter().collect();
        serde_json::to_string_pretty(&entries).map_err(|e| Error::Malformed(e.to_string()))
    }

    /// Replace the whole tree with a json document.
    /// Malformed or inconsistent documents are rejected and the current tree is kept.
    pub fn import(&mut self, json: &str) -> bool {
        match Self::parse(json) {
            Ok(table) => {
                self.table = table;
                true
            }
            Err(e) => {
                log::warn!("Failed to import file system: {}", e);
                false
            }
        }
    }

    fn parse(json: &str) -> Result<EntryTable, Error> {
        let entries: Vec<Entry> =
            serde_json::from_str(json).map_err(|e| Error::Malformed(e.to_string()))?;
        EntryTable::from_entries(entries)
    }

    fn insert(&mut self, entry: Entry, parent: Option<&EntryId>) -> Result<Entry, Error> {
        let id = entry.id.clone();
        self.table.insert(entry, parent)?;
        if let Some(parent_id) = parent {
            if let Some(parent) = self.table.get_mut(parent_id) {
                parent.touch();
            }
        }
        self.table
            .get(&id)
            .cloned()
            .ok_or(Error::NoSuchEntry(id))
    }
}
