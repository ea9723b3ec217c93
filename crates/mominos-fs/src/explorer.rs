use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{
    entry::{Entry, EntryId},
    error::Error,
    upload::UploadSource,
    FileSystem,
};

/// How the explorer lays out the listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// The state of one file explorer window.
/// The explorer never touches the tree itself, every change goes through the [`FileSystem`].
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    current: Option<EntryId>,
    filter: String,
    view: ViewMode,
    selection: HashSet<EntryId>,
    dragged: Option<EntryId>,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the explorer in a folder, `None` being the root
    pub fn at(current: Option<EntryId>) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }

    /// The folder being shown. Falls back to the root if it no longer exists.
    pub fn current<'a>(&'a self, fs: &FileSystem) -> Option<&'a EntryId> {
        self.current
            .as_ref()
            .filter(|id| fs.get(id).map(|e| e.is_folder()).unwrap_or(false))
    }

    /// The displayed path of the current folder
    pub fn location(&self, fs: &FileSystem) -> String {
        self.current(fs)
            .and_then(|id| fs.path_of(id))
            .unwrap_or_else(|| "/".to_string())
    }

    /// The entries of the current folder whose names match the filter
    pub fn listing<'a>(&self, fs: &'a FileSystem) -> Vec<&'a Entry> {
        let filter = self.filter.to_lowercase();
        fs.list(self.current(fs))
            .into_iter()
            .filter(|entry| entry.name().to_lowercase().contains(&filter))
            .collect()
    }

    /// Navigate into a folder. Files and unknown ids are ignored.
    pub fn open(&mut self, fs: &FileSystem, id: &EntryId) -> bool {
        if !fs.get(id).map(|e| e.is_folder()).unwrap_or(false) {
            return false;
        }
        self.current = Some(id.clone());
        self.filter.clear();
        self.selection.clear();
        true
    }

    /// Go up to the parent of the current folder
    pub fn back(&mut self, fs: &FileSystem) {
        self.current = self
            .current(fs)
            .and_then(|id| fs.get(id))
            .and_then(|entry| entry.parent().cloned());
        self.selection.clear();
    }

    /// Go to the root
    pub fn home(&mut self) {
        self.current = None;
        self.filter.clear();
        self.selection.clear();
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        };
    }

    /// Toggle an entry in the selection
    pub fn select(&mut self, id: &EntryId) {
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
    }

    pub fn is_selected(&self, id: &EntryId) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> impl Iterator<Item = &EntryId> {
        self.selection.iter()
    }

    /// Create a folder named "New Folder" in the current folder
    pub fn new_folder(&self, fs: &mut FileSystem) -> Result<Entry, Error> {
        let current = self.current(fs).cloned();
        fs.create_folder("New Folder", current.as_ref())
    }

    /// Upload a file into the current folder
    pub async fn upload<S: UploadSource>(
        &self,
        fs: &mut FileSystem,
        source: &S,
    ) -> Result<Entry, Error> {
        let current = self.current(fs).cloned();
        fs.upload_file(source, current.as_ref()).await
    }

    /// Delete every selected entry. Returns how many were deleted.
    pub fn delete_selection(&mut self, fs: &mut FileSystem) -> usize {
        let deleted = self
            .selection
            .drain()
            .filter(|id| fs.delete(id))
            .count();
        if self.current(fs).is_none() {
            self.current = None;
        }
        deleted
    }

    /// Copy every selected entry into the current folder
    pub fn copy_selection(&self, fs: &mut FileSystem) -> Vec<EntryId> {
        let current = self.current(fs).cloned();
        self.selection
            .iter()
            .filter_map(|id| match fs.copy(id, current.as_ref()) {
                Ok(copy) => Some(copy),
                Err(e) => {
                    log::warn!("Failed to copy {}: {}", id, e);
                    None
                }
            })
            .collect()
    }

    /// Start dragging an entry
    pub fn begin_drag(&mut self, id: &EntryId) {
        self.dragged = Some(id.clone());
    }

    pub fn dragged(&self) -> Option<&EntryId> {
        self.dragged.as_ref()
    }

    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    /// Drop the dragged entry onto a target folder, `None` being the root.
    /// Dropping onto a file is rejected and leaves the tree unchanged.
    /// The re-link happens in one call into the file system, so no caller ever sees a half moved entry.
    pub fn drop_onto(&mut self, fs: &mut FileSystem, target: Option<&EntryId>) -> Result<(), Error> {
        let Some(dragged) = self.dragged.take() else {
            return Ok(());
        };
        fs.try_move(&dragged, target).map_err(|e| {
            log::warn!("Rejected drop of {}: {}", dragged, e);
            e
        })
    }
}
