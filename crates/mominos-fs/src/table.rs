use hashbrown::{HashMap, HashSet};

use crate::{
    entry::{Entry, EntryId},
    error::Error,
    util::normalize_path,
};

/// The table that stores every entry and the links between them.
/// Entries are indexed by id, `order` keeps insertion order for listing and export.
#[derive(Debug, Clone, Default)]
pub struct EntryTable {
    entries: HashMap<EntryId, Entry>,
    order: Vec<EntryId>,
}

impl EntryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a flat list of entries.
    /// Fails if any link between the entries is inconsistent.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, Error> {
        let mut table = Self::new();
        for entry in entries {
            if table.entries.contains_key(&entry.id) {
                return Err(Error::DuplicateId(entry.id));
            }
            table.order.push(entry.id.clone());
            table.entries.insert(entry.id.clone(), entry);
        }
        table.validate()?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &EntryId) -> Option<&mut Entry> {
        self.entries.get_mut(id)
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// The entries directly inside a folder, or at the root for `None`
    pub fn children_of(&self, parent: Option<&EntryId>) -> Vec<&Entry> {
        match parent {
            Some(parent) => self
                .entries
                .get(parent)
                .map(|folder| {
                    folder
                        .children()
                        .iter()
                        .filter_map(|id| self.entries.get(id))
                        .collect()
                })
                .unwrap_or_default(),
            None => self.iter().filter(|e| e.parent.is_none()).collect(),
        }
    }

    /// Find an entry by name directly inside a folder or the root
    pub fn find_child(&self, parent: Option<&EntryId>, name: &str) -> Option<&Entry> {
        self.children_of(parent)
            .into_iter()
            .find(|entry| entry.name == name)
    }

    /// Insert a new entry under `parent` and link it into the parent's children
    pub fn insert(&mut self, mut entry: Entry, parent: Option<&EntryId>) -> Result<(), Error> {
        if self.entries.contains_key(&entry.id) {
            return Err(Error::DuplicateId(entry.id));
        }
        if let Some(parent_id) = parent {
            self.folder(parent_id)?;
        }

        entry.parent = parent.cloned();
        let id = entry.id.clone();
        self.entries.insert(id.clone(), entry);
        self.order.push(id.clone());

        if let Some(children) = parent
            .and_then(|p| self.entries.get_mut(p))
            .and_then(|p| p.children_mut())
        {
            children.push(id);
        }
        Ok(())
    }

    /// Every entry below `id`, depth first. Does not include `id` itself.
    pub fn descendants(&self, id: &EntryId) -> Vec<EntryId> {
        let mut found = Vec::new();
        let mut stack: Vec<EntryId> = self
            .entries
            .get(id)
            .map(|e| e.children().iter().rev().cloned().collect())
            .unwrap_or_default();

        while let Some(next) = stack.pop() {
            if let Some(entry) = self.entries.get(&next) {
                stack.extend(entry.children().iter().rev().cloned());
            }
            found.push(next);
        }
        found
    }

    /// Remove an entry together with everything below it and unlink it from its parent.
    /// Returns the removed entries, or `None` if the id is unknown.
    pub fn remove(&mut self, id: &EntryId) -> Option<Vec<Entry>> {
        let parent = self.entries.get(id)?.parent.clone();

        let mut doomed = vec![id.clone()];
        doomed.extend(self.descendants(id));

        if let Some(children) = parent
            .as_ref()
            .and_then(|p| self.entries.get_mut(p))
            .and_then(|p| p.children_mut())
        {
            children.retain(|child| child != id);
        }

        let doomed_set: HashSet<&EntryId> = doomed.iter().collect();
        self.order.retain(|entry| !doomed_set.contains(entry));

        Some(
            doomed
                .iter()
                .filter_map(|doomed_id| self.entries.remove(doomed_id))
                .collect(),
        )
    }

    /// Move an entry under a new parent, or to the root for `None`.
    /// All checks happen before the first link is touched, so a failed move leaves the table as it was.
    pub fn reparent(&mut self, id: &EntryId, target: Option<&EntryId>) -> Result<(), Error> {
        let old_parent = self
            .entries
            .get(id)
            .ok_or_else(|| Error::NoSuchEntry(id.clone()))?
            .parent
            .clone();

        if let Some(target_id) = target {
            self.folder(target_id)?;
            if target_id == id || self.descendants(id).contains(target_id) {
                return Err(Error::WouldCreateCycle {
                    entry: id.clone(),
                    target: target_id.clone(),
                });
            }
        }

        if let Some(children) = old_parent
            .as_ref()
            .and_then(|p| self.entries.get_mut(p))
            .and_then(|p| p.children_mut())
        {
            children.retain(|child| child != id);
        }
        if let Some(children) = target
            .and_then(|t| self.entries.get_mut(t))
            .and_then(|t| t.children_mut())
        {
            children.push(id.clone());
        }
        if let Some(entry) = self.entries.get_mut(id) {
            entry.parent = target.cloned();
        }
        Ok(())
    }

    /// Render the absolute path of an entry, e.g. `/Documents/notes.txt`
    pub fn path_of(&self, id: &EntryId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = self.entries.get(id)?;
        loop {
            names.push(current.name.as_str());
            // A well formed table can never be deeper than its size
            if names.len() > self.entries.len() {
                return None;
            }
            match &current.parent {
                Some(parent) => current = self.entries.get(parent)?,
                None => break,
            }
        }
        names.reverse();
        Some(format!("/{}", names.join("/")))
    }

    /// Resolve an absolute path by walking names from the root.
    /// `Ok(None)` is the root itself.
    pub fn resolve(&self, path: &str) -> Result<Option<EntryId>, Error> {
        let normalized = normalize_path(path);
        let mut current: Option<EntryId> = None;
        for part in normalized.split('/').filter(|p| !p.is_empty()) {
            // files have no children, so walking through one fails here too
            let Some(child) = self.find_child(current.as_ref(), part) else {
                return Err(Error::NoSuchPath(normalized.clone()));
            };
            current = Some(child.id.clone());
        }
        Ok(current)
    }

    /// Check that every `parent` link is mirrored by the parent's `children` and vice versa,
    /// and that following parents always reaches the root.
    pub fn validate(&self) -> Result<(), Error> {
        for entry in self.entries.values() {
            if let Some(parent_id) = &entry.parent {
                let parent = self.entries.get(parent_id).ok_or_else(|| Error::BrokenLink {
                    entry: entry.id.clone(),
                    link: parent_id.clone(),
                })?;
                if !parent.is_folder() {
                    return Err(Error::NotAFolder(parent_id.clone()));
                }
                if !parent.children().contains(&entry.id) {
                    return Err(Error::BrokenLink {
                        entry: entry.id.clone(),
                        link: parent_id.clone(),
                    });
                }
            }

            let mut seen = HashSet::new();
            for child_id in entry.children() {
                let linked_back = self
                    .entries
                    .get(child_id)
                    .map(|child| child.parent.as_ref() == Some(&entry.id))
                    .unwrap_or(false);
                if !linked_back || !seen.insert(child_id) {
                    return Err(Error::BrokenLink {
                        entry: entry.id.clone(),
                        link: child_id.clone(),
                    });
                }
            }
        }

        for entry in self.entries.values() {
            if self.path_of(&entry.id).is_none() {
                return Err(Error::WouldCreateCycle {
                    entry: entry.id.clone(),
                    target: entry.parent.clone().unwrap_or_else(|| entry.id.clone()),
                });
            }
        }
        Ok(())
    }

    /// Look up an entry that must be a folder
    fn folder(&self, id: &EntryId) -> Result<&Entry, Error> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| Error::NoSuchEntry(id.clone()))?;
        if !entry.is_folder() {
            return Err(Error::NotAFolder(id.clone()));
        }
        Ok(entry)
    }
}
