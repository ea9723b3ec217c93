use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{icon::IconCategory, time::Timestamp};

/// The id of an entry in the tree.
/// Generated ids carry a `file-`/`folder-` prefix, seeded ids are fixed strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate a fresh id for an entry of the kind
    pub fn generate(kind: EntryKind) -> Self {
        Self(format!("{}-{}", kind.prefix(), Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Whether an entry is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// What the browser told us about an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub original_name: String,
    pub mime_type: String,
    pub last_modified: Timestamp,
}

/// The kind specific part of an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<UploadMetadata>,
    },
    Folder {
        #[serde(default)]
        children: Vec<EntryId>,
    },
}

/// A file or folder in the tree.
/// Links are only changed through [`crate::table::EntryTable`], which keeps
/// `parent` and the parent's `children` in agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub(crate) id: EntryId,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) size: u64,
    pub(crate) modified: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) parent: Option<EntryId>,
    #[serde(flatten)]
    pub(crate) node: Node,
}

impl Entry {
    pub(crate) fn file(id: EntryId, name: &str, content: Option<String>) -> Self {
        Self {
            id,
            name: name.to_string(),
            size: content.as_ref().map(|c| c.len() as u64).unwrap_or(0),
            modified: Timestamp::now(),
            parent: None,
            node: Node::File {
                content,
                metadata: None,
            },
        }
    }

    pub(crate) fn folder(id: EntryId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            size: 0,
            modified: Timestamp::now(),
            parent: None,
            node: Node::Folder {
                children: Vec::new(),
            },
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        match self.node {
            Node::File { .. } => EntryKind::File,
            Node::Folder { .. } => EntryKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == EntryKind::Folder
    }

    /// Byte length of the content. Always zero for folders.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> Timestamp {
        self.modified
    }

    pub fn parent(&self) -> Option<&EntryId> {
        self.parent.as_ref()
    }

    /// The ordered child ids. Empty for files.
    pub fn children(&self) -> &[EntryId] {
        match &self.node {
            Node::Folder { children } => children,
            Node::File { .. } => &[],
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.node {
            Node::File { content, .. } => content.as_deref(),
            Node::Folder { .. } => None,
        }
    }

    pub fn metadata(&self) -> Option<&UploadMetadata> {
        match &self.node {
            Node::File { metadata, .. } => metadata.as_ref(),
            Node::Folder { .. } => None,
        }
    }

    pub fn category(&self) -> IconCategory {
        match self.node {
            Node::Folder { .. } => IconCategory::Folder,
            Node::File { .. } => IconCategory::for_file(&self.name),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<EntryId>> {
        match &mut self.node {
            Node::Folder { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub(crate) fn set_content(&mut self, new_content: String) -> bool {
        let Node::File { content, .. } = &mut self.node else {
            return false;
        };
        self.size = new_content.len() as u64;
        *content = Some(new_content);
        true
    }

    pub(crate) fn touch(&mut self) {
        self.modified = Timestamp::now();
    }
}
