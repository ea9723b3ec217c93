use wasm_bindgen_futures::JsFuture;

use crate::{entry::UploadMetadata, error::Error, time::Timestamp};

/// Uploads larger than this are rejected before anything is read
pub const MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024;

/// A file handed to us for upload.
/// In the browser this is a `File` from an `<input type="file">`.
#[allow(async_fn_in_trait)]
pub trait UploadSource {
    fn name(&self) -> String;
    /// Size in bytes as reported before reading
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;
    fn last_modified(&self) -> Timestamp;

    /// Read the whole file as text
    async fn read_text(&self) -> Result<String, Error>;

    fn metadata(&self) -> UploadMetadata {
        UploadMetadata {
            original_name: self.name(),
            mime_type: self.mime_type(),
            last_modified: self.last_modified(),
        }
    }
}

/// Reject files over the size cap
pub fn check_size(name: &str, size: u64) -> Result<(), Error> {
    if size > MAX_UPLOAD_SIZE {
        return Err(Error::FileTooLarge {
            name: name.to_string(),
            size,
            limit: MAX_UPLOAD_SIZE,
        });
    }
    Ok(())
}

impl UploadSource for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn last_modified(&self) -> Timestamp {
        Timestamp::from_millis(web_sys::File::last_modified(self) as u64)
    }

    async fn read_text(&self) -> Result<String, Error> {
        let text = JsFuture::from(self.text())
            .await
            .map_err(|e| Error::ReadFailed(format!("{:?}", e)))?;
        text.as_string()
            .ok_or_else(|| Error::ReadFailed("file content is not text".to_string()))
    }
}

/// An upload held entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryUpload {
    pub name: String,
    pub mime_type: String,
    pub content: String,
    pub last_modified: Timestamp,
    /// Overrides the reported size, for exercising the size cap without allocating it
    pub reported_size: Option<u64>,
}

impl MemoryUpload {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            content: content.to_string(),
            last_modified: Timestamp::now(),
            reported_size: None,
        }
    }
}

impl UploadSource for MemoryUpload {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.reported_size.unwrap_or(self.content.len() as u64)
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn last_modified(&self) -> Timestamp {
        self.last_modified
    }

    async fn read_text(&self) -> Result<String, Error> {
        Ok(self.content.clone())
    }
}
