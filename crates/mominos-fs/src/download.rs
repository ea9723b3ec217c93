use wasm_bindgen::JsCast;
use web_sys::{
    js_sys::{Array, Uint8Array},
    Blob, BlobPropertyBag, HtmlAnchorElement, Url,
};

use crate::error::Error;

/// The bytes and file name handed to the browser for saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Ask the browser to save the download.
    /// Creates a temporary object url, clicks a hidden anchor pointing at it and revokes it again.
    pub fn save(&self) -> Result<(), Error> {
        let window = web_sys::window()
            .ok_or_else(|| Error::Browser("no window, downloads need the main thread".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Browser("window has no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| Error::Browser("document has no body".into()))?;

        let parts = Array::new();
        parts.push(&Uint8Array::from(self.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(&self.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| Error::Browser(format!("{:?}", e)))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| Error::Browser(format!("{:?}", e)))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| Error::Browser(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| Error::Browser("created element is not an anchor".into()))?;
        anchor.set_href(&url);
        anchor.set_download(&self.name);

        let result = body
            .append_child(&anchor)
            .and_then(|_| {
                anchor.click();
                body.remove_child(&anchor)
            })
            .map_err(|e| Error::Browser(format!("{:?}", e)));
        let _ = Url::revoke_object_url(&url);
        result.map(|_| ())
    }
}
