//! Object-URL preview references.
//!
//! Implements the staging list's resource traits on top of the browser:
//! previews are `blob:` URLs created with `URL.createObjectURL`, letting
//! the grid render image bytes without re-reading the file, and revoked
//! with `URL.revokeObjectURL` when the entry is removed or the page
//! session is torn down.

use web_sys::{File, Url};

use crate::staging::{PreviewStore, StagingList, UploadFile};

/// The staging list as instantiated by the page.
pub type WebStagingList = StagingList<File, ObjectUrlStore>;

impl UploadFile for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Preview references backed by the browser's object-URL registry.
#[derive(Debug, Default)]
pub struct ObjectUrlStore;

impl PreviewStore<File> for ObjectUrlStore {
    fn acquire(&self, file: &File) -> Option<String> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Could not create preview URL for {}: {:?}", file.name(), e);
                None
            }
        }
    }

    fn release(&self, url: &str) {
        // Revoking an unknown or already-revoked URL is a browser no-op.
        let _ = Url::revoke_object_url(url);
    }
}
