//! Blob object
//!
//! Blobs store one file's content at one version. On disk a blob is the raw
//! bytes with no framing, so its id is simply the digest of the file content.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use bytes::Bytes;
use derive_new::new;

/// File content snapshot
///
/// Immutable once written; identical contents share one blob.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// View the content as text, line endings preserved
    ///
    /// Non-UTF-8 bytes are replaced; the diff and merge engines treat such
    /// files as opaque single-line documents.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(content: Bytes) -> anyhow::Result<Self> {
        Ok(Self::new(content))
    }
}

impl Object for Blob {
    fn digest_input(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}
