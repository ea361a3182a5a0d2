//! Content-derived object identifier
//!
//! Object ids are 40-character hexadecimal strings, the SHA-1 digest of the
//! object's digest input. Equal ids imply equal content. Blobs and commits
//! share the same id space and live side by side in the object store.

use crate::artifacts::objects::OBJECT_ID_LENGTH;

/// Identifier of a blob or commit
///
/// A validated 40-character hexadecimal string. States stored on disk as an
/// empty string (root parent, unborn branch) are `Option<ObjectId>` in
/// memory; the empty form only ever appears in the files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object id length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object id characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Parse an optional id from its on-disk form, where empty means absent
    ///
    /// Refs and commit parents serialise "no commit" as an empty payload.
    pub fn parse_opt(raw: &str) -> anyhow::Result<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Self::try_parse(raw.to_string())?))
        }
    }

    /// Render an optional id in its on-disk form, where absent means empty
    pub fn display_opt(oid: Option<&ObjectId>) -> &str {
        oid.map(|oid| oid.as_ref()).unwrap_or("")
    }

    /// Get the abbreviated form of the object id
    ///
    /// # Returns
    ///
    /// First 7 characters of the digest
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
