//! Commit object
//!
//! A commit is an immutable snapshot record: a single-line message, a local
//! timestamp, one parent id (absent for the root commit) and the full list of
//! (path, blob-id) entries making up the snapshot. Paths are flat relative
//! filenames; there are no trees.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! message:<message>
//! timestamp:<YYYY-MM-DD HH:MM:SS>
//! parent:<parent-oid or empty>
//! files:<path1>:<oid1>,<path2>:<oid2>,...
//! ```
//!
//! The id is derived from `message ∥ timestamp ∥ parent ∥ oid1 ∥ ... ∥ oidN`
//! in file-list order, so it is reproducible without re-reading any blob.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;

/// One (path, blob) pair in a commit's snapshot
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitEntry {
    pub path: String,
    pub oid: ObjectId,
}

/// Snapshot record
///
/// Merge commits record only the pre-merge HEAD as their parent; the branch
/// that was merged in is observable through MERGE_HEAD while the merge is
/// unresolved, and nowhere afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    message: String,
    timestamp: String,
    parent: Option<ObjectId>,
    files: Vec<CommitEntry>,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `message` - single-line commit message
    /// * `timestamp` - formatted local time (`YYYY-MM-DD HH:MM:SS`)
    /// * `parent` - parent commit id, `None` for the root commit
    /// * `files` - snapshot entries in the order the index produced them
    pub fn new(
        message: String,
        timestamp: String,
        parent: Option<ObjectId>,
        files: Vec<CommitEntry>,
    ) -> Self {
        Commit {
            message,
            timestamp,
            parent,
            files,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn files(&self) -> &[CommitEntry] {
        &self.files
    }

    /// The snapshot as a path-keyed map, the shape checkout and merge consume
    pub fn file_map(&self) -> BTreeMap<String, ObjectId> {
        self.files
            .iter()
            .map(|entry| (entry.path.clone(), entry.oid.clone()))
            .collect()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let files = self
            .files
            .iter()
            .map(|entry| format!("{}:{}", entry.path, entry.oid))
            .collect::<Vec<_>>()
            .join(",");

        let content = format!(
            "message:{}\ntimestamp:{}\nparent:{}\nfiles:{}\n",
            self.message,
            self.timestamp,
            ObjectId::display_opt(self.parent.as_ref()),
            files,
        );

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(content: Bytes) -> anyhow::Result<Self> {
        let content = String::from_utf8(content.to_vec())
            .context("commit object is not valid UTF-8")?;

        let mut message = String::new();
        let mut timestamp = String::new();
        let mut parent = None;
        let mut files = Vec::new();

        for line in content.lines() {
            if let Some(value) = line.strip_prefix("message:") {
                message = value.to_string();
            } else if let Some(value) = line.strip_prefix("timestamp:") {
                timestamp = value.to_string();
            } else if let Some(value) = line.strip_prefix("parent:") {
                parent = ObjectId::parse_opt(value)?;
            } else if let Some(value) = line.strip_prefix("files:") {
                for entry in value.split(',').filter(|entry| !entry.is_empty()) {
                    // the oid is the fixed-width suffix, so split on the last colon
                    let Some((path, oid)) = entry.rsplit_once(':') else {
                        continue;
                    };
                    files.push(CommitEntry::new(
                        path.to_string(),
                        ObjectId::try_parse(oid.to_string())?,
                    ));
                }
            }
        }

        Ok(Self::new(message, timestamp, parent, files))
    }
}

impl Object for Commit {
    fn digest_input(&self) -> anyhow::Result<Bytes> {
        let mut input = String::new();
        input.push_str(&self.message);
        input.push_str(&self.timestamp);
        input.push_str(ObjectId::display_opt(self.parent.as_ref()));
        for entry in &self.files {
            input.push_str(entry.oid.as_ref());
        }

        Ok(Bytes::from(input))
    }
}
