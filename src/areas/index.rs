//! Staging area
//!
//! The index records the paths scheduled for the next commit, together with
//! the blob id each path had when it was staged. Keeping the staged id is
//! what lets status tell "staged" apart from "modified after staging".
//!
//! ## File format
//!
//! One `path:blob-oid` line per entry, sorted by path. Blank and malformed
//! lines are skipped on load and disappear at the next save.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// Staged-path set persisted in `.minigit/index`
#[derive(Debug)]
pub struct Index {
    path: Box<Path>,
    entries: BTreeMap<String, ObjectId>,
}

impl Index {
    /// Load the index, tolerating a missing file and malformed lines
    pub fn load(path: Box<Path>) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read index at {}", path.display()))?;

            for line in content.lines() {
                let line = line.trim();
                let Some((file_path, oid)) = line.rsplit_once(':') else {
                    continue;
                };
                let Ok(oid) = ObjectId::try_parse(oid.to_string()) else {
                    continue;
                };
                entries.insert(file_path.to_string(), oid);
            }
        }

        Ok(Index { path, entries })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let content = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{path}:{oid}\n"))
            .collect::<String>();

        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write index at {}", self.path.display()))?;

        Ok(())
    }

    /// Stage a path; re-adding replaces the staged blob id
    pub fn add(&mut self, path: String, oid: ObjectId) {
        self.entries.insert(path, oid);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Staged entries in sorted path order
    pub fn entries(&self) -> &BTreeMap<String, ObjectId> {
        &self.entries
    }
}
