use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, CommitEntry};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Crystallise the staged snapshot into a new commit
    pub fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialised()?;

        let was_unborn = self.refs().read_head()?.oid.is_none();
        let oid = self.commit_snapshot(message.trim())?;

        let root_marker = if was_unborn { "(root-commit) " } else { "" };
        writeln!(
            self.writer(),
            "[{}{}] {}",
            root_marker,
            oid.to_short_oid(),
            message.trim()
        )?;

        Ok(oid)
    }

    /// The snapshot-commit protocol shared by `commit` and a clean merge
    ///
    /// Staged paths are re-read from the working tree in sorted order, so the
    /// commit records what the files contain now, not what they contained at
    /// `add` time. A staged path that vanished from the working tree is
    /// silently skipped. On success the index is emptied and any MERGE_HEAD
    /// is cleared.
    pub(crate) fn commit_snapshot(&self, message: &str) -> anyhow::Result<ObjectId> {
        let mut index = self.load_index()?;
        if index.is_empty() {
            return Err(RepoError::NothingToCommit.into());
        }

        let mut branches = self.refs().load_branches()?;
        let head = self.refs().read_head()?;
        let timestamp = self.clock().now();

        let mut files = Vec::new();
        for path in index.entries().keys() {
            if !self.workspace().exists(path) {
                continue;
            }

            let blob = Blob::new(self.workspace().read_file(path)?);
            let oid = self.database().store(&blob)?;
            files.push(CommitEntry::new(path.clone(), oid));
        }

        let commit = Commit::new(message.to_string(), timestamp, head.oid.clone(), files);
        let oid = self.database().store(&commit)?;

        self.refs()
            .advance_head(&mut branches, &head.branch, Some(oid.clone()))?;

        index.clear();
        index.save()?;
        self.refs().clear_merge_head()?;

        Ok(oid)
    }
}
