use crate::areas::repository::Repository;
use crate::artifacts::diff::edit_script::Edit;
use crate::artifacts::diff::unified::UnifiedDiff;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::Write;

/// Which two snapshots the diff compares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffTarget {
    /// Working tree against the staged blobs
    WorkingVsStaged,
    /// Staged blobs against the HEAD snapshot
    StagedVsHead,
    /// Working tree against an arbitrary commit
    WorkingVsCommit(ObjectId),
    /// Two commits against each other
    CommitVsCommit(ObjectId, ObjectId),
}

impl DiffTarget {
    /// Interpret the optional command arguments
    ///
    /// No arguments compares working tree and index; `--staged` (or
    /// `--cached`) compares index and HEAD; one commit id compares the
    /// working tree to it; two ids compare the two commits.
    pub fn parse(opt1: Option<&str>, opt2: Option<&str>) -> anyhow::Result<Self> {
        match (opt1, opt2) {
            (None, _) => Ok(DiffTarget::WorkingVsStaged),
            (Some("--staged") | Some("--cached"), _) => Ok(DiffTarget::StagedVsHead),
            (Some(commit), None) => Ok(DiffTarget::WorkingVsCommit(
                ObjectId::try_parse(commit.to_string())
                    .with_context(|| format!("'{commit}' is not a commit id"))?,
            )),
            (Some(old), Some(new)) => Ok(DiffTarget::CommitVsCommit(
                ObjectId::try_parse(old.to_string())
                    .with_context(|| format!("'{old}' is not a commit id"))?,
                ObjectId::try_parse(new.to_string())
                    .with_context(|| format!("'{new}' is not a commit id"))?,
            )),
        }
    }
}

impl Repository {
    /// Show zero-context unified diffs for every path that changed between
    /// the two selected snapshots
    pub fn diff(
        &self,
        opt1: Option<&str>,
        opt2: Option<&str>,
    ) -> anyhow::Result<Vec<UnifiedDiff>> {
        self.ensure_initialised()?;

        let target = DiffTarget::parse(opt1, opt2)?;
        let pairs = self.content_pairs(&target)?;

        let diffs = pairs
            .into_iter()
            .map(|(path, old_text, new_text)| UnifiedDiff::between(path, &old_text, &new_text))
            .filter(|diff| !diff.is_empty())
            .collect::<Vec<_>>();

        for diff in &diffs {
            writeln!(self.writer(), "{}", diff.header_old().bold())?;
            writeln!(self.writer(), "{}", diff.header_new().bold())?;
            for edit in diff.changes() {
                let line = match edit {
                    Edit::Delete { .. } => edit.as_string().red(),
                    Edit::Insert { .. } => edit.as_string().green(),
                    Edit::Equal { .. } => edit.as_string().normal(),
                };
                writeln!(self.writer(), "{}", line)?;
            }
        }

        Ok(diffs)
    }

    /// Gather (path, old content, new content) for every path the target
    /// shape could have changed
    fn content_pairs(
        &self,
        target: &DiffTarget,
    ) -> anyhow::Result<Vec<(String, String, String)>> {
        let index = self.load_index()?;

        match target {
            DiffTarget::WorkingVsStaged => index
                .entries()
                .iter()
                .map(|(path, staged_oid)| {
                    Ok((
                        path.clone(),
                        self.blob_text(staged_oid)?,
                        self.working_text(path)?,
                    ))
                })
                .collect(),
            DiffTarget::StagedVsHead => {
                let head = self.refs().read_head()?;
                let head_files = self.snapshot(head.oid.as_ref())?;

                index
                    .entries()
                    .iter()
                    .map(|(path, staged_oid)| {
                        let old_text = match head_files.get(path) {
                            Some(oid) => self.blob_text(oid)?,
                            None => String::new(),
                        };
                        Ok((path.clone(), old_text, self.blob_text(staged_oid)?))
                    })
                    .collect()
            }
            DiffTarget::WorkingVsCommit(commit) => {
                let commit_files = self.snapshot(Some(commit))?;
                let paths = commit_files
                    .keys()
                    .chain(index.entries().keys())
                    .cloned()
                    .collect::<BTreeSet<_>>();

                paths
                    .into_iter()
                    .map(|path| {
                        let old_text = match commit_files.get(&path) {
                            Some(oid) => self.blob_text(oid)?,
                            None => String::new(),
                        };
                        let new_text = self.working_text(&path)?;
                        Ok((path, old_text, new_text))
                    })
                    .collect()
            }
            DiffTarget::CommitVsCommit(old_commit, new_commit) => {
                let old_files = self.snapshot(Some(old_commit))?;
                let new_files = self.snapshot(Some(new_commit))?;
                let paths = old_files
                    .keys()
                    .chain(new_files.keys())
                    .cloned()
                    .collect::<BTreeSet<_>>();

                paths
                    .into_iter()
                    .map(|path| {
                        let old_text = match old_files.get(&path) {
                            Some(oid) => self.blob_text(oid)?,
                            None => String::new(),
                        };
                        let new_text = match new_files.get(&path) {
                            Some(oid) => self.blob_text(oid)?,
                            None => String::new(),
                        };
                        Ok((path, old_text, new_text))
                    })
                    .collect()
            }
        }
    }

    fn blob_text(&self, oid: &ObjectId) -> anyhow::Result<String> {
        Ok(self.database().load_blob(oid)?.as_text())
    }

    /// Working-tree content for diffing; a missing file reads as empty
    fn working_text(&self, path: &str) -> anyhow::Result<String> {
        if !self.workspace().exists(path) {
            return Ok(String::new());
        }

        Ok(String::from_utf8_lossy(&self.workspace().read_file(path)?).to_string())
    }
}
