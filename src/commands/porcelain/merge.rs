use crate::areas::refs::{Branches, Head, MergeHead};
use crate::areas::repository::Repository;
use crate::artifacts::checkout::Migration;
use crate::artifacts::errors::RepoError;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::ancestry::Ancestry;
use crate::artifacts::merge::three_way::{Resolution, conflict_markers, merge_snapshots};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Combine another branch into the current one
    ///
    /// Fast-forwards when the histories have not diverged; otherwise runs a
    /// three-way merge against the nearest common ancestor. A conflicted
    /// merge leaves marker files and MERGE_HEAD behind instead of a commit.
    pub fn merge(&self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        self.ensure_initialised()?;

        let mut branches = self.refs().load_branches()?;
        let Some(theirs_tip) = branches.get(branch_name).cloned() else {
            return Err(RepoError::UnknownBranch(branch_name.to_string()).into());
        };
        let head = self.refs().read_head()?;
        if branch_name == head.branch {
            return Err(RepoError::SelfMerge.into());
        }
        if !self.load_index()?.is_empty() {
            return Err(RepoError::DirtyIndex.into());
        }

        let outcome = match (head.oid.clone(), theirs_tip) {
            // neither side has commits, or there is nothing to bring in
            (_, None) => MergeOutcome::NothingToMerge,
            (None, Some(theirs)) => self.fast_forward(&mut branches, &head, theirs)?,
            (Some(ours), Some(theirs)) => {
                let ancestry = Ancestry::new(|oid: &ObjectId| self.database().load_parent(oid));

                if ancestry.is_ancestor(&ours, &theirs)? {
                    MergeOutcome::AlreadyUpToDate
                } else if ancestry.is_ancestor(&theirs, &ours)? {
                    self.fast_forward(&mut branches, &head, theirs)?
                } else {
                    let Some(base) = ancestry.nearest_common_ancestor(&ours, &theirs)? else {
                        return Err(RepoError::UnrelatedHistories.into());
                    };

                    self.three_way_merge(branch_name, &base, &ours, &theirs)?
                }
            }
        };

        self.report_outcome(branch_name, &outcome)?;

        Ok(outcome)
    }

    /// Advance the current branch and HEAD to the target tip and materialise
    /// its file set, checkout-style
    fn fast_forward(
        &self,
        branches: &mut Branches,
        head: &Head,
        theirs: ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let from_files = self.snapshot(head.oid.as_ref())?;
        let to_files = self.snapshot(Some(&theirs))?;

        Migration::between(&from_files, &to_files).apply(self.workspace(), self.database())?;
        self.refs()
            .advance_head(branches, &head.branch, Some(theirs.clone()))?;

        Ok(MergeOutcome::FastForward(theirs))
    }

    /// Resolve every path against the common ancestor and either auto-commit
    /// the result or persist the conflict state
    fn three_way_merge(
        &self,
        branch_name: &str,
        base: &ObjectId,
        ours: &ObjectId,
        theirs: &ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let base_files = self.snapshot(Some(base))?;
        let ours_files = self.snapshot(Some(ours))?;
        let theirs_files = self.snapshot(Some(theirs))?;

        let merged = merge_snapshots(&base_files, &ours_files, &theirs_files);

        // materialise every resolution into the working tree
        let mut conflicts = Vec::new();
        for path_merge in &merged {
            match &path_merge.resolution {
                Resolution::Keep(Some(oid)) | Resolution::Take(Some(oid)) => {
                    let blob = self.database().load_blob(oid)?;
                    self.workspace()
                        .write_file(&path_merge.path, blob.content())?;
                }
                Resolution::Keep(None) | Resolution::Take(None) => {
                    self.workspace().remove_file(&path_merge.path)?;
                }
                Resolution::Conflict { ours, theirs } => {
                    let ours_text = self.side_text(ours.as_ref())?;
                    let theirs_text = self.side_text(theirs.as_ref())?;
                    let content = conflict_markers(
                        ours_text.as_deref(),
                        theirs_text.as_deref(),
                        branch_name,
                    );

                    self.workspace()
                        .write_file(&path_merge.path, &Bytes::from(content))?;
                    conflicts.push(path_merge.path.clone());
                }
            }
        }

        // stage whatever survived on disk; the user resolves and commits
        let mut index = self.load_index()?;
        for path_merge in &merged {
            if !self.workspace().exists(&path_merge.path) {
                continue;
            }

            let blob = Blob::new(self.workspace().read_file(&path_merge.path)?);
            let oid = self.database().store(&blob)?;
            index.add(path_merge.path.clone(), oid);
        }
        index.save()?;

        if !conflicts.is_empty() {
            self.refs().write_merge_head(&MergeHead::new(
                branch_name.to_string(),
                ours.clone(),
                theirs.clone(),
            ))?;

            return Ok(MergeOutcome::Conflicted { paths: conflicts });
        }

        let oid = self.commit_snapshot(&format!("Merge branch '{branch_name}'"))?;

        Ok(MergeOutcome::Merged(oid))
    }

    fn side_text(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<String>> {
        match oid {
            Some(oid) => Ok(Some(self.database().load_blob(oid)?.as_text())),
            None => Ok(None),
        }
    }

    fn report_outcome(
        &self,
        branch_name: &str,
        outcome: &MergeOutcome,
    ) -> anyhow::Result<()> {
        match outcome {
            MergeOutcome::AlreadyUpToDate => {
                writeln!(self.writer(), "Already up to date.")?;
            }
            MergeOutcome::NothingToMerge => {
                writeln!(self.writer(), "Nothing to merge.")?;
            }
            MergeOutcome::FastForward(oid) => {
                writeln!(
                    self.writer(),
                    "Fast-forwarded to '{}' at {}.",
                    branch_name,
                    oid.to_short_oid()
                )?;
            }
            MergeOutcome::Merged(oid) => {
                writeln!(
                    self.writer(),
                    "Merge made by the three-way strategy ({}).",
                    oid.to_short_oid()
                )?;
            }
            MergeOutcome::Conflicted { paths } => {
                for path in paths {
                    writeln!(
                        self.writer(),
                        "{}",
                        format!("CONFLICT (content): merge conflict in {path}").red()
                    )?;
                }
                writeln!(
                    self.writer(),
                    "Automatic merge failed; fix conflicts and then commit the result."
                )?;
            }
        }

        Ok(())
    }
}
