use crate::areas::repository::Repository;
use crate::artifacts::checkout::Migration;
use crate::artifacts::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Reconcile the working tree to a branch tip and move HEAD there
    ///
    /// Staged changes block the switch: the index would otherwise be
    /// committed onto the wrong branch. Unstaged working-tree edits are not
    /// checked and will be overwritten silently.
    pub fn checkout(&self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialised()?;

        let index = self.load_index()?;
        if !index.is_empty() {
            return Err(RepoError::DirtyIndex.into());
        }

        let mut branches = self.refs().load_branches()?;
        let Some(target_oid) = branches.get(target).cloned() else {
            return Err(RepoError::UnknownBranch(target.to_string()).into());
        };

        let head = self.refs().read_head()?;
        let from_files = self.snapshot(head.oid.as_ref())?;
        let to_files = self.snapshot(target_oid.as_ref())?;

        Migration::between(&from_files, &to_files).apply(self.workspace(), self.database())?;

        self.refs().advance_head(&mut branches, target, target_oid)?;

        writeln!(self.writer(), "Switched to branch '{}'.", target)?;

        Ok(())
    }
}
