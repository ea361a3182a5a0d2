use crate::areas::refs::{Branches, DEFAULT_BRANCH, Head};
use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Create the `.minigit` layout with an unborn default branch
    pub fn init(&self) -> anyhow::Result<()> {
        if self.is_initialised() {
            return Err(RepoError::AlreadyInitialised.into());
        }

        std::fs::create_dir_all(self.database().objects_path())
            .context("failed to create objects directory")?;
        std::fs::create_dir_all(self.minigit_path().join("refs"))
            .context("failed to create refs directory")?;

        let mut branches = Branches::new();
        branches.insert(DEFAULT_BRANCH.to_string(), None);
        self.refs().save_branches(&branches)?;
        self.refs().write_head(&Head::new(DEFAULT_BRANCH.to_string(), None))?;

        std::fs::write(self.index_path(), "").context("failed to create index file")?;

        writeln!(self.writer(), "Initialized empty minigit repository.")?;

        Ok(())
    }
}
