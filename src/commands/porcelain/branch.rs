use crate::areas::refs::validate_branch_name;
use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the current HEAD commit
    ///
    /// Branching off an unborn HEAD is allowed; the new branch starts unborn
    /// too, exactly like the default branch after `init`.
    pub fn branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialised()?;
        validate_branch_name(name)?;

        let mut branches = self.refs().load_branches()?;
        if branches.contains_key(name) {
            return Err(RepoError::BranchExists(name.to_string()).into());
        }

        let head = self.refs().read_head()?;
        branches.insert(name.to_string(), head.oid);
        self.refs().save_branches(&branches)?;

        writeln!(self.writer(), "Created branch '{}'.", name)?;

        Ok(())
    }

    /// List all branches, marking the current one with `*`
    pub fn list_branches(&self) -> anyhow::Result<()> {
        self.ensure_initialised()?;

        let branches = self.refs().load_branches()?;
        let head = self.refs().read_head()?;

        writeln!(self.writer(), "Branches:")?;
        for name in branches.keys() {
            if *name == head.branch {
                writeln!(self.writer(), "* {}", name.green())?;
            } else {
                writeln!(self.writer(), "  {}", name)?;
            }
        }

        Ok(())
    }
}
