use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::{FileState, StatusEntry, StatusReport};
use std::io::Write;

impl Repository {
    /// Report the current branch and the state of every staged path
    ///
    /// Each staged path is classified by digesting the working file and
    /// comparing against the blob id recorded at `add` time.
    pub fn status(&self) -> anyhow::Result<StatusReport> {
        self.ensure_initialised()?;

        let head = self.refs().read_head()?;
        let merge_head = self.refs().read_merge_head()?;
        let index = self.load_index()?;

        let mut entries = Vec::new();
        for (path, staged_oid) in index.entries() {
            let state = if !self.workspace().exists(path) {
                FileState::Deleted
            } else {
                let blob = Blob::new(self.workspace().read_file(path)?);
                if blob.object_id()? == *staged_oid {
                    FileState::Staged
                } else {
                    FileState::Modified
                }
            };

            entries.push(StatusEntry::new(path.clone(), state));
        }

        let report = StatusReport::new(
            head.branch,
            merge_head.map(|merge_head| merge_head.branch),
            entries,
        );

        writeln!(self.writer(), "On branch {}", report.branch)?;
        if let Some(branch) = &report.merging {
            writeln!(
                self.writer(),
                "You are still merging branch '{}'; resolve conflicts and commit.",
                branch
            )?;
        }
        if report.is_clean() {
            writeln!(self.writer(), "No files staged for commit.")?;
        } else {
            writeln!(self.writer(), "Files staged for commit:")?;
            for entry in &report.entries {
                writeln!(self.writer(), "  {}  {}", entry.state, entry.path)?;
            }
        }

        Ok(report)
    }
}
