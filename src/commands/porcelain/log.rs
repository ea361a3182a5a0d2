use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Walk parent links from HEAD, newest first
    ///
    /// `max_count` of `None` means the whole chain.
    pub fn log(&self, max_count: Option<usize>) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        self.ensure_initialised()?;

        let head = self.refs().read_head()?;

        let mut entries = Vec::new();
        let mut cursor = head.oid;
        while let Some(oid) = cursor {
            if max_count.is_some_and(|limit| entries.len() >= limit) {
                break;
            }

            let commit = self.database().load_commit(&oid)?;
            cursor = commit.parent().cloned();
            entries.push((oid, commit));
        }

        for (oid, commit) in &entries {
            writeln!(self.writer(), "{}", format!("Commit: {oid}").yellow())?;
            writeln!(self.writer(), "Date: {}", commit.timestamp())?;
            writeln!(self.writer(), "Message: {}", commit.message())?;
            writeln!(self.writer())?;
        }

        Ok(entries)
    }
}
