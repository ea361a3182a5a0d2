//! Working-tree reconciliation
//!
//! A checkout (and the materialising half of a fast-forward) is planned as a
//! `Migration`: the set of paths to delete and the set of blobs to write.
//! Planning is pure; applying touches the filesystem.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Plan for moving the working tree from one snapshot to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    deletions: Vec<String>,
    writes: Vec<(String, ObjectId)>,
}

impl Migration {
    /// Plan the reconciliation between two snapshots
    ///
    /// Every path of the target snapshot is (re)written, so a path present
    /// in both with different content ends up overwritten.
    pub fn between(
        from: &BTreeMap<String, ObjectId>,
        to: &BTreeMap<String, ObjectId>,
    ) -> Self {
        let deletions = from
            .keys()
            .filter(|path| !to.contains_key(*path))
            .cloned()
            .collect::<Vec<_>>();

        let writes = to
            .iter()
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect::<Vec<_>>();

        Migration { deletions, writes }
    }

    pub fn deletions(&self) -> &[String] {
        &self.deletions
    }

    pub fn writes(&self) -> &[(String, ObjectId)] {
        &self.writes
    }

    /// Apply the plan to the working tree
    ///
    /// Deletions run before writes; there is no rollback if a step fails
    /// partway.
    pub fn apply(&self, workspace: &Workspace, database: &Database) -> anyhow::Result<()> {
        for path in &self.deletions {
            workspace.remove_file(path)?;
        }

        for (path, oid) in &self.writes {
            let blob = database.load_blob(oid)?;
            workspace.write_file(path, blob.content())?;
        }

        Ok(())
    }
}
