//! Reference management
//!
//! Three files under `.minigit` hold the reference state:
//!
//! - `HEAD`: one `branch:commit-oid` line naming the current position
//! - `refs/branches`: one `name:commit-oid` line per branch
//! - `MERGE_HEAD`: present only while a conflicted merge is unresolved
//!
//! An empty oid payload means "no commits yet". Files are rewritten whole at
//! the granularity of one operation; reads tolerate blank and malformed
//! lines so a torn write degrades instead of wedging the repository.

use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Branch every fresh repository starts on
pub const DEFAULT_BRANCH: &str = "master";

/// Map from branch name to its tip commit (`None` for an unborn branch)
pub type Branches = BTreeMap<String, Option<ObjectId>>;

/// The current position: branch name plus the commit it points at
///
/// The oid is redundant with the branch map entry; every operation that
/// moves HEAD keeps the two consistent.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Head {
    pub branch: String,
    pub oid: Option<ObjectId>,
}

/// Record of an in-progress conflicted merge
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergeHead {
    /// Branch being merged in
    pub branch: String,
    /// HEAD commit at the moment the merge started
    pub ours: ObjectId,
    /// Tip of the branch being merged
    pub theirs: ObjectId,
}

/// Reference file manager rooted at the `.minigit` directory
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join("refs").join("branches")
    }

    pub fn merge_head_path(&self) -> PathBuf {
        self.path.join("MERGE_HEAD")
    }

    pub fn read_head(&self) -> anyhow::Result<Head> {
        let path = self.head_path();
        if !path.exists() {
            return Ok(Head::new(DEFAULT_BRANCH.to_string(), None));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read HEAD at {}", path.display()))?;
        let content = content.trim();

        match content.split_once(':') {
            Some((branch, oid)) if !branch.is_empty() => {
                Ok(Head::new(branch.to_string(), ObjectId::parse_opt(oid)?))
            }
            _ => Ok(Head::new(DEFAULT_BRANCH.to_string(), None)),
        }
    }

    pub fn write_head(&self, head: &Head) -> anyhow::Result<()> {
        let content = format!(
            "{}:{}",
            head.branch,
            ObjectId::display_opt(head.oid.as_ref())
        );

        std::fs::write(self.head_path(), content).context("failed to write HEAD")?;

        Ok(())
    }

    /// Load the branch map, skipping malformed lines
    ///
    /// A fresh or damaged file yields at least the default branch, unborn.
    pub fn load_branches(&self) -> anyhow::Result<Branches> {
        let mut branches = Branches::new();

        let path = self.branches_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read branches at {}", path.display()))?;

            for line in content.lines() {
                let line = line.trim();
                let Some((name, oid)) = line.split_once(':') else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                let Ok(oid) = ObjectId::parse_opt(oid) else {
                    continue;
                };
                branches.insert(name.to_string(), oid);
            }
        }

        if branches.is_empty() {
            branches.insert(DEFAULT_BRANCH.to_string(), None);
        }

        Ok(branches)
    }

    pub fn save_branches(&self, branches: &Branches) -> anyhow::Result<()> {
        let content = branches
            .iter()
            .map(|(name, oid)| format!("{}:{}\n", name, ObjectId::display_opt(oid.as_ref())))
            .collect::<String>();

        std::fs::write(self.branches_path(), content).context("failed to write branches")?;

        Ok(())
    }

    /// Point the named branch and HEAD at a commit, keeping both consistent
    pub fn advance_head(
        &self,
        branches: &mut Branches,
        branch: &str,
        oid: Option<ObjectId>,
    ) -> anyhow::Result<()> {
        branches.insert(branch.to_string(), oid.clone());
        self.save_branches(branches)?;
        self.write_head(&Head::new(branch.to_string(), oid))?;

        Ok(())
    }

    pub fn read_merge_head(&self) -> anyhow::Result<Option<MergeHead>> {
        let path = self.merge_head_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read MERGE_HEAD at {}", path.display()))?;

        let mut parts = content.trim().splitn(3, ':');
        let (Some(branch), Some(ours), Some(theirs)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Ok(None);
        };

        let (Ok(ours), Ok(theirs)) = (
            ObjectId::try_parse(ours.to_string()),
            ObjectId::try_parse(theirs.to_string()),
        ) else {
            return Ok(None);
        };

        Ok(Some(MergeHead::new(branch.to_string(), ours, theirs)))
    }

    pub fn write_merge_head(&self, merge_head: &MergeHead) -> anyhow::Result<()> {
        let content = format!(
            "{}:{}:{}",
            merge_head.branch, merge_head.ours, merge_head.theirs
        );

        std::fs::write(self.merge_head_path(), content).context("failed to write MERGE_HEAD")?;

        Ok(())
    }

    pub fn clear_merge_head(&self) -> anyhow::Result<()> {
        let path = self.merge_head_path();
        if path.exists() {
            std::fs::remove_file(&path).context("failed to remove MERGE_HEAD")?;
        }

        Ok(())
    }
}

/// Validate a branch name: non-empty, no `:` (the refs delimiter), no newlines
pub fn validate_branch_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() || name.contains(':') || name.contains('\n') || name.contains('\r') {
        return Err(RepoError::InvalidBranchName(name.to_string()).into());
    }

    Ok(())
}
