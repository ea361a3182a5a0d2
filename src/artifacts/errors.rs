//! User-facing error taxonomy
//!
//! Every operation surfaces its precondition violations through this enum so
//! the dispatcher can match on the kind instead of scraping message strings.
//! Plain I/O failures are not part of the taxonomy; they propagate unchanged
//! through `anyhow` with context attached at the call site.

use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error("repository already initialised")]
    AlreadyInitialised,
    #[error("not a minigit repository (missing .minigit directory)")]
    NotInitialised,
    #[error("pathspec '{0}' did not match any files")]
    MissingPath(String),
    #[error("path '{0}' contains characters reserved by the commit format")]
    InvalidPath(String),
    #[error("nothing to commit, staging area is empty")]
    NothingToCommit,
    #[error("unknown branch '{0}'")]
    UnknownBranch(String),
    #[error("branch '{0}' already exists")]
    BranchExists(String),
    #[error("invalid branch name '{0}'")]
    InvalidBranchName(String),
    #[error("cannot merge a branch into itself")]
    SelfMerge,
    #[error("staged changes present, commit them before switching branches or merging")]
    DirtyIndex,
    #[error("object {0} is missing from the store")]
    ObjectMissing(ObjectId),
    #[error("refusing to merge unrelated histories")]
    UnrelatedHistories,
}
