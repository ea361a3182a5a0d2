//! Working-tree status classification
//!
//! Each staged path is classified by comparing the working file's current
//! digest against the blob id recorded in the index at `add` time.

use colored::Colorize;
use derive_new::new;
use std::fmt;

/// State of one staged path relative to its staged blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// Working content matches the staged blob
    Staged,
    /// Working content changed after staging
    Modified,
    /// The file vanished from the working tree after staging
    Deleted,
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileState::Staged => "staged".green(),
            FileState::Modified => "modified".yellow(),
            FileState::Deleted => "deleted".red(),
        };

        write!(f, "{label}")
    }
}

/// One classified entry of the status report
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StatusEntry {
    pub path: String,
    pub state: FileState,
}

/// Everything the status command reports
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StatusReport {
    pub branch: String,
    /// Branch named by MERGE_HEAD when a conflicted merge is unresolved
    pub merging: Option<String>,
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }
}
