//! Zero-context unified output
//!
//! Presentation form of an edit script for one path. Context is zero: only
//! removed and added lines are emitted, under `--- a/` and `+++ b/` headers,
//! with no hunk splitting. Identical inputs render to nothing at all.

use crate::artifacts::diff::edit_script::{Edit, LcsDiff};
use std::fmt::Display;

/// Split text on `\n`, treating a trailing newline as a terminator rather
/// than the start of an empty final line.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n').map(str::to_string).collect::<Vec<_>>();
    if text.ends_with('\n') {
        lines.pop();
    }
    lines
}

/// Unified diff of one path between two versions of its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedDiff {
    path: String,
    edits: Vec<Edit<String>>,
}

impl UnifiedDiff {
    pub fn between(path: String, old_text: &str, new_text: &str) -> Self {
        let old_lines = split_lines(old_text);
        let new_lines = split_lines(new_text);

        let diff = LcsDiff::new(&old_lines, &new_lines);
        let edits = if diff.is_identical() {
            Vec::new()
        } else {
            diff.edits()
        };

        UnifiedDiff { path, edits }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The removed and added lines, in script order
    pub fn changes(&self) -> impl Iterator<Item = &Edit<String>> {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Equal { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.changes().next().is_none()
    }

    pub fn header_old(&self) -> String {
        format!("--- a/{}", self.path)
    }

    pub fn header_new(&self) -> String {
        format!("+++ b/{}", self.path)
    }
}

impl Display for UnifiedDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(f, "{}", self.header_old())?;
        writeln!(f, "{}", self.header_new())?;
        for edit in self.changes() {
            writeln!(f, "{}", edit)?;
        }

        Ok(())
    }
}
