//! Three-way per-path resolution
//!
//! Given the blob id a path had in the merge base, in HEAD ("ours") and in
//! the branch being merged ("theirs"), the decision table picks a winner or
//! declares a conflict:
//!
//! - both sides agree → keep ours (covers unchanged paths, identical
//!   additions and double deletions)
//! - only our side changed relative to the base → keep ours
//! - only their side changed relative to the base → take theirs, which may
//!   mean deleting the path
//! - both sides changed, differently → conflict
//!
//! Conflicted paths are rendered into the working tree with the usual
//! `<<<<<<<`/`=======`/`>>>>>>>` markers for the user to resolve.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of the decision table for one path
///
/// `None` payloads mean the path is absent on the winning side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Our version wins (or both sides already agree)
    Keep(Option<ObjectId>),
    /// Their version wins; an absent payload deletes the path
    Take(Option<ObjectId>),
    /// Both sides changed the path in different ways
    Conflict {
        ours: Option<ObjectId>,
        theirs: Option<ObjectId>,
    },
}

/// One path's merge decision
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergedPath {
    pub path: String,
    pub resolution: Resolution,
}

/// Apply the decision table to one path
pub fn resolve(
    base: Option<&ObjectId>,
    ours: Option<&ObjectId>,
    theirs: Option<&ObjectId>,
) -> Resolution {
    if ours == theirs {
        Resolution::Keep(ours.cloned())
    } else if base == theirs {
        Resolution::Keep(ours.cloned())
    } else if base == ours {
        Resolution::Take(theirs.cloned())
    } else {
        Resolution::Conflict {
            ours: ours.cloned(),
            theirs: theirs.cloned(),
        }
    }
}

/// Run the decision table over the union of all paths in the three snapshots
///
/// Paths come out in sorted order, matching the deterministic ordering used
/// everywhere else in the snapshot machinery.
pub fn merge_snapshots(
    base: &BTreeMap<String, ObjectId>,
    ours: &BTreeMap<String, ObjectId>,
    theirs: &BTreeMap<String, ObjectId>,
) -> Vec<MergedPath> {
    let paths = base
        .keys()
        .chain(ours.keys())
        .chain(theirs.keys())
        .collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .map(|path| {
            MergedPath::new(
                path.clone(),
                resolve(base.get(path), ours.get(path), theirs.get(path)),
            )
        })
        .collect()
}

/// Render the conflict-marked content for one path
///
/// A non-empty side lacking a trailing newline gets one appended so the
/// separator and closing marker always sit on their own lines.
pub fn conflict_markers(ours: Option<&str>, theirs: Option<&str>, branch: &str) -> String {
    fn normalised(side: Option<&str>) -> String {
        match side {
            None | Some("") => String::new(),
            Some(content) if content.ends_with('\n') => content.to_string(),
            Some(content) => format!("{content}\n"),
        }
    }

    format!(
        "<<<<<<< HEAD\n{}=======\n{}>>>>>>> {}\n",
        normalised(ours),
        normalised(theirs),
        branch,
    )
}
