//! Parent-chain traversal
//!
//! Commits record a single parent, so every history is a linear chain from
//! any starting commit and the nearest common ancestor of two commits is the
//! first commit of one chain that appears in the other. The walker takes a
//! parent-lookup function instead of a database handle so the traversal can
//! be exercised against an in-memory graph.
//!
//! A visited set guards every walk; a parent cycle (which a well-formed
//! store cannot contain) terminates the traversal instead of spinning.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Ancestry queries over the commit graph
pub struct Ancestry<F> {
    parent_of: F,
}

impl<F> Ancestry<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(parent_of: F) -> Self {
        Ancestry { parent_of }
    }

    /// All commits reachable from `start` by parent links, `start` included
    pub fn ancestors(&self, start: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut seen = HashSet::new();
        let mut cursor = Some(start.clone());

        while let Some(oid) = cursor {
            if !seen.insert(oid.clone()) {
                break;
            }
            cursor = (self.parent_of)(&oid)?;
        }

        Ok(seen)
    }

    /// Whether `candidate` lies on `child`'s parent chain (inclusive)
    pub fn is_ancestor(&self, child: &ObjectId, candidate: &ObjectId) -> anyhow::Result<bool> {
        let mut seen = HashSet::new();
        let mut cursor = Some(child.clone());

        while let Some(oid) = cursor {
            if oid == *candidate {
                return Ok(true);
            }
            if !seen.insert(oid.clone()) {
                break;
            }
            cursor = (self.parent_of)(&oid)?;
        }

        Ok(false)
    }

    /// The first commit on `b`'s chain that is also an ancestor of `a`
    ///
    /// `None` when the chains are disjoint, which makes the histories
    /// unrelated as far as merging is concerned.
    pub fn nearest_common_ancestor(
        &self,
        a: &ObjectId,
        b: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let reachable_from_a = self.ancestors(a)?;

        let mut seen = HashSet::new();
        let mut cursor = Some(b.clone());
        while let Some(oid) = cursor {
            if reachable_from_a.contains(&oid) {
                return Ok(Some(oid));
            }
            if !seen.insert(oid.clone()) {
                break;
            }
            cursor = (self.parent_of)(&oid)?;
        }

        Ok(None)
    }
}
