//! Repository data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `checkout`: Working-tree reconciliation plans
//! - `diff`: Line-level LCS diffing and unified output
//! - `errors`: The user-facing error taxonomy
//! - `merge`: Ancestry queries and three-way merge resolution
//! - `objects`: Stored object types (blob, commit) and their ids
//! - `status`: Working-tree status classification

pub mod checkout;
pub mod diff;
pub mod errors;
pub mod merge;
pub mod objects;
pub mod status;
