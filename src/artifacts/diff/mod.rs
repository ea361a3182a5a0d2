//! Line-level diffing
//!
//! - `edit_script`: LCS-based edit script between two line sequences
//! - `unified`: zero-context unified output for changed files

pub mod edit_script;
pub mod unified;
