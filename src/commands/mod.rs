//! Command implementations
//!
//! Every user-facing operation lives under `porcelain`, one file per
//! command, each extending `Repository` with the operation it implements.
//! Commands compute a typed result first and render it to the repository
//! writer afterwards, so callers can inspect outcomes without scraping
//! output.

pub mod porcelain;
