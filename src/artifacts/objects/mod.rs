//! Stored object types
//!
//! - `blob`: Raw file content at one point in time
//! - `commit`: Snapshot record (message, timestamp, parent, file list)
//! - `object`: Traits shared by everything the database stores
//! - `object_id`: Content-derived identifiers

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a hex-encoded object id (SHA-1 digest)
pub const OBJECT_ID_LENGTH: usize = 40;
