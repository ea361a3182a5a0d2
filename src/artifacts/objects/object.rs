//! Core object traits
//!
//! Everything the database stores implements these traits:
//! - `Packable`: serialisation to the on-disk form
//! - `Unpackable`: deserialisation from the on-disk form
//! - `Object`: id derivation shared by all object types
//!
//! Unlike the storage form, the *digest input* is what the object id is
//! computed from. For blobs the two coincide (raw bytes, no framing); for
//! commits the digest input is the metadata concatenation, so that the id
//! is reproducible from message, timestamp, parent and blob ids alone.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// Trait for serialising objects to their on-disk form
pub trait Packable {
    /// Serialise the object to the bytes stored in the database
    fn serialize(&self) -> Result<Bytes>;
}

/// Trait for deserialising objects from their on-disk form
pub trait Unpackable {
    /// Deserialise the object from its stored bytes
    fn deserialize(content: Bytes) -> Result<Self>
    where
        Self: Sized;
}

/// Core stored-object trait
///
/// Provides id derivation on top of the object's digest input.
pub trait Object: Packable {
    /// The bytes the object id is derived from
    fn digest_input(&self) -> Result<Bytes>;

    /// Compute the object id (SHA-1 of the digest input)
    fn object_id(&self) -> Result<ObjectId> {
        let mut hasher = Sha1::new();
        hasher.update(self.digest_input()?);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}
