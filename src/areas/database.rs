//! Object database
//!
//! The database stores blobs and commits in a single flat directory using
//! content-addressable storage: the file name is the object id, the file
//! content is the serialised object. Objects are write-once; storing an id
//! that already exists is a no-op.

use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Content-addressed store for blobs and commits
#[derive(Debug)]
pub struct Database {
    /// Path to the objects directory (typically `.minigit/objects`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object, returning its id
    ///
    /// The content is written to a temporary file and renamed into place, so
    /// readers never observe a half-written object. Re-storing an existing
    /// id leaves the stored bytes untouched.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let oid = object.object_id()?;
        let object_path = self.path.join(oid.as_ref());

        if !object_path.exists() {
            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(oid)
    }

    pub fn exists(&self, oid: &ObjectId) -> bool {
        self.path.join(oid.as_ref()).exists()
    }

    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        Blob::deserialize(self.read_object(oid)?)
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        Commit::deserialize(self.read_object(oid)?)
    }

    /// Load the parent id of a stored commit, the shape ancestry walks want
    pub fn load_parent(&self, oid: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        Ok(self.load_commit(oid)?.parent().cloned())
    }

    fn read_object(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(oid.as_ref());

        if !object_path.exists() {
            return Err(RepoError::ObjectMissing(oid.clone()).into());
        }

        let content = std::fs::read(&object_path).with_context(|| {
            format!("failed to read object file {}", object_path.display())
        })?;

        Ok(content.into())
    }

    fn write_object(&self, object_path: PathBuf, content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context("object path has no parent directory")?;
        let temp_object_path = object_dir.join(format!("tmp-obj-{}", std::process::id()));

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .with_context(|| {
                format!("failed to open object file {}", temp_object_path.display())
            })?;
        file.write_all(&content).with_context(|| {
            format!("failed to write object file {}", temp_object_path.display())
        })?;

        std::fs::rename(&temp_object_path, &object_path).with_context(|| {
            format!("failed to rename object file to {}", object_path.display())
        })?;

        Ok(())
    }
}
