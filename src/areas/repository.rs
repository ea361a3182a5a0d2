//! Repository abstraction and coordination
//!
//! This module provides the main `Repository` type that binds the lower-level
//! components (database, index, workspace, refs, clock) and hosts the
//! user-facing commands implemented under `commands::porcelain`.
//!
//! State is threaded explicitly: each operation loads the refs and index it
//! needs, mutates the loaded values and writes them back before returning.
//! Nothing repository-shaped lives in process-wide state.
//!
//! Concurrent processes operating on the same repository are unspecified:
//! there is no cross-process locking, and interleaved writers can corrupt
//! the refs and index files.

use crate::areas::clock::Clock;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::RefCell;
use std::cell::RefMut;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Repository directory name
pub const MINIGIT_DIR: &str = ".minigit";

/// Object database directory name
const OBJECTS_DIR: &str = "objects";

/// Index file name
const INDEX_FILE: &str = "index";

/// Repository façade
///
/// Coordinates all repository operations and provides access to the
/// database, index, workspace, refs and clock subsystems. This is the entry
/// point the command dispatcher talks to.
pub struct Repository {
    /// Repository root path
    path: Box<Path>,
    /// Output writer (stdout in production, a capture buffer in tests)
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Object database
    database: Database,
    /// Working directory
    workspace: Workspace,
    /// Reference manager
    refs: Refs,
    /// Timestamp source
    clock: Clock,
}

impl Repository {
    pub fn new(path: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;

        let database = Database::new(
            path.join(MINIGIT_DIR)
                .join(OBJECTS_DIR)
                .into_boxed_path(),
        );
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(path.join(MINIGIT_DIR).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
            clock: Clock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn minigit_path(&self) -> PathBuf {
        self.path.join(MINIGIT_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.minigit_path().join(INDEX_FILE)
    }

    /// Load the staging area from disk
    pub fn load_index(&self) -> anyhow::Result<Index> {
        Index::load(self.index_path().into_boxed_path())
    }

    pub fn is_initialised(&self) -> bool {
        self.minigit_path().is_dir()
    }

    /// Every operation except `init` requires an initialised repository
    pub fn ensure_initialised(&self) -> anyhow::Result<()> {
        if !self.is_initialised() {
            return Err(RepoError::NotInitialised.into());
        }

        Ok(())
    }

    /// The file map of a commit, or an empty map for "no commit yet"
    pub fn snapshot(
        &self,
        oid: Option<&ObjectId>,
    ) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        match oid {
            Some(oid) => Ok(self.database.load_commit(oid)?.file_map()),
            None => Ok(BTreeMap::new()),
        }
    }
}
