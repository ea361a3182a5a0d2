//! Working directory operations
//!
//! The workspace is rooted at the repository directory; every operation takes
//! a repository-relative path. Writes truncate and rewrite; atomicity is
//! whatever the host filesystem provides.

use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn exists(&self, file_path: &str) -> bool {
        self.resolve(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Bytes> {
        let path = self.resolve(file_path);

        let content = std::fs::read(&path)
            .with_context(|| format!("failed to read file {}", path.display()))?;

        Ok(content.into())
    }

    pub fn write_file(&self, file_path: &str, content: &Bytes) -> anyhow::Result<()> {
        let path = self.resolve(file_path);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write file {}", path.display()))?;

        Ok(())
    }

    /// Remove a file if present; a missing path is not an error
    pub fn remove_file(&self, file_path: &str) -> anyhow::Result<()> {
        let path = self.resolve(file_path);

        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove file {}", path.display()))?;
        }

        Ok(())
    }
}
