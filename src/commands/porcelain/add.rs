use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::blob::Blob;
use std::io::Write;

/// Characters the commit serialisation reserves as delimiters
const RESERVED_PATH_CHARS: [char; 3] = [':', ',', '\n'];

impl Repository {
    /// Stage a file: store its blob and record the pair in the index
    pub fn add(&self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialised()?;

        if path.is_empty() || path.contains(RESERVED_PATH_CHARS) {
            return Err(RepoError::InvalidPath(path.to_string()).into());
        }
        if !self.workspace().exists(path) {
            return Err(RepoError::MissingPath(path.to_string()).into());
        }

        let blob = Blob::new(self.workspace().read_file(path)?);
        let oid = self.database().store(&blob)?;

        let mut index = self.load_index()?;
        index.add(path.to_string(), oid);
        index.save()?;

        writeln!(self.writer(), "Added '{}' to staging area.", path)?;

        Ok(())
    }
}
