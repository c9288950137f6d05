use crate::areas::repository::Repository;
use crate::artifacts::objects::file::{ContentHash, File};
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Start tracking `path`, returning its content hash
    ///
    /// The path is taken relative to the workspace root and recorded as is.
    pub fn add(&mut self, path: &str) -> Result<ContentHash, RepositoryError> {
        validate_path(path)?;

        if self.index().is_tracked(path) {
            return Err(RepositoryError::AlreadyTracked(path.to_string()));
        }

        let hash = self
            .workspace()
            .hash_file(path)?
            .ok_or_else(|| RepositoryError::FileNotFound(path.to_string()))?;

        self.index_mut().add(File::new(hash, path.to_string()));
        tracing::debug!(path, %hash, "added file to index");

        Ok(hash)
    }
}

pub(crate) fn validate_path(path: &str) -> Result<(), RepositoryError> {
    if path.is_empty() || Path::new(path).is_absolute() {
        return Err(RepositoryError::InvalidPath(path.to_string()));
    }

    Ok(())
}
