use crate::areas::repository::Repository;
use crate::artifacts::objects::file::ContentHash;
use crate::commands::porcelain::add::validate_path;
use crate::errors::RepositoryError;

impl Repository {
    /// Stop tracking `path`, returning the hash recorded for it
    ///
    /// The working file is left alone.
    pub fn remove(&mut self, path: &str) -> Result<ContentHash, RepositoryError> {
        validate_path(path)?;

        let removed = self
            .index_mut()
            .remove(path)
            .ok_or_else(|| RepositoryError::NotTracked(path.to_string()))?;
        tracing::debug!(path, hash = %removed.hash, "removed file from index");

        Ok(removed.hash)
    }
}
