use crate::areas::repository::Repository;
use crate::artifacts::diff::file_diff::diff_files;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;

impl Repository {
    /// Snapshot the index into a new commit on the active branch
    ///
    /// Fails with `NoChanges`, creating nothing, when the refreshed index
    /// matches the head snapshot.
    pub fn commit(&mut self, message: &str) -> Result<CommitId, RepositoryError> {
        let commit = self.build_commit(message)?;

        Ok(self.record_commit(commit))
    }

    /// Build the next commit from the index without recording it
    ///
    /// The index is sorted and rehashed in place, dropping files that no
    /// longer exist; this sticks even when there turns out to be nothing to
    /// commit. Every indexed file is copied into the content store.
    pub(crate) fn build_commit(&mut self, message: &str) -> Result<Commit, RepositoryError> {
        self.index_mut().sort();

        let mut index = std::mem::take(self.index_mut());
        let refreshed = index.refresh(|path| self.workspace().hash_file(path));
        *self.index_mut() = index;
        refreshed?;

        let changes = diff_files(self.head_snapshot(), self.index().entries());
        if changes.is_empty() {
            return Err(RepositoryError::NoChanges);
        }

        for file in self.index().entries() {
            self.database().store(self.workspace(), file)?;
        }

        let commit_id = CommitId::derive(message, &changes);
        tracing::debug!(commit = %commit_id, changes = changes.len(), "built commit");

        Ok(Commit::new(
            commit_id,
            message.to_string(),
            self.refs().read_head(),
            self.index().entries().to_vec(),
            self.head_branch().name().to_string(),
        ))
    }
}
