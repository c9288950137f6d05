use crate::areas::repository::Repository;
use crate::errors::RepositoryError;

impl Repository {
    /// Switch to another branch
    ///
    /// The index becomes a copy of the target head's snapshot and every file
    /// of that snapshot is restored over the working directory. Files that are
    /// not part of the snapshot are left where they are. The active branch
    /// stays put if the snapshot cannot be restored.
    pub fn checkout(&mut self, branch_name: &str) -> Result<(), RepositoryError> {
        let head = self
            .refs()
            .find_branch(branch_name)
            .ok_or_else(|| RepositoryError::BranchNotFound(branch_name.to_string()))?
            .head();
        if self.has_uncommitted_changes()? {
            return Err(RepositoryError::UncommittedChanges);
        }

        let snapshot = head
            .map(|head| self.commit_at(head).snapshot().to_vec())
            .unwrap_or_default();
        self.load_snapshot(snapshot)?;
        self.refs_mut().set_current(branch_name)?;

        tracing::info!(branch = branch_name, "checked out branch");
        Ok(())
    }
}
