use crate::areas::repository::Repository;
use crate::errors::RepositoryError;

impl Repository {
    /// Move the active branch to any commit and force its snapshot out
    ///
    /// There is no ancestry check and no guard against uncommitted changes:
    /// working files in the target snapshot are overwritten. When several
    /// commits share the id, the oldest one is the target. The head only
    /// moves once the snapshot has been restored.
    pub fn reset(&mut self, commit_id: &str) -> Result<(), RepositoryError> {
        let target = self.find_earliest_commit(commit_id)?;

        let snapshot = self.commit_at(target).snapshot().to_vec();
        self.load_snapshot(snapshot)?;
        self.refs_mut().update_head(target);

        tracing::info!(
            commit = %self.commit_at(target).id(),
            branch = %self.head_branch().name(),
            "reset branch"
        );
        Ok(())
    }
}
