use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Write the first-parent history of the active branch, newest first
    pub fn log(&self) -> Result<Vec<CommitId>, RepositoryError> {
        let mut history = Vec::new();
        let mut writer = self.writer();
        let mut next = self.refs().read_head();

        while let Some(commit) = next {
            let commit = self.commit_at(commit);
            writeln!(
                writer,
                "{} [{}]: {}",
                commit.id(),
                commit.branch_name(),
                commit.message()
            )?;

            history.push(commit.id().clone());
            next = commit.parent();
        }

        Ok(history)
    }

    /// Whether the index matches the head of the active branch
    pub fn status(&self) -> Result<bool, RepositoryError> {
        Ok(!self.has_uncommitted_changes()?)
    }
}
