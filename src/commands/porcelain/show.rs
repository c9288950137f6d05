use crate::areas::repository::Repository;
use crate::artifacts::diff::file_diff::{ChangeSet, diff_files};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Describe a commit: header, changes against its first parent, and the
    /// full list of tracked files
    ///
    /// An unknown or malformed id prints `Invalid commit id`.
    pub fn show(&self, commit_id: &str) -> Result<(), RepositoryError> {
        let commit = match self.find_commit(commit_id) {
            Ok(commit) => self.commit_at(commit),
            Err(error) => {
                writeln!(self.writer(), "Invalid commit id")?;
                return Err(error);
            }
        };
        let changes = self.changes_of(commit);

        let mut writer = self.writer();
        writeln!(
            writer,
            "{} [{}]: {}",
            commit.id(),
            commit.branch_name(),
            commit.message()
        )?;
        for change in &changes {
            writeln!(writer, "{}", change.to_line(self.color()))?;
        }

        writeln!(writer)?;
        writeln!(writer, "    Tracked files ({}):", commit.snapshot().len())?;
        for file in commit.snapshot() {
            writeln!(writer, "    [{:>10}] {}", file.hash, file.path)?;
        }

        Ok(())
    }

    /// Changes a commit introduced relative to its first parent
    pub fn commit_changes(&self, commit_id: &str) -> Result<ChangeSet, RepositoryError> {
        let commit = self.commit_at(self.find_commit(commit_id)?);

        Ok(self.changes_of(commit))
    }

    /// Ids of a commit's parents, first parent first
    pub fn parents(&self, commit_id: &str) -> Result<Vec<CommitId>, RepositoryError> {
        let commit = self.commit_at(self.find_commit(commit_id)?);

        Ok([commit.parent(), commit.parent2()]
            .into_iter()
            .flatten()
            .map(|parent| self.commit_at(parent).id().clone())
            .collect())
    }

    fn changes_of(&self, commit: &Commit) -> ChangeSet {
        let parent_snapshot = commit
            .parent()
            .map(|parent| self.commit_at(parent).snapshot())
            .unwrap_or_default();

        diff_files(parent_snapshot, commit.snapshot())
    }
}
