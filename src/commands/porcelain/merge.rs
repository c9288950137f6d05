use crate::areas::repository::Repository;
use crate::artifacts::merge::merge_join::merge_join;
use crate::artifacts::merge::resolution::Resolution;
use crate::artifacts::objects::commit::CommitRef;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Merge another branch into the active one
    ///
    /// Every outcome is also reported as a line on the writer. Before the
    /// join, the source snapshot is restored into the working directory
    /// without overwriting existing files; those files stay behind even when
    /// the merge fails later on.
    pub fn merge(
        &mut self,
        branch_name: &str,
        resolutions: &[Resolution],
    ) -> Result<CommitId, RepositoryError> {
        let merged = self
            .merge_source(branch_name)
            .and_then(|source_head| self.merge_into_head(branch_name, source_head, resolutions));

        match merged {
            Ok(commit_id) => {
                writeln!(self.writer(), "Merge successful")?;
                Ok(commit_id)
            }
            Err(error) => {
                self.report_merge_failure(&error)?;
                Err(error)
            }
        }
    }

    fn merge_into_head(
        &mut self,
        branch_name: &str,
        source_head: CommitRef,
        resolutions: &[Resolution],
    ) -> Result<CommitId, RepositoryError> {
        for file in self.commit_at(source_head).snapshot() {
            self.database().restore(self.workspace(), file, false)?;
        }

        self.index_mut().sort();
        let plan = merge_join(
            self.index().entries(),
            self.commit_at(source_head).snapshot(),
            resolutions,
        );

        for copy in &plan.copies {
            if !self.workspace().file_exists(&copy.source) {
                return Err(RepositoryError::ResolutionNotFound(copy.source.clone()));
            }

            tracing::debug!(source = %copy.source, target = %copy.target, "resolving conflict");
            self.workspace().copy_file(
                &self.workspace().resolve(&copy.source),
                &self.workspace().resolve(&copy.target),
            )?;
        }
        self.index_mut().replace(plan.index);

        let commit = self
            .build_commit(&format!("Merged branch {}", branch_name))?
            .with_merge_parent(source_head);
        Ok(self.record_commit(commit))
    }

    // head of the branch to merge, after every precondition holds
    fn merge_source(&self, branch_name: &str) -> Result<CommitRef, RepositoryError> {
        if branch_name.is_empty() {
            return Err(RepositoryError::EmptyBranchName);
        }

        let source = self
            .refs()
            .find_branch(branch_name)
            .ok_or_else(|| RepositoryError::BranchNotFound(branch_name.to_string()))?;
        if self.refs().is_current_branch(branch_name) {
            return Err(RepositoryError::SelfMerge(branch_name.to_string()));
        }
        if self.has_uncommitted_changes()? {
            return Err(RepositoryError::UncommittedChanges);
        }

        source.head().ok_or(RepositoryError::NoChanges)
    }

    fn report_merge_failure(&self, error: &RepositoryError) -> Result<(), RepositoryError> {
        let diagnostic = match error {
            RepositoryError::EmptyBranchName => "Invalid branch name",
            RepositoryError::BranchNotFound(_) => "Branch not found",
            RepositoryError::SelfMerge(_) => "Cannot merge a branch with itself",
            RepositoryError::UncommittedChanges => "Changes must be committed",
            RepositoryError::NoChanges => "No changes to merge",
            RepositoryError::ResolutionNotFound(_) => "Resolution file not found",
            RepositoryError::Io(_) => "Merge failed",
            _ => return Ok(()),
        };

        writeln!(self.writer(), "{}", diagnostic)?;
        Ok(())
    }
}
