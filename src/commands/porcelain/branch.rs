use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Create a branch at the active head
    ///
    /// The new branch is headless when the active branch is. The active
    /// branch does not change.
    pub fn branch(&mut self, branch_name: &str) -> Result<(), RepositoryError> {
        let branch_name = BranchName::try_parse(branch_name)?;

        if self.refs().find_branch(branch_name.as_ref()).is_some() {
            return Err(RepositoryError::BranchExists(branch_name.to_string()));
        }
        if self.has_uncommitted_changes()? {
            return Err(RepositoryError::UncommittedChanges);
        }

        let head = self.refs().read_head();
        tracing::info!(branch = %branch_name, "created branch");
        self.refs_mut().create_branch(branch_name, head)?;

        Ok(())
    }

    /// Write every branch name, one per line, in creation order
    pub fn list_branches(&self) -> Result<Vec<String>, RepositoryError> {
        let names = self
            .branches()
            .iter()
            .map(|branch| branch.name().to_string())
            .collect::<Vec<_>>();

        let mut writer = self.writer();
        for name in &names {
            writeln!(writer, "{}", name)?;
        }

        Ok(names)
    }
}
