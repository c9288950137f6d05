//! Branches and the active branch
//!
//! Branches are kept in creation order, which is also the order they are
//! listed in. Exactly one branch is active at a time; commits advance its
//! head and checkout switches to another one.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branch_ref::Branch;
use crate::artifacts::objects::commit::CommitRef;
use crate::errors::RepositoryError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    branches: Vec<Branch>,
    current: usize,
}

impl Default for Refs {
    fn default() -> Self {
        Refs {
            branches: vec![Branch::new(BranchName::default_branch(), None)],
            current: 0,
        }
    }
}

impl Refs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn current_branch(&self) -> &Branch {
        &self.branches[self.current]
    }

    /// Head commit of the active branch, `None` while it has no commits
    pub fn read_head(&self) -> Option<CommitRef> {
        self.current_branch().head()
    }

    /// Point the active branch at `commit`
    pub fn update_head(&mut self, commit: CommitRef) {
        self.branches[self.current].set_head(commit);
    }

    pub fn find_branch(&self, name: &str) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|branch| branch.name().as_ref() == name)
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.current_branch().name().as_ref() == name
    }

    /// Reject a branch table that cannot come out of normal use
    pub(crate) fn verify(&self) -> anyhow::Result<()> {
        if self.branches.is_empty() {
            anyhow::bail!("corrupt state: no branches");
        }
        if self.current >= self.branches.len() {
            anyhow::bail!(
                "corrupt state: active branch {} outside the branch table",
                self.current
            );
        }

        Ok(())
    }

    /// Add a branch pointing at `head`
    pub fn create_branch(
        &mut self,
        name: BranchName,
        head: Option<CommitRef>,
    ) -> Result<(), RepositoryError> {
        if self.find_branch(name.as_ref()).is_some() {
            return Err(RepositoryError::BranchExists(name.to_string()));
        }

        self.branches.push(Branch::new(name, head));
        Ok(())
    }

    /// Make the named branch the active one
    pub fn set_current(&mut self, name: &str) -> Result<&Branch, RepositoryError> {
        let position = self
            .branches
            .iter()
            .position(|branch| branch.name().as_ref() == name)
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))?;

        self.current = position;
        Ok(&self.branches[position])
    }
}
