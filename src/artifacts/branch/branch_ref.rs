use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::CommitRef;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A named, movable pointer into the commit table
///
/// A branch without a head has no commits yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Branch {
    name: BranchName,
    head: Option<CommitRef>,
}

impl Branch {
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn head(&self) -> Option<CommitRef> {
        self.head
    }

    pub(crate) fn set_head(&mut self, head: CommitRef) {
        self.head = Some(head);
    }
}
