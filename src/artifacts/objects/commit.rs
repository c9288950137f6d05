//! Commit object
//!
//! A commit is an immutable snapshot of the index at the time it was made:
//! the sorted list of tracked files, the message, the branch it was created on
//! and up to two parents. Parents are stored as `CommitRef`s, positions in the
//! repository's append-only commit table, so they stay valid no matter how the
//! table grows and can only ever point at older commits.

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::file::File;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Position of a commit in the repository's commit table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
#[serde(transparent)]
pub struct CommitRef(usize);

impl CommitRef {
    pub fn position(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Commit {
    id: CommitId,
    message: String,
    parent: Option<CommitRef>,
    #[new(default)]
    parent2: Option<CommitRef>,
    snapshot: Vec<File>,
    branch_name: String,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First parent, the previous head of the branch the commit was made on
    pub fn parent(&self) -> Option<CommitRef> {
        self.parent
    }

    /// Merge parent, the head of the branch that was merged in
    pub fn parent2(&self) -> Option<CommitRef> {
        self.parent2
    }

    /// Tracked files, sorted by case-insensitive path
    pub fn snapshot(&self) -> &[File] {
        &self.snapshot
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    pub fn is_merge(&self) -> bool {
        self.parent2.is_some()
    }

    /// Turn a freshly built commit into a merge commit
    ///
    /// Only the merge engine calls this, right after the commit builder
    /// produced the commit and before anything else can observe it.
    pub(crate) fn with_merge_parent(mut self, parent2: CommitRef) -> Self {
        self.parent2 = Some(parent2);
        self
    }
}
