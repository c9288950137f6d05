//! Repository operation errors
//!
//! Every operation reports failure through `RepositoryError`. Variants fall
//! into five classes, exposed through [`RepositoryError::kind`]:
//!
//! - **Validation**: malformed arguments (empty paths, bad branch names)
//! - **NotFound**: unknown files, branches or commits
//! - **Conflict**: the repository state forbids the operation
//! - **NoOp**: the operation would not change anything
//! - **Io**: a filesystem or state-file failure underneath
//!
//! Checksum and commit id collisions are not errors: they are never detected.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    NoOp,
    Io,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    #[error("branch name cannot be empty")]
    EmptyBranchName,

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("file does not exist: {0}")]
    FileNotFound(String),

    #[error("file is not tracked: {0}")]
    NotTracked(String),

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("resolution file not found: {0}")]
    ResolutionNotFound(String),

    #[error("file is already tracked: {0}")]
    AlreadyTracked(String),

    #[error("a branch named '{0}' already exists")]
    BranchExists(String),

    #[error("changes must be committed first")]
    UncommittedChanges,

    #[error("cannot merge branch '{0}' with itself")]
    SelfMerge(String),

    #[error("no changes to commit")]
    NoChanges,

    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::InvalidPath(_)
            | RepositoryError::EmptyBranchName
            | RepositoryError::InvalidBranchName(_)
            | RepositoryError::InvalidCommitId(_) => ErrorKind::Validation,
            RepositoryError::FileNotFound(_)
            | RepositoryError::NotTracked(_)
            | RepositoryError::BranchNotFound(_)
            | RepositoryError::CommitNotFound(_)
            | RepositoryError::ResolutionNotFound(_) => ErrorKind::NotFound,
            RepositoryError::AlreadyTracked(_)
            | RepositoryError::BranchExists(_)
            | RepositoryError::UncommittedChanges
            | RepositoryError::SelfMerge(_) => ErrorKind::Conflict,
            RepositoryError::NoChanges => ErrorKind::NoOp,
            RepositoryError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(error: std::io::Error) -> Self {
        RepositoryError::Io(error.into())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
