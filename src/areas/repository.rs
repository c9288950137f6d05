use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_ref::Branch;
use crate::artifacts::objects::commit::{Commit, CommitRef};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::file::File;
use crate::config::Config;
use crate::errors::RepositoryError;
use serde::{Deserialize, Serialize};
use std::cell::{RefCell, RefMut};

/// Persisted part of a repository
#[derive(Debug, Deserialize)]
struct State {
    refs: Refs,
    commits: Vec<Commit>,
    index: Index,
}

#[derive(Serialize)]
struct StateRef<'r> {
    refs: &'r Refs,
    commits: &'r [Commit],
    index: &'r Index,
}

/// A repository: branches, the append-only commit table and the index
///
/// All operations run synchronously on the caller's thread. Reports and
/// diagnostics go to the writer handed over at construction.
pub struct Repository {
    config: Config,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    commits: Vec<Commit>,
    index: Index,
    color: bool,
}

impl Repository {
    /// An empty repository with a single headless `master` branch
    ///
    /// Nothing is written to disk until `init` or `save`.
    pub fn new(config: Config, writer: Box<dyn std::io::Write>) -> Self {
        let database = Database::new(
            config.database_path().into_boxed_path(),
            config.state_path().into_boxed_path(),
        );
        let workspace = Workspace::new(
            config.root().to_path_buf().into_boxed_path(),
            config.storage_dir().to_string(),
        );

        Repository {
            config,
            writer: RefCell::new(writer),
            database,
            workspace,
            refs: Refs::new(),
            commits: Vec::new(),
            index: Index::new(),
            color: false,
        }
    }

    /// Load a repository previously written with `save`
    pub fn open(config: Config, writer: Box<dyn std::io::Write>) -> Result<Self, RepositoryError> {
        let mut repository = Self::new(config, writer);

        if !repository.database.has_state() {
            return Err(anyhow::anyhow!(
                "not an svc repository: {}",
                repository.config.root().display()
            )
            .into());
        }

        let state = repository.database.load_state::<State>()?;
        Self::verify_state(&state)?;

        repository.refs = state.refs;
        repository.commits = state.commits;
        repository.index = state.index;

        Ok(repository)
    }

    /// Write branches, commits and index to the state file
    pub fn save(&self) -> Result<(), RepositoryError> {
        self.database.store_state(&StateRef {
            refs: &self.refs,
            commits: &self.commits,
            index: &self.index,
        })?;

        Ok(())
    }

    // every stored reference must point at an older commit
    fn verify_state(state: &State) -> anyhow::Result<()> {
        state.refs.verify()?;

        for (position, commit) in state.commits.iter().enumerate() {
            let dangling = [commit.parent(), commit.parent2()]
                .into_iter()
                .flatten()
                .any(|parent| parent.position() >= position);
            if dangling {
                anyhow::bail!("corrupt state: commit {} has a dangling parent", commit.id());
            }
        }

        let dangling_head = state
            .refs
            .branches()
            .iter()
            .filter_map(Branch::head)
            .any(|head| head.position() >= state.commits.len());
        if dangling_head {
            anyhow::bail!("corrupt state: branch head outside the commit table");
        }

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    /// Colour change markers in `show` output
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn branches(&self) -> &[Branch] {
        self.refs.branches()
    }

    /// The active branch
    pub fn head_branch(&self) -> &Branch {
        self.refs.current_branch()
    }

    /// Head commit of the active branch
    pub fn head_commit(&self) -> Option<&Commit> {
        self.refs.read_head().map(|head| self.commit_at(head))
    }

    /// Snapshot of the active head, empty while the branch has no commits
    pub fn head_snapshot(&self) -> &[File] {
        self.head_commit().map(Commit::snapshot).unwrap_or_default()
    }

    pub fn commit_at(&self, commit: CommitRef) -> &Commit {
        &self.commits[commit.position()]
    }

    /// Locate a commit by id
    ///
    /// Ids are not unique; the most recent commit carrying the id wins.
    pub fn find_commit(&self, commit_id: &str) -> Result<CommitRef, RepositoryError> {
        let commit_id = Self::parse_commit_id(commit_id)?;

        self.commits
            .iter()
            .rposition(|commit| commit.id() == &commit_id)
            .map(CommitRef::new)
            .ok_or_else(|| RepositoryError::CommitNotFound(commit_id.to_string()))
    }

    /// Locate the oldest commit carrying `commit_id`
    ///
    /// Reset resolves ids this way; every other lookup uses `find_commit`.
    pub fn find_earliest_commit(&self, commit_id: &str) -> Result<CommitRef, RepositoryError> {
        let commit_id = Self::parse_commit_id(commit_id)?;

        self.commits
            .iter()
            .position(|commit| commit.id() == &commit_id)
            .map(CommitRef::new)
            .ok_or_else(|| RepositoryError::CommitNotFound(commit_id.to_string()))
    }

    fn parse_commit_id(commit_id: &str) -> Result<CommitId, RepositoryError> {
        CommitId::try_parse(commit_id)
            .map_err(|_| RepositoryError::InvalidCommitId(commit_id.to_string()))
    }

    pub fn get_commit(&self, commit_id: &str) -> Option<&Commit> {
        self.find_commit(commit_id)
            .ok()
            .map(|commit| self.commit_at(commit))
    }

    /// Append a commit and move the active branch onto it
    pub(crate) fn record_commit(&mut self, commit: Commit) -> CommitId {
        let commit_id = commit.id().clone();

        self.commits.push(commit);
        let head = CommitRef::new(self.commits.len() - 1);
        self.refs.update_head(head);

        tracing::info!(
            commit = %commit_id,
            branch = %self.refs.current_branch().name(),
            "recorded commit"
        );
        commit_id
    }

    /// Whether the index differs from the active head
    ///
    /// A headless branch is clean only with an empty index. Otherwise the
    /// index must have as many entries as the head snapshot, and at every
    /// position the snapshot hash, the index hash and a fresh checksum of the
    /// file on disk must agree.
    pub fn has_uncommitted_changes(&self) -> Result<bool, RepositoryError> {
        let Some(head) = self.head_commit() else {
            return Ok(!self.index.is_empty());
        };

        let snapshot = head.snapshot();
        if snapshot.len() != self.index.len() {
            return Ok(true);
        }

        for (committed, staged) in snapshot.iter().zip(self.index.entries()) {
            let on_disk = self.workspace.hash_file(&committed.path)?;

            if committed.hash != staged.hash || Some(committed.hash) != on_disk {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Replace the index with `snapshot` and force-restore its files
    pub(crate) fn load_snapshot(&mut self, snapshot: Vec<File>) -> Result<(), RepositoryError> {
        for file in &snapshot {
            self.database.restore(&self.workspace, file, true)?;
        }
        self.index.replace(snapshot);

        Ok(())
    }
}
