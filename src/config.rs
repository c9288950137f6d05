//! Repository configuration
//!
//! A repository lives in a working-directory root. Its metadata (the content
//! store and the serialized commit graph) goes into a storage directory below
//! that root, `.svc` unless `SVC_DIR` names another one.
//!
//! ```text
//! <root>/
//!   .svc/
//!     db/<decimal hash>   one immutable blob per distinct content hash
//!     state               compressed commit graph, branches and index
//! ```

use derive_new::new;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_DIR: &str = ".svc";
pub const STORAGE_DIR_ENV: &str = "SVC_DIR";

const DATABASE_DIR: &str = "db";
const STATE_FILE: &str = "state";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Config {
    root: PathBuf,
    storage_dir: String,
}

impl Config {
    /// Configuration rooted at `root`, honouring `SVC_DIR`
    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        let storage_dir = std::env::var(STORAGE_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string());

        Config::new(root.into(), storage_dir)
    }

    /// Configuration rooted at `root` with the default storage directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config::new(root.into(), DEFAULT_STORAGE_DIR.to_string())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_dir(&self) -> &str {
        &self.storage_dir
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(&self.storage_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        self.storage_path().join(DATABASE_DIR)
    }

    pub fn state_path(&self) -> PathBuf {
        self.storage_path().join(STATE_FILE)
    }
}
