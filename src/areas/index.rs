//! Working index
//!
//! The index is the list of files the next commit will snapshot. Entries are
//! appended in whatever order files are added and only sorted right before a
//! commit. Paths are unique within the index; `add` refuses a path that is
//! already tracked.

use crate::artifacts::objects::file::{ContentHash, File, sort_files};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    entries: Vec<File>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[File] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `path` is tracked, compared byte for byte
    pub fn is_tracked(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    /// Append a file; callers check `is_tracked` first
    pub(crate) fn add(&mut self, file: File) {
        self.entries.push(file);
    }

    /// Remove a tracked path, returning its entry
    pub(crate) fn remove(&mut self, path: &str) -> Option<File> {
        let position = self.entries.iter().position(|entry| entry.path == path)?;

        Some(self.entries.swap_remove(position))
    }

    pub(crate) fn sort(&mut self) {
        sort_files(&mut self.entries);
    }

    /// Recompute every entry's hash, dropping entries whose file is gone
    ///
    /// `hash_file` returns `None` for a file that no longer exists.
    pub(crate) fn refresh<F>(&mut self, mut hash_file: F) -> anyhow::Result<()>
    where
        F: FnMut(&str) -> anyhow::Result<Option<ContentHash>>,
    {
        let mut refreshed = Vec::with_capacity(self.entries.len());

        for mut entry in self.entries.drain(..) {
            match hash_file(&entry.path)? {
                Some(hash) => {
                    entry.hash = hash;
                    refreshed.push(entry);
                }
                None => tracing::debug!(path = %entry.path, "dropping missing file from index"),
            }
        }

        self.entries = refreshed;
        Ok(())
    }

    /// Replace the whole index, as checkout, reset and merge do
    pub(crate) fn replace(&mut self, entries: Vec<File>) {
        self.entries = entries;
    }
}
