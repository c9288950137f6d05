//! Working directory access
//!
//! Tracked paths are stored relative to the workspace root, exactly as they
//! were added. Everything that touches the filesystem on their behalf goes
//! through here: existence checks, checksums, and byte-exact copies.

use crate::artifacts::objects::checksum::Checksum;
use crate::artifacts::objects::file::ContentHash;
use anyhow::Context;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    storage_dir: String,
}

impl Workspace {
    pub fn new(path: Box<Path>, storage_dir: String) -> Self {
        Workspace { path, storage_dir }
    }

    /// Absolute location of a tracked path
    pub fn resolve(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn file_exists(&self, file_path: &str) -> bool {
        std::fs::metadata(self.resolve(file_path)).is_ok()
    }

    /// Checksum the file at `file_path`
    ///
    /// Returns `None` when the file cannot be opened or is not a regular file;
    /// callers treat that as the file having been removed.
    pub fn hash_file(&self, file_path: &str) -> anyhow::Result<Option<ContentHash>> {
        let absolute_path = self.resolve(file_path);

        let Ok(file) = std::fs::File::open(&absolute_path) else {
            return Ok(None);
        };
        let metadata = file
            .metadata()
            .with_context(|| format!("Failed to stat file: {:?}", file_path))?;
        if !metadata.is_file() {
            return Ok(None);
        }

        let hash = Checksum::new(BufReader::new(file), file_path, metadata.len())
            .finish()
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Some(hash))
    }

    /// Copy `source` over `target` byte for byte
    ///
    /// The target is created if missing and truncated otherwise; missing parent
    /// directories are created.
    pub fn copy_file(&self, source: &Path, target: &Path) -> anyhow::Result<()> {
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut reader = std::fs::File::open(source)
            .with_context(|| format!("Failed to open file: {:?}", source))?;
        let mut writer = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(target)
            .with_context(|| format!("Failed to open file: {:?}", target))?;

        std::io::copy(&mut reader, &mut writer)
            .with_context(|| format!("Failed to copy {:?} to {:?}", source, target))?;

        Ok(())
    }

    /// List every regular file under `root_file_path`, relative to the workspace
    ///
    /// The storage directory is skipped. A path naming a single file yields
    /// just that file.
    pub fn list_files(&self, root_file_path: &Path) -> anyhow::Result<Vec<String>> {
        let root_file_path = self.path.join(root_file_path);

        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        let mut files = WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_path(entry.path()))
            .collect::<Vec<_>>();
        files.dedup();

        Ok(files)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.strip_prefix(&self.path)
            .ok()
            .and_then(|relative| relative.components().next())
            .is_some_and(|component| component.as_os_str() == self.storage_dir.as_str())
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;
        let relative = relative.to_str()?;

        // tracked paths always use forward slashes
        Some(relative.replace(std::path::MAIN_SEPARATOR, "/"))
    }
}
