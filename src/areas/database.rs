//! Content store and state file
//!
//! Blobs are verbatim copies of tracked files, stored under the decimal value
//! of their content hash. The first writer for a hash wins: a later file with
//! a colliding hash is silently conflated with the stored one.
//!
//! The commit graph, branches and index are kept in a single state file,
//! serialized as JSON and zlib-compressed. Both blobs and the state file are
//! written to a temporary name first and renamed into place.

use crate::areas::workspace::Workspace;
use crate::artifacts::objects::file::File;
use anyhow::Context;
use fake::rand;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    state_path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>, state_path: Box<Path>) -> Self {
        Database { path, state_path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn blob_path(&self, file: &File) -> PathBuf {
        self.path.join(file.hash.to_string())
    }

    /// Store the current bytes of `file` unless a blob with its hash exists
    ///
    /// Returns whether a new blob was written.
    pub fn store(&self, workspace: &Workspace, file: &File) -> anyhow::Result<bool> {
        let blob_path = self.blob_path(file);
        if blob_path.exists() {
            return Ok(false);
        }

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Unable to create object directory {}", self.path.display()))?;

        let temp_path = self.path.join(Self::generate_temp_name());
        workspace.copy_file(&workspace.resolve(&file.path), &temp_path)?;
        std::fs::rename(&temp_path, &blob_path)
            .with_context(|| format!("Unable to rename blob to {}", blob_path.display()))?;

        tracing::debug!(path = %file.path, hash = %file.hash, "stored blob");
        Ok(true)
    }

    /// Copy the stored blob of `file` back to its working path
    ///
    /// Without `overwrite`, an existing working file is left untouched.
    /// Returns whether the working file was written.
    pub fn restore(
        &self,
        workspace: &Workspace,
        file: &File,
        overwrite: bool,
    ) -> anyhow::Result<bool> {
        if !overwrite && workspace.file_exists(&file.path) {
            return Ok(false);
        }

        let blob_path = self.blob_path(file);
        if !blob_path.exists() {
            anyhow::bail!(
                "Missing blob {} for {}",
                blob_path.display(),
                file.path
            );
        }

        workspace.copy_file(&blob_path, &workspace.resolve(&file.path))?;
        Ok(true)
    }

    pub fn has_state(&self) -> bool {
        self.state_path.exists()
    }

    pub fn load_state<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        let content = std::fs::read(&self.state_path).with_context(|| {
            format!("Unable to read state file {}", self.state_path.display())
        })?;
        let content = Self::decompress(&content)?;

        serde_json::from_slice(&content).context("Unable to parse state file")
    }

    pub fn store_state<T: Serialize>(&self, state: &T) -> anyhow::Result<()> {
        let content = serde_json::to_vec(state).context("Unable to serialize state")?;
        let content = Self::compress(&content)?;

        let state_dir = self
            .state_path
            .parent()
            .context(format!("Invalid state path {}", self.state_path.display()))?;
        std::fs::create_dir_all(state_dir)
            .with_context(|| format!("Unable to create directory {}", state_dir.display()))?;

        let temp_path = state_dir.join(Self::generate_temp_name());
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open state file {}", temp_path.display()))?;
        file.write_all(&content)
            .with_context(|| format!("Unable to write state file {}", temp_path.display()))?;

        std::fs::rename(&temp_path, &self.state_path).with_context(|| {
            format!("Unable to rename state file to {}", self.state_path.display())
        })?;

        Ok(())
    }

    fn compress(data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress state")?;

        encoder
            .finish()
            .context("Unable to finish compressing state")
    }

    fn decompress(data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress state")?;

        Ok(decompressed_content)
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::file::ContentHash;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn setup(dir: &TempDir) -> (Workspace, Database) {
        let workspace = Workspace::new(dir.path().into(), ".svc".to_string());
        let database = Database::new(
            dir.path().join(".svc/db").into_boxed_path(),
            dir.path().join(".svc/state").into_boxed_path(),
        );
        (workspace, database)
    }

    #[test]
    fn blobs_are_named_by_decimal_hash() {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("alpha").unwrap();
        let (workspace, database) = setup(&dir);

        let file = File::new(ContentHash::new(1234), "a.txt".to_string());
        assert!(database.store(&workspace, &file).unwrap());

        dir.child(".svc/db/1234").assert("alpha");
    }

    #[test]
    fn first_writer_wins() {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("first").unwrap();
        dir.child("b.txt").write_str("second").unwrap();
        let (workspace, database) = setup(&dir);

        let a = File::new(ContentHash::new(7), "a.txt".to_string());
        let b = File::new(ContentHash::new(7), "b.txt".to_string());
        assert!(database.store(&workspace, &a).unwrap());
        assert!(!database.store(&workspace, &b).unwrap());

        dir.child(".svc/db/7").assert("first");
    }

    #[test]
    fn restore_respects_overwrite_flag() {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("stored").unwrap();
        let (workspace, database) = setup(&dir);

        let file = File::new(ContentHash::new(9), "a.txt".to_string());
        database.store(&workspace, &file).unwrap();
        dir.child("a.txt").write_str("edited").unwrap();

        assert!(!database.restore(&workspace, &file, false).unwrap());
        dir.child("a.txt").assert("edited");

        assert!(database.restore(&workspace, &file, true).unwrap());
        dir.child("a.txt").assert("stored");
    }

    #[test]
    fn state_survives_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let (_, database) = setup(&dir);

        let state = BTreeMap::from([("master".to_string(), 3usize)]);
        database.store_state(&state).unwrap();

        assert!(database.has_state());
        assert_eq!(database.load_state::<BTreeMap<String, usize>>().unwrap(), state);
    }
}
