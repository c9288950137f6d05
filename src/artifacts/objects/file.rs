use derive_new::new;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Checksum of a file's content, seeded by its path
///
/// This is also the key under which the content store keeps the file's bytes,
/// rendered as a decimal number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, new,
)]
#[serde(transparent)]
pub struct ContentHash(u32);

impl ContentHash {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // forward so width and alignment flags keep working
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A tracked path at a point in time
///
/// Inside the index the hash is refreshed on every commit; inside a commit
/// snapshot it never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct File {
    pub hash: ContentHash,
    pub path: String,
}

impl File {
    /// Order two files by path, ignoring ASCII case
    ///
    /// Snapshots, the index before a commit, and both inputs of the diff engine
    /// are all sorted with this ordering.
    pub fn cmp_path(&self, other: &File) -> Ordering {
        compare_paths(&self.path, &other.path)
    }
}

/// Case-insensitive byte-wise path ordering
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|byte| byte.to_ascii_lowercase());
    let b = b.bytes().map(|byte| byte.to_ascii_lowercase());

    a.cmp(b)
}

/// Sort a list of files in place by case-insensitive path
pub fn sort_files(files: &mut [File]) {
    files.sort_by(File::cmp_path);
}
