//! Commit identifier
//!
//! Commit ids are six lowercase hexadecimal characters derived from the commit
//! message and the change set against the parent snapshot. They are not
//! content hashes: identical messages with identical path-level changes give
//! identical ids, and unrelated histories can collide.
//!
//! ## Derivation
//!
//! 1. Start from the sum of the message bytes, modulo 1000.
//! 2. For every change, in diff order, add a constant for its kind, then fold
//!    each byte of the affected path in with
//!    `id = (id * (byte % 37)) % 15485863 + 1`.
//! 3. Render as `{:06x}`.

use crate::artifacts::diff::change::Change;
use crate::artifacts::objects::COMMIT_ID_LENGTH;
use serde::{Deserialize, Serialize};

const MESSAGE_MODULUS: u64 = 1000;
const FOLD_MODULUS: u64 = 15_485_863;
const FOLD_DIVISOR: u64 = 37;

const ADDITION_WEIGHT: u64 = 376_591;
const DELETION_WEIGHT: u64 = 85_973;
const MODIFICATION_WEIGHT: u64 = 9_573_681;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id
    ///
    /// Accepts exactly six hexadecimal characters. Uppercase digits are
    /// normalised to lowercase, which is how ids are always rendered.
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("Invalid commit ID length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid commit ID characters: {}", id);
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Derive the id of a commit from its message and its change set
    pub fn derive(message: &str, changes: &[Change]) -> Self {
        let mut id = message
            .bytes()
            .fold(0, |id, byte| (id + u64::from(byte)) % MESSAGE_MODULUS);

        for change in changes {
            let (weight, file) = match change {
                Change::Added(file) => (ADDITION_WEIGHT, file),
                Change::Deleted(file) => (DELETION_WEIGHT, file),
                Change::Modified { new, .. } => (MODIFICATION_WEIGHT, new),
            };

            id += weight;
            for byte in file.path.bytes() {
                id = (id * (u64::from(byte) % FOLD_DIVISOR)) % FOLD_MODULUS + 1;
            }
        }

        Self(format!("{:0width$x}", id, width = COMMIT_ID_LENGTH))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
