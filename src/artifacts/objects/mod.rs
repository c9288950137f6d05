//! Version-control object types
//!
//! Everything the repository records is built from a handful of small types:
//!
//! - **File**: a tracked path together with the checksum of its content
//! - **Commit**: an immutable, sorted snapshot of files plus history links
//! - **CommitId**: the six-digit hexadecimal identifier of a commit
//! - **Checksum**: the non-cryptographic sums used for paths and contents
//!
//! None of the identifiers are collision-free. Two distinct contents may share
//! a checksum and two distinct histories may share a commit id; neither case is
//! detected.

pub mod checksum;
pub mod commit;
pub mod commit_id;
pub mod file;

/// Length of a commit id in hexadecimal characters
pub const COMMIT_ID_LENGTH: usize = 6;
