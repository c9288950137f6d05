//! Diffing sorted file lists
//!
//! The same merge-join powers three callers: the commit builder (head snapshot
//! against the refreshed index), `show` (a commit against its first parent)
//! and the commit id derivation that consumes the resulting change set.

pub mod change;
pub mod file_diff;
