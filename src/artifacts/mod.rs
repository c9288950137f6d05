//! Version-control data structures and algorithms
//!
//! - `branch`: branch names and the branch entity
//! - `diff`: the merge-join diff over sorted file lists
//! - `merge`: conflict resolutions and the merge join
//! - `objects`: files, commits, commit ids and checksums

pub mod branch;
pub mod diff;
pub mod merge;
pub mod objects;
