//! A small single-user version control system
//!
//! Files are tracked by a cheap additive checksum, commits snapshot the sorted
//! index, and branches are movable heads into an append-only commit table.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
