//! Core repository components
//!
//! - `database`: content store for blobs and the state file
//! - `index`: the working set staged for the next commit
//! - `refs`: branches and the active branch
//! - `repository`: the repository entity tying the areas together
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
