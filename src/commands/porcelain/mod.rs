//! Porcelain commands
//!
//! - `init`: create the storage directories
//! - `add` / `rm`: change the tracked file set
//! - `commit`: snapshot the index into a new commit
//! - `branch`: create and list branches
//! - `checkout`: switch the active branch
//! - `reset`: move the active branch to any commit
//! - `merge`: fold another branch into the active one
//! - `show` / `log`: report on commits

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod show;
