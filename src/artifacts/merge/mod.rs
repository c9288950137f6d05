//! Branch merging
//!
//! A merge folds the head snapshot of another branch into the current index.
//! Files present on both sides are conflicts and are settled by the
//! caller-supplied [`resolution::Resolution`] list; the result is then
//! committed with the other branch's head as second parent.

pub mod merge_join;
pub mod resolution;
