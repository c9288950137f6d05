//! Repository operations
//!
//! Each user-facing operation lives in its own module as an
//! `impl Repository` block. They are all porcelain: the building blocks they
//! compose live in `areas` and `artifacts`.

pub mod porcelain;
