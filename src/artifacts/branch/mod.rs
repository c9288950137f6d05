pub mod branch_name;
pub mod branch_ref;

/// Branch every new repository starts on
pub const DEFAULT_BRANCH: &str = "master";

/// Any character outside alphanumerics, `_`, `-` and `/` makes a name invalid
pub const INVALID_BRANCH_NAME_REGEX: &str = r"[^A-Za-z0-9_/\-]";
