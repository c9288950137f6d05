use crate::artifacts::objects::file::File;
use colored::Colorize;

/// One entry of a change set between two file lists
///
/// The removed/added pair of the data model maps onto three variants: both
/// sides present is a modification, only the added side an addition, only
/// the removed side a deletion. A change with neither side cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(File),
    Deleted(File),
    Modified { old: File, new: File },
}

impl Change {
    pub fn removed(&self) -> Option<&File> {
        match self {
            Change::Deleted(file) => Some(file),
            Change::Modified { old, .. } => Some(old),
            Change::Added(_) => None,
        }
    }

    pub fn added(&self) -> Option<&File> {
        match self {
            Change::Added(file) => Some(file),
            Change::Modified { new, .. } => Some(new),
            Change::Deleted(_) => None,
        }
    }

    /// Path the change is reported under
    pub fn path(&self) -> &str {
        match self {
            Change::Added(file) | Change::Deleted(file) => &file.path,
            Change::Modified { old, .. } => &old.path,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Change::Added(_) => '+',
            Change::Deleted(_) => '-',
            Change::Modified { .. } => '/',
        }
    }

    /// Render the change as a single `show` line, optionally coloured
    pub fn to_line(&self, color: bool) -> String {
        let marker = self.marker().to_string();
        let marker = match (color, self) {
            (false, _) => marker,
            (true, Change::Added(_)) => marker.green().to_string(),
            (true, Change::Deleted(_)) => marker.red().to_string(),
            (true, Change::Modified { .. }) => marker.yellow().to_string(),
        };

        match self {
            Change::Added(file) | Change::Deleted(file) => {
                format!("    {} {}", marker, file.path)
            }
            Change::Modified { old, new } => format!(
                "    {} {} [{:>10} -> {:>10}]",
                marker, old.path, old.hash, new.hash
            ),
        }
    }
}
