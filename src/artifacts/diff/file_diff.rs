use crate::artifacts::diff::change::Change;
use crate::artifacts::objects::file::File;
use std::cmp::Ordering;

/// Change set between two file lists, in path order
pub type ChangeSet = Vec<Change>;

/// Compute the changes that turn `old` into `new`
///
/// Both lists must already be sorted by case-insensitive path. A single pass
/// walks the two lists side by side:
///
/// - a name present in both with differing hashes is a modification,
///   with equal hashes it produces nothing
/// - a name that only appears in `new` is an addition
/// - a name that only appears in `old` is a deletion
///
/// Changes come out in path order, so applying them to `old` rebuilds `new`
/// in the same order.
pub fn diff_files(old: &[File], new: &[File]) -> ChangeSet {
    let mut changes = Vec::new();
    let mut old_iter = old.iter().peekable();
    let mut new_iter = new.iter().peekable();

    loop {
        match (old_iter.peek(), new_iter.peek()) {
            (None, None) => break,
            (None, Some(_)) => {
                changes.extend(new_iter.by_ref().cloned().map(Change::Added));
            }
            (Some(_), None) => {
                changes.extend(old_iter.by_ref().cloned().map(Change::Deleted));
            }
            (Some(&old_file), Some(&new_file)) => match old_file.cmp_path(new_file) {
                Ordering::Equal => {
                    if old_file.hash != new_file.hash {
                        changes.push(Change::Modified {
                            old: old_file.clone(),
                            new: new_file.clone(),
                        });
                    }
                    old_iter.next();
                    new_iter.next();
                }
                Ordering::Greater => {
                    changes.push(Change::Added(new_file.clone()));
                    new_iter.next();
                }
                Ordering::Less => {
                    changes.push(Change::Deleted(old_file.clone()));
                    old_iter.next();
                }
            },
        }
    }

    changes
}
