use crate::artifacts::merge::resolution::{Resolution, find_resolution};
use crate::artifacts::objects::file::File;
use derive_new::new;
use std::cmp::Ordering;

/// Overwrite the working copy of `target` with the bytes of `source`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ResolvedCopy {
    pub source: String,
    pub target: String,
}

/// Outcome of joining the current index with another branch's snapshot
///
/// `index` replaces the current index; `copies` are the working-directory
/// writes requested by resolutions, in join order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    pub index: Vec<File>,
    pub copies: Vec<ResolvedCopy>,
}

impl MergePlan {
    // Files only present on the incoming side go through the resolution list
    // too, even though they do not conflict with anything.
    fn take_incoming(&mut self, file: &File, resolutions: &[Resolution]) {
        match find_resolution(resolutions, &file.path) {
            Some(Resolution {
                replacement: None, ..
            }) => {}
            Some(Resolution {
                replacement: Some(replacement),
                ..
            }) => {
                self.copies
                    .push(ResolvedCopy::new(replacement.clone(), file.path.clone()));
                self.index.push(file.clone());
            }
            None => self.index.push(file.clone()),
        }
    }

    fn take_conflict(&mut self, current: &File, resolutions: &[Resolution]) {
        match find_resolution(resolutions, &current.path) {
            Some(Resolution {
                replacement: None, ..
            }) => {}
            Some(Resolution {
                replacement: Some(replacement),
                ..
            }) => {
                // the recorded hash is stale until the next commit rehashes it
                self.copies
                    .push(ResolvedCopy::new(replacement.clone(), current.path.clone()));
                self.index.push(current.clone());
            }
            None => self.index.push(current.clone()),
        }
    }
}

/// Join the current index with the incoming snapshot
///
/// Both lists must be sorted by case-insensitive path.
///
/// - a name on both sides is a conflict: without a resolution the current
///   entry wins, a resolution without replacement drops the file, one with a
///   replacement keeps the current entry and overwrites its working copy
/// - a name only on the incoming side is added unless a resolution drops it;
///   a replacement is copied over it first
/// - a name only in the current index is kept untouched
pub fn merge_join(current: &[File], incoming: &[File], resolutions: &[Resolution]) -> MergePlan {
    let mut plan = MergePlan::default();
    let mut current_iter = current.iter().peekable();
    let mut incoming_iter = incoming.iter().peekable();

    loop {
        match (current_iter.peek(), incoming_iter.peek()) {
            (None, None) => break,
            (Some(_), None) => {
                plan.index.extend(current_iter.by_ref().cloned());
            }
            (None, Some(&incoming_file)) => {
                plan.take_incoming(incoming_file, resolutions);
                incoming_iter.next();
            }
            (Some(&current_file), Some(&incoming_file)) => {
                match current_file.cmp_path(incoming_file) {
                    Ordering::Equal => {
                        plan.take_conflict(current_file, resolutions);
                        current_iter.next();
                        incoming_iter.next();
                    }
                    Ordering::Less => {
                        plan.index.push(current_file.clone());
                        current_iter.next();
                    }
                    Ordering::Greater => {
                        plan.take_incoming(incoming_file, resolutions);
                        incoming_iter.next();
                    }
                }
            }
        }
    }

    plan
}
