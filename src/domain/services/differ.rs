//! Snapshot differ
//!
//! Compares the before/after integrity snapshots of a compilation run.

use std::path::PathBuf;

use crate::domain::entities::IntegritySnapshot;
use crate::domain::value_objects::Integrity;

/// An asset whose digest changed between snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestChange {
    pub path: PathBuf,
    pub old: Integrity,
    pub new: Integrity,
}

/// Result of comparing two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Present in both snapshots with different digests, in path order
    pub changed: Vec<DigestChange>,
    /// Only present after; there is no old digest to replace
    pub added: Vec<PathBuf>,
    /// Only present before
    pub removed: Vec<PathBuf>,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }
}

pub fn diff_snapshots(before: &IntegritySnapshot, after: &IntegritySnapshot) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();

    for (path, new) in after.iter() {
        match before.get(path) {
            Some(old) if old == new => {}
            Some(old) => diff.changed.push(DigestChange {
                path: path.clone(),
                old: old.clone(),
                new: new.clone(),
            }),
            None => diff.added.push(path.clone()),
        }
    }

    diff.removed = before
        .iter()
        .filter(|(path, _)| !after.contains(path))
        .map(|(path, _)| path.clone())
        .collect();

    diff
}
