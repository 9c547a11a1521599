//! Integrity snapshot entity
//!
//! Digests of every compiled asset at one point in time, keyed by path.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Integrity;
use crate::error::AssetsResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegritySnapshot {
    digests: BTreeMap<PathBuf, Integrity>,
}

impl IntegritySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash every file in `paths`
    pub fn capture(paths: &[PathBuf]) -> AssetsResult<Self> {
        let mut snapshot = Self::new();
        for path in paths {
            snapshot.insert(path.clone(), Integrity::from_file(path)?);
        }
        Ok(snapshot)
    }

    pub fn insert(&mut self, path: PathBuf, digest: Integrity) {
        self.digests.insert(path, digest);
    }

    pub fn get(&self, path: &Path) -> Option<&Integrity> {
        self.digests.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.digests.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Entries in path order
    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, Integrity> {
        self.digests.iter()
    }
}
