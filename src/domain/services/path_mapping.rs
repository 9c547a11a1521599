//! Source → static tree mapping
//!
//! Compiled output lives at the same relative location under the static
//! tree as its source does under the source tree:
//! `web/src/css/style.scss` → `web/static/css/style.css`.

use std::path::{Path, PathBuf};

use crate::error::{AssetsError, AssetsResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeMapping {
    source_root: PathBuf,
    static_root: PathBuf,
}

impl TreeMapping {
    pub fn new(source_root: impl Into<PathBuf>, static_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            static_root: static_root.into(),
        }
    }

    /// Map a source path into the static tree, keeping its name.
    pub fn map(&self, source: &Path) -> AssetsResult<PathBuf> {
        let relative =
            source
                .strip_prefix(&self.source_root)
                .map_err(|_| AssetsError::InvalidSourcePath {
                    path: source.to_path_buf(),
                    root: self.source_root.clone(),
                })?;
        Ok(self.static_root.join(relative))
    }

    /// Map a source file into the static tree with a new extension.
    pub fn map_with_extension(&self, source: &Path, extension: &str) -> AssetsResult<PathBuf> {
        let mut target = self.map(source)?;
        target.set_extension(extension);
        Ok(target)
    }
}
