//! Asset and template scanning
//!
//! Glob-based recursive enumeration via the `ignore` walker. Ignore files
//! are deliberately not honoured: compiled assets are usually git-ignored
//! but still have to be hashed. Symlinks are followed and reported under
//! the link's own path.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::error::{AssetsError, AssetsResult};

/// List files under `root` matching any of `globs`, sorted by path.
///
/// Globs are relative to `root` (`**/*.css`). A missing root yields an
/// empty list.
pub fn scan_files<S: AsRef<str>>(root: &Path, globs: &[S]) -> AssetsResult<Vec<PathBuf>> {
    if !root.is_dir() || globs.is_empty() {
        return Ok(Vec::new());
    }

    let mut overrides = OverrideBuilder::new(root);
    for glob in globs {
        overrides.add(glob.as_ref())?;
    }
    let overrides = overrides
        .build()
        .map_err(|e| AssetsError::Walk(e.to_string()))?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .overrides(overrides)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
