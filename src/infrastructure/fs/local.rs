//! Local file operations

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::AssetsResult;

/// Write content to a file atomically
///
/// Uses tempfile + rename in the target's directory. An existing file's
/// permissions are carried over to the replacement. Symlinks are written
/// through: the file they point at is replaced and the link is kept.
pub fn write_atomic(path: &Path, content: &[u8]) -> AssetsResult<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = target.as_path();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Copy a file, overwriting the destination
pub fn copy_file(from: &Path, to: &Path) -> AssetsResult<()> {
    fs::copy(from, to)?;
    Ok(())
}
