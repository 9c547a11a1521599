//! Scratch directory tracking for interrupt cleanup
//!
//! `TempDir` only cleans up when dropped, which never happens when the
//! process is killed by Ctrl-C. The tracker shares the active scratch
//! path with a signal handler so it can remove it before exiting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared handle to the scratch directory currently in use, if any
#[derive(Debug, Clone, Default)]
pub struct ScratchTracker {
    active: Arc<Mutex<Option<PathBuf>>>,
}

impl ScratchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, path: &Path) {
        if let Ok(mut active) = self.active.lock() {
            *active = Some(path.to_path_buf());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut active) = self.active.lock() {
            *active = None;
        }
    }

    pub fn active(&self) -> Option<PathBuf> {
        self.active.lock().ok().and_then(|active| active.clone())
    }

    /// Remove the tracked directory and stop tracking it.
    ///
    /// Returns the path that was removed.
    pub fn remove_active(&self) -> io::Result<Option<PathBuf>> {
        let taken = match self.active.lock() {
            Ok(mut active) => active.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match taken {
            Some(path) => {
                match fs::remove_dir_all(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e),
                }
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}
