//! Sprite build result

use std::path::PathBuf;

/// Result of a successful sprite build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteReport {
    /// Symbol ids, in manifest order
    pub icons: Vec<String>,
    /// Where the sprite was written
    pub output: PathBuf,
}

impl SpriteReport {
    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }
}
