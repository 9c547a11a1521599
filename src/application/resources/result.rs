//! Resource compile result types

use std::path::PathBuf;

use crate::domain::ports::AssetClass;
use crate::domain::services::DigestChange;

/// A source handed to a compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSource {
    pub class: AssetClass,
    pub source: PathBuf,
    pub output: PathBuf,
}

/// A template rewritten with new digests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUpdate {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Result of a compile-and-resync run
#[derive(Debug, Clone, Default)]
pub struct ResourcesReport {
    /// Sources compiled, in order
    pub compiled: Vec<CompiledSource>,
    /// Asset classes not compiled because their tool is missing
    pub skipped: Vec<AssetClass>,
    /// Assets whose digest changed
    pub changed: Vec<DigestChange>,
    /// Assets created by this run
    pub added: Vec<PathBuf>,
    /// Assets that disappeared during this run
    pub removed: Vec<PathBuf>,
    pub templates_scanned: usize,
    pub templates_updated: Vec<TemplateUpdate>,
}

impl ResourcesReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing on disk needed to be resynced
    pub fn is_up_to_date(&self) -> bool {
        self.changed.is_empty() && self.templates_updated.is_empty()
    }

    pub fn replacements(&self) -> usize {
        self.templates_updated.iter().map(|t| t.replacements).sum()
    }
}
