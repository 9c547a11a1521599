//! Error types for webassets
//!
//! Uses `thiserror` for library errors; the binaries wrap them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for webassets operations
pub type AssetsResult<T> = Result<T, AssetsError>;

/// Main error type for webassets operations
#[derive(Error, Debug)]
pub enum AssetsError {
    /// Manifest file does not exist
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest could not be parsed or is structurally invalid
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An icon named in the manifest is missing from the icon repository
    #[error("icon '{icon}' not found at {path}")]
    IconSourceNotFound { icon: String, path: PathBuf },

    /// External tool exited with a non-zero status
    #[error("{tool} failed with exit code: {code:?}")]
    ToolFailed { tool: String, code: Option<i32> },

    /// External tool could not be started at all
    #[error("could not run {tool}: {message}")]
    ToolSpawn { tool: String, message: String },

    /// External tool succeeded but did not produce the expected file
    #[error("{tool} did not produce {path}")]
    MissingOutput { tool: String, path: PathBuf },

    /// Declared source asset is not inside the source tree
    #[error("source '{path}' is not inside the source tree '{root}'")]
    InvalidSourcePath { path: PathBuf, root: PathBuf },

    /// Directory walk failed
    #[error("walk error: {0}")]
    Walk(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetsError {
    /// Stable machine-readable error class, used in JSON error events.
    pub fn code(&self) -> &'static str {
        match self {
            AssetsError::InvalidManifest { .. } | AssetsError::InvalidConfig { .. } => {
                "parse_error"
            }
            AssetsError::ManifestNotFound { .. } | AssetsError::IconSourceNotFound { .. } => {
                "not_found"
            }
            AssetsError::ToolFailed { .. }
            | AssetsError::ToolSpawn { .. }
            | AssetsError::MissingOutput { .. } => "external_tool",
            AssetsError::InvalidSourcePath { .. } => "invalid_path",
            AssetsError::Walk(_) | AssetsError::Io(_) => "io",
        }
    }
}

impl From<ignore::Error> for AssetsError {
    fn from(err: ignore::Error) -> Self {
        AssetsError::Walk(err.to_string())
    }
}
