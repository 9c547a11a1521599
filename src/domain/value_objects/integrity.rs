//! Integrity Digest Value Object
//!
//! The base64-encoded SHA-384 digest that subresource-integrity attributes
//! embed in markup (`integrity="sha384-..."`).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha384};

/// Integrity digest value object
///
/// Holds the bare base64 string (standard alphabet, padded). Templates
/// embed it after a `sha384-` prefix, and rewriting only ever touches
/// the bare part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Integrity(String);

impl Integrity {
    /// Algorithm label used in SRI attributes
    pub const ALGORITHM: &'static str = "sha384";

    /// Compute the digest of raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(Sha384::digest(bytes)))
    }

    /// Compute the digest of a file's full contents
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// The bare base64 digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full SRI form, e.g. `sha384-OLBg...`
    pub fn to_sri(&self) -> String {
        format!("{}-{}", Self::ALGORITHM, self.0)
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Integrity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
