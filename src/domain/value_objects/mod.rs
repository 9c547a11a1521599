//! Value Objects
//!
//! Immutable types defined by their content rather than identity.

mod content_hash;
mod integrity;

pub use content_hash::ContentHash;
pub use integrity::Integrity;
