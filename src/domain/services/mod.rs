//! Domain Services
//!
//! Pure logic operating on entities and value objects. No IO.

pub mod differ;
pub mod path_mapping;
pub mod rewriter;

pub use differ::{diff_snapshots, DigestChange, SnapshotDiff};
pub use path_mapping::TreeMapping;
pub use rewriter::{rewrite_digests, Rewrite};
