//! File System Helpers
//!
//! Local disk operations shared by both use cases.

mod local;

pub use local::{copy_file, write_atomic};
