//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and file system I/O.
//!
//! ## Structure
//!
//! - `fs/` - Atomic writes and copies
//! - `process` - `SystemRunner` for external tools
//! - `scan` - Glob-based file enumeration
//! - `scratch` - Scratch directory tracking for interrupt cleanup
//! - `toolchain` - Compiler discovery on `PATH`

pub mod fs;
pub mod process;
pub mod scan;
pub mod scratch;
pub mod toolchain;

pub use process::SystemRunner;
pub use scan::scan_files;
pub use scratch::ScratchTracker;
pub use toolchain::{find_program, Toolchain};
