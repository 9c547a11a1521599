//! Domain Layer
//!
//! Pure logic for integrity digests, manifests and template rewriting.
//!
//! ## Structure
//!
//! - `entities/` - Icon manifest, integrity snapshots
//! - `value_objects/` - Integrity digest, content hash
//! - `services/` - Snapshot diffing, template rewriting, tree mapping
//! - `ports/` - Interface definitions for subprocesses and progress events
//!
//! Hashing reads file bytes; everything else here is free of IO.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
