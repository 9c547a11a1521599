//! Domain Entities

mod manifest;
mod snapshot;

pub use manifest::{IconEntry, IconManifest};
pub use snapshot::IntegritySnapshot;
