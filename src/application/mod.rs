//! Application Layer
//!
//! Use cases that orchestrate the two tools:
//!
//! - `SpriteBuilder` - clone the icon repository, stage manifest icons, build the sprite
//! - `ResourceCompiler` - compile Sass and JS, then resync template integrity digests

pub mod icons;
pub mod resources;

pub use icons::{SpriteBuilder, SpriteReport};
pub use resources::{CompiledSource, ResourceCompiler, ResourcesReport, TemplateUpdate};
