//! webassets - build-time asset tooling for the web frontend
//!
//! Two tools share this library:
//!
//! - `create_icons` clones an icon repository, stages the icons named in a
//!   manifest and bundles them into one SVG symbol sprite.
//! - `resources` compiles Sass and JS sources, then rewrites the
//!   subresource-integrity digests embedded in templates for every asset
//!   whose content changed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{ResourceCompiler, ResourcesReport, SpriteBuilder, SpriteReport};
pub use config::{Config, IconsConfig, ResourcesConfig};
pub use domain::value_objects::Integrity;
pub use error::{AssetsError, AssetsResult};
