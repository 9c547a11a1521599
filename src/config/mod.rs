//! Configuration module for webassets
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WEBASSETS_*)
//! 3. Config file (`webassets.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_overrides, ConfigWarning,
};
pub use types::{Config, IconsConfig, ResourcesConfig, DEFAULT_CONFIG_FILE};
