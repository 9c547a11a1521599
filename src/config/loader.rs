//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetsError, AssetsResult};

use super::types::{Config, DEFAULT_CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())
    }
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Load an explicit config file, or `{root}/webassets.toml` when present,
/// or the defaults. Environment overrides are applied last.
pub fn load_or_default(
    explicit: Option<&Path>,
    root: &Path,
) -> AssetsResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let candidate = root.join(DEFAULT_CONFIG_FILE);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (WEBASSETS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (the environment, in practice)
pub fn with_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(repo) = non_empty("WEBASSETS_ICON_REPOSITORY") {
        config.icons.repository = repo;
    }
    if let Some(git) = non_empty("WEBASSETS_GIT") {
        config.icons.git = git;
    }
    if let Some(tool) = non_empty("WEBASSETS_SPRITE_TOOL") {
        config.icons.sprite_tool = tool;
    }
    if let Some(sass) = non_empty("WEBASSETS_SASS") {
        config.resources.sass = sass;
    }
    if let Some(babel) = non_empty("WEBASSETS_BABEL") {
        config.resources.babel = babel;
    }

    config
}
