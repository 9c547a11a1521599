//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AssetsResult;

use super::loader;

/// Config file looked up in the project root when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "webassets.toml";

/// Icon sprite builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Repository holding the source SVGs
    pub repository: String,
    /// Version-control client used to clone it
    pub git: String,
    /// Sprite generator
    pub sprite_tool: String,
    /// Directory inside the repository holding the SVGs
    pub svg_dir: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            repository: "https://github.com/Templarian/MaterialDesign-SVG".to_string(),
            git: "git".to_string(),
            sprite_tool: "svg-sprite".to_string(),
            svg_dir: "svg".to_string(),
        }
    }
}

/// Resource compiler configuration
///
/// `static_dir`, `source_dir`, `templates_dir` and the source lists are
/// relative to `web_root`, which is itself relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub web_root: PathBuf,
    pub static_dir: PathBuf,
    pub source_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub asset_globs: Vec<String>,
    pub template_globs: Vec<String>,
    pub css_sources: Vec<PathBuf>,
    pub js_sources: Vec<PathBuf>,
    /// Sass compiler name (searched on PATH) or path
    pub sass: String,
    /// Babel name (searched on PATH) or path
    pub babel: String,
    pub sass_style: String,
    pub source_maps: bool,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("webserver/web"),
            static_dir: PathBuf::from("static"),
            source_dir: PathBuf::from("src"),
            templates_dir: PathBuf::from("templates"),
            asset_globs: vec!["**/*.js".to_string(), "**/*.css".to_string()],
            template_globs: vec!["**/*.html.tera".to_string()],
            css_sources: vec![
                PathBuf::from("src/css/style.scss"),
                PathBuf::from("src/css/dark-style.scss"),
            ],
            js_sources: vec![PathBuf::from("src/js/")],
            sass: "sass".to_string(),
            babel: "babel".to_string(),
            sass_style: "compressed".to_string(),
            source_maps: true,
        }
    }
}

impl ResourcesConfig {
    pub fn web_root(&self, root: &Path) -> PathBuf {
        root.join(&self.web_root)
    }

    pub fn static_root(&self, root: &Path) -> PathBuf {
        self.web_root(root).join(&self.static_dir)
    }

    pub fn source_root(&self, root: &Path) -> PathBuf {
        self.web_root(root).join(&self.source_dir)
    }

    pub fn templates_root(&self, root: &Path) -> PathBuf {
        self.web_root(root).join(&self.templates_dir)
    }

    pub fn css_source_paths(&self, root: &Path) -> Vec<PathBuf> {
        let web = self.web_root(root);
        self.css_sources.iter().map(|s| web.join(s)).collect()
    }

    pub fn js_source_paths(&self, root: &Path) -> Vec<PathBuf> {
        let web = self.web_root(root);
        self.js_sources.iter().map(|s| web.join(s)).collect()
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub icons: IconsConfig,
    pub resources: ResourcesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetsResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }
}
