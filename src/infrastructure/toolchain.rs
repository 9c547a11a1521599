//! Compiler toolchain discovery
//!
//! Resolves the CSS and JS compilers once, up front, so the resource
//! compiler receives them as plain values instead of consulting the
//! environment itself.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Resolved compiler locations; `None` means "not installed"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolchain {
    pub css_tool: Option<PathBuf>,
    pub js_tool: Option<PathBuf>,
}

impl Toolchain {
    pub fn new(css_tool: Option<PathBuf>, js_tool: Option<PathBuf>) -> Self {
        Self { css_tool, js_tool }
    }

    /// Resolve both tools from the current process `PATH`
    pub fn discover(css: &str, js: &str) -> Self {
        let path_var = std::env::var_os("PATH");
        Self::discover_in(css, js, path_var.as_deref())
    }

    /// Resolve both tools against an explicit `PATH` value
    pub fn discover_in(css: &str, js: &str, path_var: Option<&OsStr>) -> Self {
        Self {
            css_tool: find_program(css, path_var),
            js_tool: find_program(js, path_var),
        }
    }
}

/// Locate a program by name on `path_var`, or accept it directly when it
/// already names an executable file.
pub fn find_program(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let cwd = std::env::current_dir().unwrap_or_default();
    which::which_in(name, path_var, cwd).ok()
}
