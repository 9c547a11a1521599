//! Shared helpers for driving the binaries in isolated project directories.

#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse every stdout line as a JSON object
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON ({e}): {line}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Run `bin` in `cwd` with `PATH` replaced by `path` and no
/// `WEBASSETS_*` overrides leaking in from the caller.
pub fn run(bin: &str, args: &[&str], cwd: &Path, path: impl AsRef<OsStr>) -> TestResult {
    let output = Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("PATH", path)
        .env("NO_COLOR", "1")
        .env_remove("WEBASSETS_ICON_REPOSITORY")
        .env_remove("WEBASSETS_GIT")
        .env_remove("WEBASSETS_SPRITE_TOOL")
        .env_remove("WEBASSETS_SASS")
        .env_remove("WEBASSETS_BABEL")
        .output()
        .unwrap();

    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// `PATH` value with `bin_dir` first, followed by the system directories
/// the fake tool scripts need (`sh`, `mkdir`, `cat`, ...).
pub fn path_with(bin_dir: &Path) -> String {
    format!("{}:/usr/bin:/bin", bin_dir.display())
}

/// Write an executable shell script named `name` into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\nset -e\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Write `content` at `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Stand-in for `git clone --depth=1 URL DEST` that fabricates a small
/// icon repository.
pub const FAKE_GIT: &str = r#"dest="$4"
mkdir -p "$dest/svg"
for name in home account-outline alert-circle; do
  printf '<svg><path d="%s"/></svg>' "$name" > "$dest/svg/$name.svg"
done
"#;

/// Stand-in for `svg-sprite -s --symbol-dest DIR FILES...` that emits one
/// `<symbol>` per input file, named after the file stem.
pub const FAKE_SVG_SPRITE: &str = r#"shift
shift
dest="$1"
shift
mkdir -p "$dest/svg"
out="$dest/svg/sprite.symbol.svg"
printf '<svg xmlns="http://www.w3.org/2000/svg">' > "$out"
for f in "$@"; do
  printf '<symbol id="%s"/>' "$(basename "$f" .svg)" >> "$out"
done
printf '</svg>\n' >> "$out"
"#;

/// Stand-in for `sass -s STYLE SRC:DST`.
pub const FAKE_SASS: &str = r#"pair="$3"
src="${pair%%:*}"
dst="${pair#*:}"
mkdir -p "$(dirname "$dst")"
{ printf '/*compiled*/'; cat "$src"; } > "$dst"
"#;

/// Stand-in for `babel [-s true] -d DST SRC`.
pub const FAKE_BABEL: &str = r#"while [ $# -gt 2 ]; do shift; done
dst="$1"
src="$2"
mkdir -p "$dst"
for f in "$src"/*.js; do
  { printf '"use strict";'; cat "$f"; } > "$dst/$(basename "$f")"
done
"#;
