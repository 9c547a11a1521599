//! Icon manifest entity
//!
//! A manifest is a TOML document with a top-level `icons` table mapping
//! icon names (the sprite symbol ids) to paths inside the icon repository,
//! without the `.svg` extension:
//!
//! ```toml
//! [icons]
//! home = "home"
//! account = "account-outline"
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{AssetsError, AssetsResult};

/// One icon selected by the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Symbol id in the generated sprite
    pub name: String,
    /// Path inside the repository's svg directory, without extension
    pub path: String,
}

/// Ordered icon selection, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconManifest {
    entries: Vec<IconEntry>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    icons: toml::Table,
}

impl IconManifest {
    /// Load a manifest from disk
    pub fn load(path: &Path) -> AssetsResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AssetsError::ManifestNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(path, &content)
    }

    /// Parse manifest content; `file` is only used for error messages.
    pub fn parse(file: &Path, content: &str) -> AssetsResult<Self> {
        let invalid = |message: String| AssetsError::InvalidManifest {
            file: file.to_path_buf(),
            message,
        };

        let raw: RawManifest = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

        let mut entries = Vec::with_capacity(raw.icons.len());
        for (name, value) in raw.icons {
            let path = value
                .as_str()
                .ok_or_else(|| invalid(format!("icon '{}' must map to a string path", name)))?
                .to_string();
            validate_name(&name).map_err(&invalid)?;
            validate_path(&name, &path).map_err(&invalid)?;
            entries.push(IconEntry { name, path });
        }

        if entries.is_empty() {
            return Err(invalid("manifest declares no icons".to_string()));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The name becomes a file name in the staging directory.
fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(format!("'{}' is not a valid icon name", name));
    }
    Ok(())
}

fn validate_path(name: &str, path: &str) -> Result<(), String> {
    let p = PathBuf::from(path);
    let escapes = p
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if path.is_empty() || escapes {
        return Err(format!(
            "icon '{}' has path '{}' outside the icon repository",
            name, path
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(content: &str) -> AssetsResult<IconManifest> {
        IconManifest::parse(Path::new("icons.toml"), content)
    }

    #[test]
    fn parses_icons_in_document_order() {
        let manifest = parse(
            r#"
[icons]
home = "home"
account = "account-outline"
alert = "alert-circle"
"#,
        )
        .unwrap();

        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, vec!["home", "account", "alert"]);
        assert_eq!(manifest.entries()[1].path, "account-outline");
    }

    #[test]
    fn missing_icons_table_is_invalid() {
        let err = parse("[other]\na = \"b\"\n").unwrap_err();
        assert!(matches!(err, AssetsError::InvalidManifest { .. }));
    }

    #[test]
    fn malformed_toml_is_invalid() {
        let err = parse("[icons\nhome = ").unwrap_err();
        assert_eq!(err.code(), "parse_error");
    }

    #[test]
    fn non_string_value_is_invalid() {
        let err = parse("[icons]\nhome = 3\n").unwrap_err();
        assert!(err.to_string().contains("must map to a string path"));
    }

    #[test]
    fn empty_icons_table_is_invalid() {
        let err = parse("[icons]\n").unwrap_err();
        assert!(err.to_string().contains("no icons"));
    }

    #[test]
    fn rejects_parent_dir_paths() {
        let err = parse("[icons]\nhome = \"../secret\"\n").unwrap_err();
        assert!(err.to_string().contains("outside the icon repository"));
    }

    #[test]
    fn rejects_absolute_paths() {
        let err = parse("[icons]\nhome = \"/etc/passwd\"\n").unwrap_err();
        assert!(matches!(err, AssetsError::InvalidManifest { .. }));
    }

    #[test]
    fn rejects_names_with_separators() {
        let err = parse("[icons]\n\"a/b\" = \"home\"\n").unwrap_err();
        assert!(err.to_string().contains("not a valid icon name"));
    }

    #[test]
    fn allows_nested_paths() {
        let manifest = parse("[icons]\nhome = \"outline/home\"\n").unwrap();
        assert_eq!(manifest.entries()[0].path, "outline/home");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = IconManifest::load(&dir.path().join("icons.toml")).unwrap_err();
        assert!(matches!(err, AssetsError::ManifestNotFound { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        fs::write(&path, "[icons]\nhome = \"home\"\n").unwrap();

        let manifest = IconManifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 1);
    }
}
