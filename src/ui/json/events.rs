//! JSON event shapes for `--json` output.
//!
//! Every line carries an `event` discriminator; paths are emitted as
//! strings.

use std::path::Path;

use serde::Serialize;

use crate::domain::ports::AssetEvent;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes, with a command-specific summary.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(flatten)]
    pub summary: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn success(command: &'a str, summary: T) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            summary,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Borrowed wire form of an [`AssetEvent`].
///
/// Template contents are left out; only the replacement count is sent.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AssetEventJson<'a> {
    ConfigWarning {
        message: &'a str,
    },
    RepositoryCloning {
        url: &'a str,
    },
    IconStaged {
        name: &'a str,
        source: &'a Path,
    },
    SpriteGenerating {
        icon_count: usize,
    },
    SpriteWritten {
        path: &'a Path,
    },
    ToolMissing {
        tool: &'a str,
        class: &'static str,
    },
    Compiling {
        class: &'static str,
        source: &'a Path,
        output: &'a Path,
    },
    DigestChanged {
        path: &'a Path,
    },
    AssetAdded {
        path: &'a Path,
    },
    TemplateUpdated {
        path: &'a Path,
        replacements: usize,
    },
}

impl<'a> From<&'a AssetEvent> for AssetEventJson<'a> {
    fn from(event: &'a AssetEvent) -> Self {
        match event {
            AssetEvent::ConfigWarning { message } => Self::ConfigWarning { message },
            AssetEvent::RepositoryCloning { url } => Self::RepositoryCloning { url },
            AssetEvent::IconStaged { name, source } => Self::IconStaged { name, source },
            AssetEvent::SpriteGenerating { icon_count } => Self::SpriteGenerating {
                icon_count: *icon_count,
            },
            AssetEvent::SpriteWritten { path } => Self::SpriteWritten { path },
            AssetEvent::ToolMissing { tool, class } => Self::ToolMissing {
                tool,
                class: class.as_str(),
            },
            AssetEvent::Compiling {
                class,
                source,
                output,
            } => Self::Compiling {
                class: class.as_str(),
                source,
                output,
            },
            AssetEvent::DigestChanged { path } => Self::DigestChanged { path },
            AssetEvent::AssetAdded { path } => Self::AssetAdded { path },
            AssetEvent::TemplateUpdated {
                path, replacements, ..
            } => Self::TemplateUpdated {
                path,
                replacements: *replacements,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::AssetClass;
    use std::path::PathBuf;

    #[test]
    fn start_event_serializes_correctly() {
        let json = serde_json::to_value(StartEvent::new("resources")).unwrap();

        assert_eq!(json["event"], "start");
        assert_eq!(json["command"], "resources");
        assert!(json["version"].is_string());
    }

    #[test]
    fn complete_event_flattens_summary() {
        let summary = serde_json::json!({ "icons": 2 });
        let json = serde_json::to_value(CompleteEvent::success("create_icons", summary)).unwrap();

        assert_eq!(json["event"], "complete");
        assert_eq!(json["success"], true);
        assert_eq!(json["icons"], 2);
    }

    #[test]
    fn error_event_serializes_correctly() {
        let json =
            serde_json::to_value(ErrorEvent::new("create_icons", "not_found", "gone")).unwrap();

        assert_eq!(json["event"], "error");
        assert_eq!(json["code"], "not_found");
        assert_eq!(json["message"], "gone");
    }

    #[test]
    fn tool_missing_uses_snake_case_tag() {
        let event = AssetEvent::ToolMissing {
            tool: "sass".to_string(),
            class: AssetClass::Css,
        };
        let json = serde_json::to_value(AssetEventJson::from(&event)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "event": "tool_missing", "tool": "sass", "class": "css" })
        );
    }

    #[test]
    fn template_update_omits_contents() {
        let event = AssetEvent::TemplateUpdated {
            path: PathBuf::from("templates/base.html.tera"),
            replacements: 3,
            before: "old".to_string(),
            after: "new".to_string(),
        };
        let json = serde_json::to_value(AssetEventJson::from(&event)).unwrap();

        assert_eq!(json["event"], "template_updated");
        assert_eq!(json["path"], "templates/base.html.tera");
        assert_eq!(json["replacements"], 3);
        assert!(json.get("before").is_none());
        assert!(json.get("after").is_none());
    }
}
