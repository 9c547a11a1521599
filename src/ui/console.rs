//! Human-readable event sink.
//!
//! Progress goes to stdout, warnings to stderr with a `warn:` prefix.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::domain::ports::{AssetEvent, EventSink};
use crate::ui::diff::render_unified_diff;
use crate::ui::theme;

/// Output stream a console line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Console event sink
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEventSink {
    verbose: bool,
    color: bool,
}

impl ConsoleEventSink {
    pub fn new(verbose: bool, color: bool) -> Self {
        Self { verbose, color }
    }

    /// Text for an event, or `None` when the event is hidden at this
    /// verbosity.
    pub fn render(&self, event: &AssetEvent) -> Option<(Stream, String)> {
        let line = match event {
            AssetEvent::ConfigWarning { message } => {
                return Some((Stream::Stderr, self.warn(message)))
            }
            AssetEvent::ToolMissing { tool, class } => {
                let message = format!("could not find {tool} in path. {class} will not be compiled");
                return Some((Stream::Stderr, self.warn(&message)));
            }
            AssetEvent::AssetAdded { path } => {
                let message = format!(
                    "new asset {}; no template references its digest yet",
                    path.display()
                );
                return Some((Stream::Stderr, self.warn(&message)));
            }
            AssetEvent::RepositoryCloning { url } => format!("cloning {url}"),
            AssetEvent::IconStaged { name, source } if self.verbose => {
                format!("staging {name} from {}", source.display())
            }
            AssetEvent::SpriteGenerating { icon_count } => {
                format!("generating sprite from {icon_count} icons")
            }
            AssetEvent::SpriteWritten { path } => format!("wrote {}", path.display()),
            AssetEvent::Compiling { source, .. } => format!("compiling {}", source.display()),
            AssetEvent::DigestChanged { path } if self.verbose => {
                format!("digest changed: {}", path.display())
            }
            AssetEvent::TemplateUpdated {
                path,
                before,
                after,
                ..
            } => {
                let mut text = format!("updating {}", path.display());
                if self.verbose {
                    text.push('\n');
                    text.push_str(&render_unified_diff(
                        &path.display().to_string(),
                        before,
                        after,
                        self.color,
                    ));
                    // the diff already ends with a newline
                    text.pop();
                }
                text
            }
            AssetEvent::IconStaged { .. } | AssetEvent::DigestChanged { .. } => return None,
        };
        Some((Stream::Stdout, line))
    }

    fn warn(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "warn:".with(theme::colors::WARNING), message)
        } else {
            format!("warn: {}", message)
        }
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: AssetEvent) {
        let Some((stream, line)) = self.render(&event) else {
            return;
        };
        let _ = match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}"),
        };
    }
}
