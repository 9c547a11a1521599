//! Event Port
//!
//! Progress reporting for both tools. Sinks decide how (or whether) to
//! show events: console text, NDJSON, or nothing.

use std::fmt;
use std::path::PathBuf;

/// Class of compiled asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Css,
    Js,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Css => "css",
            AssetClass::Js => "js",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted while building sprites or compiling resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetEvent {
    /// Non-fatal configuration problem (e.g. unknown key)
    ConfigWarning { message: String },

    /// Icon repository clone started
    RepositoryCloning { url: String },

    /// Icon copied into the staging directory under its manifest name
    IconStaged { name: String, source: PathBuf },

    /// Sprite tool started
    SpriteGenerating { icon_count: usize },

    /// Sprite copied to its destination
    SpriteWritten { path: PathBuf },

    /// A compiler was not found; its asset class will not be compiled
    ToolMissing { tool: String, class: AssetClass },

    /// A source is about to be compiled
    Compiling {
        class: AssetClass,
        source: PathBuf,
        output: PathBuf,
    },

    /// An asset's digest changed
    DigestChanged { path: PathBuf },

    /// An asset appeared during compilation; templates are not touched
    AssetAdded { path: PathBuf },

    /// A template was rewritten
    TemplateUpdated {
        path: PathBuf,
        replacements: usize,
        before: String,
        after: String,
    },
}

/// Trait for receiving asset events
pub trait EventSink {
    fn on_event(&self, event: AssetEvent);
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn on_event(&self, event: AssetEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: AssetEvent) {}
}

/// Test sink that keeps every event
#[cfg(test)]
#[derive(Default)]
pub struct CollectingSink {
    pub events: std::cell::RefCell<Vec<AssetEvent>>,
}

#[cfg(test)]
impl EventSink for CollectingSink {
    fn on_event(&self, event: AssetEvent) {
        self.events.borrow_mut().push(event);
    }
}
