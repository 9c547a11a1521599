//! Output layer: console text, NDJSON, and unified diffs.

pub mod console;
pub mod diff;
pub mod json;
pub mod terminal;
pub mod theme;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
