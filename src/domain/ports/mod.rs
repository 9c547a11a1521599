//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and UI layers provide concrete implementations.

pub mod command_runner;
pub mod events;

pub use command_runner::{CommandRunner, ToolInvocation};
pub use events::{AssetClass, AssetEvent, EventSink, NoopEventSink};
