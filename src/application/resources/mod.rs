//! Resource compilation and integrity resync

mod result;
mod use_case;

pub use result::{CompiledSource, ResourcesReport, TemplateUpdate};
pub use use_case::ResourceCompiler;
