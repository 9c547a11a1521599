//! Icon sprite building

mod result;
mod use_case;

pub use result::SpriteReport;
pub use use_case::SpriteBuilder;
