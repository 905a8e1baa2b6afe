//! MCP protocol types consumed by the tool-call coercion hook

mod messages;
mod types;

pub use messages::*;
pub use types::*;
