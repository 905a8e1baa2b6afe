//! MCP JSON-RPC message types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tools call request params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallParams {
    /// Tool name
    pub name: String,
    /// Tool arguments
    #[serde(default)]
    pub arguments: Value,
}
