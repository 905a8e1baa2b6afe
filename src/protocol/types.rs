//! MCP Protocol type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (1-128 chars, [a-zA-Z0-9_.-])
    pub name: String,
    /// Human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tool description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input JSON Schema
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_deserializes_input_schema() {
        let tool: Tool = serde_json::from_value(json!({
            "name": "search",
            "inputSchema": { "type": "object", "properties": {} }
        }))
        .unwrap();
        assert_eq!(tool.name, "search");
        assert!(tool.title.is_none());
        assert_eq!(tool.input_schema["type"], "object");
    }

    #[test]
    fn tool_skips_absent_optionals() {
        let tool = Tool {
            name: "t".to_string(),
            title: None,
            description: Some("d".to_string()),
            input_schema: json!({}),
        };
        let json = serde_json::to_value(&tool).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["description"], "d");
        assert!(json.get("inputSchema").is_some());
    }
}
