use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Tool-agnostic description of how to launch one MCP server.
///
/// Unknown keys (e.g. `url`, `transport`, `disabled`) are preserved via
/// `extra` so a server definition survives a round trip even when rulesync
/// does not model the field. BTreeMaps keep rendered JSON deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerSpec {
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Canonical MCP configuration read from `.rulesync/mcp.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: BTreeMap<String, McpServerSpec>,
}

impl McpConfig {
    pub fn is_empty(&self) -> bool {
        self.mcp_servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_server_keys_survive_round_trip() {
        let raw = r#"{
            "mcpServers": {
                "github": {
                    "command": "npx",
                    "args": ["-y", "@modelcontextprotocol/server-github"],
                    "env": {"GITHUB_TOKEN": "x"},
                    "disabled": false
                }
            }
        }"#;
        let config: McpConfig = serde_json::from_str(raw).unwrap();
        let server = &config.mcp_servers["github"];
        assert_eq!(server.command, "npx");
        assert_eq!(server.extra["disabled"], serde_json::json!(false));

        let rendered = serde_json::to_string(&config).unwrap();
        let reparsed: McpConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn missing_servers_key_parses_as_empty() {
        let config: McpConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
    }
}
