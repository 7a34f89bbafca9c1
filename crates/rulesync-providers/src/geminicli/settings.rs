use anyhow::Result;
use rulesync_core::{file_exists, read_file_content, write_file_content};
use rulesync_types::McpConfig;
use serde_json::{Value, json};
use std::path::Path;

/// Splice the canonical MCP servers into `.gemini/settings.json`.
///
/// Read-modify-write: only the `mcpServers` key is owned by rulesync; every
/// other key in the document is preserved. An unparsable pre-existing file
/// is discarded with a console warning and rebuilt from scratch.
pub fn merge_mcp_into_settings(settings_path: &Path, config: &McpConfig) -> Result<()> {
    let mut settings: Value = if file_exists(settings_path) {
        let content = read_file_content(settings_path)?;
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => {
                eprintln!(
                    "Failed to parse existing {}, creating new settings",
                    settings_path.display()
                );
                json!({})
            }
        }
    } else {
        json!({})
    };

    if !settings.is_object() {
        settings = json!({});
    }

    settings["mcpServers"] = serde_json::to_value(&config.mcp_servers)?;

    write_file_content(settings_path, &serde_json::to_string_pretty(&settings)?)?;
    Ok(())
}
