use anyhow::{Context, Result};
use rulesync_core::{file_exists, read_file_content, write_file_content};
use rulesync_providers::geminicli::merge_mcp_into_settings;
use rulesync_providers::{MCP_TARGETS, McpTarget, McpWriteMode};
use rulesync_types::{McpConfig, McpGenerationResult, McpStatus};
use std::path::Path;

pub const MCP_FILE: &str = "mcp.json";

/// Render the canonical MCP configuration into every target tool's native
/// file, independently per target: one target's failure is recorded and
/// never blocks the rest.
///
/// The canonical config is `.rulesync/mcp.json` under `project_root`;
/// absence yields an empty result list since MCP is optional. Outputs land
/// under `base_dir` when given, else under the project root.
pub fn generate_mcp_configs(
    project_root: &Path,
    base_dir: Option<&Path>,
) -> Result<Vec<McpGenerationResult>> {
    let mut results = Vec::new();
    let output_root = base_dir.unwrap_or(project_root);

    let Some(config) = load_mcp_config(project_root)? else {
        return Ok(results);
    };

    for target in MCP_TARGETS {
        let path = output_root.join(target.relative_path);
        match emit_target(target, &path, &config) {
            Ok(status) => results.push(McpGenerationResult {
                tool: target.label.to_string(),
                path,
                status,
                error: None,
            }),
            Err(e) => results.push(McpGenerationResult {
                tool: target.label.to_string(),
                path,
                status: McpStatus::Error,
                error: Some(e.to_string()),
            }),
        }
    }

    Ok(results)
}

fn emit_target(target: &McpTarget, path: &Path, config: &McpConfig) -> Result<McpStatus> {
    let rendered = (target.render)(config)?;
    if rendered.is_empty {
        // Skip rather than create a near-empty stub file
        return Ok(McpStatus::Skipped);
    }

    match target.mode {
        McpWriteMode::Replace => write_file_content(path, &rendered.content)?,
        McpWriteMode::MergeSettings => merge_mcp_into_settings(path, config)?,
    }

    Ok(McpStatus::Success)
}

fn load_mcp_config(project_root: &Path) -> Result<Option<McpConfig>> {
    let path = project_root.join(".rulesync").join(MCP_FILE);
    if !file_exists(&path) {
        return Ok(None);
    }

    let content = read_file_content(&path)?;
    let config: McpConfig = serde_json::from_str(&content)
        .with_context(|| format!("Malformed {}", path.display()))?;
    Ok(Some(config))
}
