use anyhow::Result;
use rulesync_types::McpConfig;
use serde_json::json;

/// Structured result of rendering a canonical MCP configuration into one
/// tool's native JSON shape. `is_empty` lets the fan-out skip writing
/// near-empty stub files without re-parsing the rendered text to inspect
/// whichever key that tool nests its servers under.
#[derive(Debug, Clone)]
pub struct RenderedMcp {
    pub content: String,
    pub is_empty: bool,
}

/// How the rendered document reaches disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpWriteMode {
    /// The file is owned entirely by rulesync; overwrite it.
    Replace,
    /// The destination is a broader settings document shared with other
    /// concerns; splice in only the MCP keys, preserving the rest.
    MergeSettings,
}

/// One fixed fan-out target: a label for reporting, a destination relative
/// to the output root, and the tool-specific renderer.
pub struct McpTarget {
    pub label: &'static str,
    pub relative_path: &'static str,
    pub mode: McpWriteMode,
    pub render: fn(&McpConfig) -> Result<RenderedMcp>,
}

/// The statically known set of MCP fan-out targets. Each is attempted
/// independently; one target failing never blocks the rest.
pub const MCP_TARGETS: &[McpTarget] = &[
    McpTarget {
        label: "claude-project",
        relative_path: ".mcp.json",
        mode: McpWriteMode::Replace,
        render: render_mcp_servers,
    },
    McpTarget {
        label: "copilot-editor",
        relative_path: ".vscode/mcp.json",
        mode: McpWriteMode::Replace,
        render: render_editor_servers,
    },
    McpTarget {
        label: "cursor-project",
        relative_path: ".cursor/mcp.json",
        mode: McpWriteMode::Replace,
        render: render_mcp_servers,
    },
    McpTarget {
        label: "cline-project",
        relative_path: ".cline/mcp.json",
        mode: McpWriteMode::Replace,
        render: render_mcp_servers,
    },
    McpTarget {
        label: "gemini-project",
        relative_path: ".gemini/settings.json",
        mode: McpWriteMode::MergeSettings,
        render: render_mcp_servers,
    },
    McpTarget {
        label: "kiro-project",
        relative_path: ".kiro/mcp.json",
        mode: McpWriteMode::Replace,
        render: render_mcp_servers,
    },
    McpTarget {
        label: "roo-project",
        relative_path: ".roo/mcp.json",
        mode: McpWriteMode::Replace,
        render: render_mcp_servers,
    },
];

/// The shape shared by Claude Code, Cursor, Cline, Roo, Kiro, and Gemini:
/// servers nested under a top-level `mcpServers` key.
fn render_mcp_servers(config: &McpConfig) -> Result<RenderedMcp> {
    let document = json!({ "mcpServers": config.mcp_servers });
    Ok(RenderedMcp {
        content: serde_json::to_string_pretty(&document)?,
        is_empty: config.is_empty(),
    })
}

/// VS Code's editor schema variant nests servers under `servers` instead.
fn render_editor_servers(config: &McpConfig) -> Result<RenderedMcp> {
    let document = json!({ "servers": config.mcp_servers });
    Ok(RenderedMcp {
        content: serde_json::to_string_pretty(&document)?,
        is_empty: config.is_empty(),
    })
}
