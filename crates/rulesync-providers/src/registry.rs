use rulesync_types::ToolTarget;

/// Static description of one supported tool, used by the CLI for help
/// output and validation messages.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub tool: ToolTarget,
    pub description: &'static str,
    /// Where the tool keeps its rule configuration, relative to the
    /// project root.
    pub config_location: &'static str,
}

const TOOLS: &[ToolMetadata] = &[
    ToolMetadata {
        tool: ToolTarget::Claudecode,
        description: "Claude Code CLI",
        config_location: "CLAUDE.md + .claude/memories/",
    },
    ToolMetadata {
        tool: ToolTarget::Cursor,
        description: "Cursor IDE",
        config_location: ".cursor/rules/",
    },
    ToolMetadata {
        tool: ToolTarget::Copilot,
        description: "GitHub Copilot",
        config_location: ".github/instructions/",
    },
    ToolMetadata {
        tool: ToolTarget::Cline,
        description: "Cline VS Code extension",
        config_location: ".clinerules/",
    },
    ToolMetadata {
        tool: ToolTarget::Roo,
        description: "Roo Code",
        config_location: ".roo/rules/",
    },
    ToolMetadata {
        tool: ToolTarget::Geminicli,
        description: "Gemini CLI",
        config_location: "GEMINI.md + .gemini/memories/",
    },
    ToolMetadata {
        tool: ToolTarget::Kiro,
        description: "Kiro IDE",
        config_location: ".kiro/steering/",
    },
];

pub fn get_all_tools() -> &'static [ToolMetadata] {
    TOOLS
}

pub fn get_tool_names() -> Vec<&'static str> {
    TOOLS.iter().map(|t| t.tool.as_str()).collect()
}

pub fn get_tool_metadata(tool: ToolTarget) -> Option<&'static ToolMetadata> {
    TOOLS.iter().find(|t| t.tool == tool)
}
