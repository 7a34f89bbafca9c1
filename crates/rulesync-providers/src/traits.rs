use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

/// Reading one tool's on-disk configuration back into canonical rules.
///
/// Responsibilities:
/// - Locate the tool's rule files, ignore file, and MCP configuration
/// - Report malformed input as error strings, never by failing the call
/// - Treat missing configuration as empty, not as a fault
pub trait RuleParser: Send + Sync {
    fn tool(&self) -> ToolTarget;

    /// Read-only file-system access rooted at `base_dir`.
    fn parse(&self, base_dir: &Path) -> ParseResult;
}

/// Rendering canonical rules into one tool's native layout.
///
/// Responsibilities:
/// - Produce (path, content) pairs in deterministic order (umbrella file
///   first, then per-rule detail files sorted by filename)
/// - Produce zero outputs for zero input rules
/// - Perform no writes, with one sanctioned exception: merging into a
///   pre-existing settings document the tool shares with other concerns
pub trait RuleGenerator: Send + Sync {
    fn tool(&self) -> ToolTarget;

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>>;
}

// --- Tool Adapter ---

/// Adapter bundling one tool's parser and generator.
///
/// Construction is an exhaustive match over `ToolTarget`, so adding a tool
/// without wiring its adapter is a compile error rather than a silently
/// missing map entry.
pub struct ToolAdapter {
    pub parser: Box<dyn RuleParser>,
    pub generator: Box<dyn RuleGenerator>,
}

impl ToolAdapter {
    pub fn new(parser: Box<dyn RuleParser>, generator: Box<dyn RuleGenerator>) -> Self {
        Self { parser, generator }
    }

    pub fn for_tool(tool: ToolTarget) -> Self {
        match tool {
            ToolTarget::Claudecode => Self::claudecode(),
            ToolTarget::Cursor => Self::cursor(),
            ToolTarget::Copilot => Self::copilot(),
            ToolTarget::Cline => Self::cline(),
            ToolTarget::Roo => Self::roo(),
            ToolTarget::Geminicli => Self::geminicli(),
            ToolTarget::Kiro => Self::kiro(),
        }
    }

    pub fn claudecode() -> Self {
        Self::new(
            Box::new(crate::claudecode::ClaudecodeParser),
            Box::new(crate::claudecode::ClaudecodeGenerator),
        )
    }

    pub fn cursor() -> Self {
        Self::new(
            Box::new(crate::cursor::CursorParser),
            Box::new(crate::cursor::CursorGenerator),
        )
    }

    pub fn copilot() -> Self {
        Self::new(
            Box::new(crate::copilot::CopilotParser),
            Box::new(crate::copilot::CopilotGenerator),
        )
    }

    pub fn cline() -> Self {
        Self::new(
            Box::new(crate::cline::ClineParser),
            Box::new(crate::cline::ClineGenerator),
        )
    }

    pub fn roo() -> Self {
        Self::new(
            Box::new(crate::roo::RooParser),
            Box::new(crate::roo::RooGenerator),
        )
    }

    pub fn geminicli() -> Self {
        Self::new(
            Box::new(crate::geminicli::GeminicliParser),
            Box::new(crate::geminicli::GeminicliGenerator),
        )
    }

    pub fn kiro() -> Self {
        Self::new(
            Box::new(crate::kiro::KiroParser),
            Box::new(crate::kiro::KiroGenerator),
        )
    }

    pub fn id(&self) -> ToolTarget {
        self.parser.tool()
    }
}
