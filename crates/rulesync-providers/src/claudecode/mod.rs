pub mod generator;
pub mod parser;
pub mod settings;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

pub use self::settings::update_claude_settings;

/// Claude Code: `CLAUDE.md` umbrella plus `.claude/memories/` detail files,
/// MCP servers in `.mcp.json`, deny rules in `.claude/settings.json`.
pub struct ClaudecodeParser;

impl RuleParser for ClaudecodeParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Claudecode
    }

    fn parse(&self, base_dir: &Path) -> ParseResult {
        parser::parse_claudecode_configuration(base_dir)
    }
}

pub struct ClaudecodeGenerator;

impl RuleGenerator for ClaudecodeGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Claudecode
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_claudecode_config(rules, config, base_dir)
    }
}
