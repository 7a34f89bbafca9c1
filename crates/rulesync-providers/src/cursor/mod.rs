pub mod generator;
pub mod parser;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

/// Cursor: `.cursor/rules/*.mdc` with an activation-mode taxonomy
/// (always/manual/specificFiles/intelligently) no other tool shares, plus
/// the legacy `.cursorrules` file, `.cursorignore`, and `.cursor/mcp.json`.
pub struct CursorParser;

impl RuleParser for CursorParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Cursor
    }

    fn parse(&self, base_dir: &Path) -> ParseResult {
        parser::parse_cursor_configuration(base_dir)
    }
}

pub struct CursorGenerator;

impl RuleGenerator for CursorGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Cursor
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_cursor_config(rules, config, base_dir)
    }
}
