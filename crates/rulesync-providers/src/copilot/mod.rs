pub mod generator;
pub mod parser;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

/// GitHub Copilot: `.github/copilot-instructions.md` plus scoped
/// `.github/instructions/*.instructions.md` files with an `applyTo` glob.
pub struct CopilotParser;

impl RuleParser for CopilotParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Copilot
    }

    fn parse(&self, base_dir: &Path) -> ParseResult {
        parser::parse_copilot_configuration(base_dir)
    }
}

pub struct CopilotGenerator;

impl RuleGenerator for CopilotGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Copilot
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_copilot_config(rules, config, base_dir)
    }
}
