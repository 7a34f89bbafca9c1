pub mod generator;
pub mod parser;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

/// Cline: plain markdown files under `.clinerules/` (or the legacy single
/// `.clinerules` file) with no metadata of its own, plus `.clineignore`.
pub struct ClineParser;

impl RuleParser for ClineParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Cline
    }

    fn parse(&self, base_dir: &Path) -> ParseResult {
        parser::parse_cline_configuration(base_dir)
    }
}

pub struct ClineGenerator;

impl RuleGenerator for ClineGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Cline
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_cline_config(rules, config, base_dir)
    }
}
