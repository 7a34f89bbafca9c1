pub mod generator;
pub mod parser;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

/// Roo Code: plain markdown files under `.roo/rules/`, plus `.rooignore`.
pub struct RooParser;

impl RuleParser for RooParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Roo
    }

    fn parse(&self, base_dir: &Path) -> ParseResult {
        parser::parse_roo_configuration(base_dir)
    }
}

pub struct RooGenerator;

impl RuleGenerator for RooGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Roo
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_roo_config(rules, config, base_dir)
    }
}
