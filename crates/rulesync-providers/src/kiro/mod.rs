pub mod generator;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

/// Kiro: steering files under `.kiro/steering/`. Generation is supported;
/// parsing Kiro configuration back into canonical rules is not implemented
/// yet, so the parser reports that uniformly instead of failing.
pub struct KiroParser;

impl RuleParser for KiroParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Kiro
    }

    fn parse(&self, _base_dir: &Path) -> ParseResult {
        ParseResult::not_implemented("Kiro parser not implemented for conversion")
    }
}

pub struct KiroGenerator;

impl RuleGenerator for KiroGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Kiro
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_kiro_config(rules, config, base_dir)
    }
}
