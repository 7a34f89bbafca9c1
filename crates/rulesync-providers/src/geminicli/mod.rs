pub mod generator;
pub mod parser;
pub mod settings;

use crate::traits::{RuleGenerator, RuleParser};
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, ParseResult, Rule, ToolTarget};
use std::path::Path;

pub use self::settings::merge_mcp_into_settings;

/// Gemini CLI: `GEMINI.md` umbrella plus `.gemini/memories/` detail files.
/// MCP servers live inside the broader `.gemini/settings.json` document
/// rather than a dedicated file.
pub struct GeminicliParser;

impl RuleParser for GeminicliParser {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Geminicli
    }

    fn parse(&self, base_dir: &Path) -> ParseResult {
        parser::parse_geminicli_configuration(base_dir)
    }
}

pub struct GeminicliGenerator;

impl RuleGenerator for GeminicliGenerator {
    fn tool(&self) -> ToolTarget {
        ToolTarget::Geminicli
    }

    fn generate(
        &self,
        rules: &[Rule],
        config: &Config,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedOutput>> {
        generator::generate_geminicli_config(rules, config, base_dir)
    }
}
