use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use std::path::Path;

pub(crate) fn generate_kiro_config(
    rules: &[Rule],
    config: &Config,
    base_dir: &Path,
) -> Result<Vec<GeneratedOutput>> {
    let mut outputs = Vec::new();
    if rules.is_empty() {
        return Ok(outputs);
    }

    let mut sorted: Vec<&Rule> = rules.iter().collect();
    sorted.sort_by(|a, b| a.filename.cmp(&b.filename));

    let output_dir = base_dir.join(config.output_path(ToolTarget::Kiro));
    for rule in sorted {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Kiro,
            filepath: output_dir.join(format!("{}.md", rule.filename)),
            content: format!("{}\n", rule.content.trim()),
        });
    }

    Ok(outputs)
}
