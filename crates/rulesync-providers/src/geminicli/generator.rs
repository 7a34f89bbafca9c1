use crate::claudecode::generator::resolve_output_dir;
use crate::markdown::render_umbrella;
use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use std::path::Path;

pub(crate) fn generate_geminicli_config(
    rules: &[Rule],
    config: &Config,
    base_dir: &Path,
) -> Result<Vec<GeneratedOutput>> {
    let mut outputs = Vec::new();
    if rules.is_empty() {
        return Ok(outputs);
    }

    let mut root_rules: Vec<&Rule> = rules.iter().filter(|r| r.frontmatter.root).collect();
    let mut detail_rules: Vec<&Rule> = rules.iter().filter(|r| !r.frontmatter.root).collect();
    root_rules.sort_by(|a, b| a.filename.cmp(&b.filename));
    detail_rules.sort_by(|a, b| a.filename.cmp(&b.filename));

    let output_dir = resolve_output_dir(base_dir, config, ToolTarget::Geminicli);

    outputs.push(GeneratedOutput {
        tool: ToolTarget::Geminicli,
        filepath: output_dir.join("GEMINI.md"),
        content: render_umbrella(".gemini/memories", &root_rules, &detail_rules),
    });

    for rule in &detail_rules {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Geminicli,
            filepath: output_dir
                .join(".gemini/memories")
                .join(format!("{}.md", rule.filename)),
            content: rule.content.trim().to_string(),
        });
    }

    Ok(outputs)
}
