use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use std::path::Path;

pub(crate) fn generate_cline_config(
    rules: &[Rule],
    config: &Config,
    base_dir: &Path,
) -> Result<Vec<GeneratedOutput>> {
    let mut outputs = Vec::new();
    if rules.is_empty() {
        return Ok(outputs);
    }

    let mut sorted: Vec<&Rule> = rules.iter().collect();
    // Root rules first so the always-on guidance sorts to the top of the
    // directory listing Cline shows users.
    sorted.sort_by(|a, b| {
        b.frontmatter
            .root
            .cmp(&a.frontmatter.root)
            .then_with(|| a.filename.cmp(&b.filename))
    });

    let output_dir = base_dir.join(config.output_path(ToolTarget::Cline));
    for rule in sorted {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Cline,
            filepath: output_dir.join(format!("{}.md", rule.filename)),
            content: format!("{}\n", rule.content.trim()),
        });
    }

    Ok(outputs)
}
