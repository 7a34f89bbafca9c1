use anyhow::Result;
use rulesync_core::{Config, frontmatter};
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct InstructionsFrontmatter<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(rename = "applyTo")]
    apply_to: String,
}

pub(crate) fn generate_copilot_config(
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

    if !root_rules.is_empty() {
        let body = root_rules
            .iter()
            .map(|r| r.content.trim())
            .collect::<Vec<_>>()
            .join("\n\n");
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Copilot,
            filepath: base_dir.join(".github/copilot-instructions.md"),
            content: format!("{}\n", body),
        });
    }

    let instructions_dir = base_dir.join(config.output_path(ToolTarget::Copilot));
    for rule in &detail_rules {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Copilot,
            filepath: instructions_dir.join(format!("{}.instructions.md", rule.filename)),
            content: render_instructions_file(rule)?,
        });
    }

    Ok(outputs)
}

/// Render through the shared frontmatter codec so descriptions that are
/// not plain scalars (multi-paragraph conversion notes, embedded colons)
/// come out as valid YAML the parser accepts back.
fn render_instructions_file(rule: &Rule) -> Result<String> {
    let apply_to = if rule.frontmatter.globs.is_empty() {
        "**".to_string()
    } else {
        rule.frontmatter.globs.join(", ")
    };

    let fm = InstructionsFrontmatter {
        description: &rule.frontmatter.description,
        apply_to,
    };
    Ok(frontmatter::render(&fm, &rule.content)?)
}
