use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use std::path::Path;

pub(crate) fn generate_roo_config(
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

    let output_dir = base_dir.join(config.output_path(ToolTarget::Roo));
    for rule in sorted {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Roo,
            filepath: output_dir.join(format!("{}.md", rule.filename)),
            content: format!("{}\n", rule.content.trim()),
        });
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_types::{RuleFrontmatter, TargetSpec};
    use std::path::PathBuf;

    #[test]
    fn outputs_are_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        let rules: Vec<Rule> = ["b", "a"]
            .iter()
            .map(|name| Rule {
                frontmatter: RuleFrontmatter {
                    targets: vec![TargetSpec::Wildcard],
                    ..Default::default()
                },
                content: name.to_string(),
                filename: name.to_string(),
                filepath: PathBuf::from(format!(".rulesync/{}.md", name)),
            })
            .collect();

        let outputs = generate_roo_config(&rules, &Config::default(), dir.path()).unwrap();
        assert!(outputs[0].filepath.ends_with(".roo/rules/a.md"));
        assert!(outputs[1].filepath.ends_with(".roo/rules/b.md"));
    }
}
