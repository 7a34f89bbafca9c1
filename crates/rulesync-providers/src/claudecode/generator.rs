use crate::markdown::render_umbrella;
use anyhow::Result;
use rulesync_core::{Config, load_ignore_patterns};
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use std::path::Path;

pub(crate) fn generate_claudecode_config(
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

    let output_dir = resolve_output_dir(base_dir, config, ToolTarget::Claudecode);

    outputs.push(GeneratedOutput {
        tool: ToolTarget::Claudecode,
        filepath: output_dir.join("CLAUDE.md"),
        content: render_umbrella(".claude/memories", &root_rules, &detail_rules),
    });

    for rule in &detail_rules {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Claudecode,
            filepath: output_dir
                .join(".claude/memories")
                .join(format!("{}.md", rule.filename)),
            content: rule.content.trim().to_string(),
        });
    }

    // The one sanctioned generator side effect: merge Read() deny rules
    // derived from .rulesyncignore into the shared settings document.
    let ignore = load_ignore_patterns(base_dir);
    if !ignore.patterns.is_empty() {
        let settings_path = base_dir.join(".claude/settings.json");
        super::settings::update_claude_settings(&settings_path, &ignore.patterns)?;
    }

    Ok(outputs)
}

pub(crate) fn resolve_output_dir(base_dir: &Path, config: &Config, tool: ToolTarget) -> std::path::PathBuf {
    let relative = config.output_path(tool);
    if relative == Path::new(".") {
        base_dir.to_path_buf()
    } else {
        base_dir.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_types::{RuleFrontmatter, TargetSpec};
    use std::path::PathBuf;

    fn rule(filename: &str, root: bool, content: &str) -> Rule {
        Rule {
            frontmatter: RuleFrontmatter {
                root,
                targets: vec![TargetSpec::Wildcard],
                ..Default::default()
            },
            content: content.to_string(),
            filename: filename.to_string(),
            filepath: PathBuf::from(format!(".rulesync/{}.md", filename)),
        }
    }

    #[test]
    fn zero_rules_produce_zero_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let outputs =
            generate_claudecode_config(&[], &Config::default(), dir.path()).unwrap();
        assert!(outputs.is_empty());
    }

    #[test]
    fn umbrella_comes_first_then_sorted_memories() {
        let dir = tempfile::tempdir().unwrap();
        let rules = vec![
            rule("zeta", false, "z"),
            rule("overview", true, "# Overview"),
            rule("alpha", false, "a"),
        ];

        let outputs =
            generate_claudecode_config(&rules, &Config::default(), dir.path()).unwrap();
        assert_eq!(outputs.len(), 3);
        assert!(outputs[0].filepath.ends_with("CLAUDE.md"));
        assert!(outputs[1].filepath.ends_with(".claude/memories/alpha.md"));
        assert!(outputs[2].filepath.ends_with(".claude/memories/zeta.md"));
    }

    #[test]
    fn generation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let rules = vec![rule("overview", true, "# Overview"), rule("style", false, "s")];

        let first = generate_claudecode_config(&rules, &Config::default(), dir.path()).unwrap();
        let second = generate_claudecode_config(&rules, &Config::default(), dir.path()).unwrap();
        let first_contents: Vec<_> = first.iter().map(|o| &o.content).collect();
        let second_contents: Vec<_> = second.iter().map(|o| &o.content).collect();
        assert_eq!(first_contents, second_contents);
    }

    #[test]
    fn ignore_patterns_update_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".rulesyncignore"), ".env\n").unwrap();

        generate_claudecode_config(
            &[rule("overview", true, "x")],
            &Config::default(),
            dir.path(),
        )
        .unwrap();

        let settings =
            std::fs::read_to_string(dir.path().join(".claude/settings.json")).unwrap();
        assert!(settings.contains("Read(.env)"));
    }
}
