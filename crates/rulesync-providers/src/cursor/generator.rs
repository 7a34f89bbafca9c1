use anyhow::Result;
use rulesync_core::Config;
use rulesync_types::{CursorRuleType, GeneratedOutput, Rule, ToolTarget};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct DescriptionField<'a> {
    description: &'a str,
}

pub(crate) fn generate_cursor_config(
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

    let output_dir = base_dir.join(config.output_path(ToolTarget::Cursor));

    for rule in sorted {
        outputs.push(GeneratedOutput {
            tool: ToolTarget::Cursor,
            filepath: output_dir.join(format!("{}.mdc", rule.filename)),
            content: render_mdc(rule)?,
        });
    }

    Ok(outputs)
}

/// Render a `.mdc` file. Cursor's frontmatter keeps `globs` as a
/// comma-separated string (blank when unused), matching what the editor
/// itself writes; the description goes through serde_yaml so values that
/// are not plain scalars (multi-paragraph notes, embedded colons) stay
/// parseable.
fn render_mdc(rule: &Rule) -> Result<String> {
    let rule_type = effective_rule_type(rule);
    let globs = match rule_type {
        CursorRuleType::SpecificFiles => rule.frontmatter.globs.join(","),
        _ => String::new(),
    };
    let always_apply = rule_type == CursorRuleType::Always;

    let description = if rule.frontmatter.description.is_empty() {
        "description: \n".to_string()
    } else {
        serde_yaml::to_string(&DescriptionField {
            description: &rule.frontmatter.description,
        })?
    };

    Ok(format!(
        "---\n{}globs: {}\nalwaysApply: {}\n---\n\n{}",
        description,
        globs,
        always_apply,
        rule.content.trim_start_matches('\n')
    ))
}

/// Pick the activation mode for a rule being written to Cursor. A rule that
/// came from Cursor keeps its original mode; anything else is derived from
/// the canonical metadata.
fn effective_rule_type(rule: &Rule) -> CursorRuleType {
    if let Some(rule_type) = rule.frontmatter.cursor_rule_type {
        return rule_type;
    }
    if rule.frontmatter.root {
        CursorRuleType::Always
    } else if !rule.frontmatter.globs.is_empty() {
        CursorRuleType::SpecificFiles
    } else if !rule.frontmatter.description.is_empty() {
        CursorRuleType::Intelligently
    } else {
        CursorRuleType::Manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_types::{RuleFrontmatter, TargetSpec};
    use std::path::PathBuf;

    fn rule(filename: &str, fm: RuleFrontmatter, content: &str) -> Rule {
        Rule {
            frontmatter: fm,
            content: content.to_string(),
            filename: filename.to_string(),
            filepath: PathBuf::from(format!(".rulesync/{}.md", filename)),
        }
    }

    #[test]
    fn root_rule_renders_as_always_apply() {
        let dir = tempfile::tempdir().unwrap();
        let r = rule(
            "overview",
            RuleFrontmatter {
                root: true,
                targets: vec![TargetSpec::Wildcard],
                ..Default::default()
            },
            "Use Rust.",
        );

        let outputs = generate_cursor_config(&[r], &Config::default(), dir.path()).unwrap();
        assert!(outputs[0].filepath.ends_with(".cursor/rules/overview.mdc"));
        assert!(outputs[0].content.contains("alwaysApply: true"));
    }

    #[test]
    fn glob_rule_renders_globs_csv() {
        let dir = tempfile::tempdir().unwrap();
        let r = rule(
            "ts",
            RuleFrontmatter {
                targets: vec![TargetSpec::Wildcard],
                globs: vec!["src/**/*.ts".to_string(), "src/**/*.tsx".to_string()],
                ..Default::default()
            },
            "TS rules.",
        );

        let outputs = generate_cursor_config(&[r], &Config::default(), dir.path()).unwrap();
        assert!(outputs[0].content.contains("globs: src/**/*.ts,src/**/*.tsx"));
        assert!(outputs[0].content.contains("alwaysApply: false"));
    }

    #[test]
    fn multi_paragraph_description_survives_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let r = rule(
            "style",
            RuleFrontmatter {
                targets: vec![TargetSpec::Wildcard],
                description: "Code style\n\n[Converted from Copilot instructions]".to_string(),
                ..Default::default()
            },
            "Prefer iterators.\n",
        );

        let outputs = generate_cursor_config(&[r], &Config::default(), dir.path()).unwrap();
        std::fs::create_dir_all(outputs[0].filepath.parent().unwrap()).unwrap();
        std::fs::write(&outputs[0].filepath, &outputs[0].content).unwrap();

        let reparsed = crate::cursor::parser::parse_cursor_configuration(dir.path());
        assert!(reparsed.errors.is_empty(), "{:?}", reparsed.errors);
        assert_eq!(
            reparsed.rules[0].frontmatter.description,
            "Code style\n\n[Converted from Copilot instructions]"
        );
    }

    #[test]
    fn content_is_preserved_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let body = "# Heading\n\n- item one\n- item two\n";
        let r = rule(
            "detail",
            RuleFrontmatter {
                targets: vec![TargetSpec::Wildcard],
                ..Default::default()
            },
            body,
        );

        let outputs = generate_cursor_config(&[r], &Config::default(), dir.path()).unwrap();
        assert!(outputs[0].content.ends_with(body));
    }
}
