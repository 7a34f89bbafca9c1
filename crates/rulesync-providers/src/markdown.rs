use rulesync_types::Rule;

/// First line of the generated umbrella files (CLAUDE.md, GEMINI.md).
/// Parsers use it to recognize and strip the generated reference table so a
/// round trip does not embed the table into the root rule's body.
pub(crate) const REFERENCE_PREAMBLE: &str =
    "Please also reference the following documents as needed:";

/// Render an umbrella file: a reference table pointing at the per-rule
/// detail files, followed by the bodies of the root rules. Multiple root
/// rules are concatenated in the order given (callers sort by filename).
pub(crate) fn render_umbrella(memory_dir: &str, root_rules: &[&Rule], detail_rules: &[&Rule]) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !detail_rules.is_empty() {
        lines.push(REFERENCE_PREAMBLE.to_string());
        lines.push(String::new());
        lines.push("| Document | Description | File Patterns |".to_string());
        lines.push("|----------|-------------|---------------|".to_string());
        for rule in detail_rules {
            let globs = if rule.frontmatter.globs.is_empty() {
                "-".to_string()
            } else {
                rule.frontmatter.globs.join(", ")
            };
            lines.push(format!(
                "| @{}/{}.md | {} | {} |",
                memory_dir, rule.filename, rule.frontmatter.description, globs
            ));
        }
        lines.push(String::new());
    }

    for rule in root_rules {
        lines.push(rule.content.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Drop a generated reference table from the top of an umbrella file,
/// leaving only the root rule body.
pub(crate) fn strip_reference_table(content: &str) -> String {
    if !content.starts_with(REFERENCE_PREAMBLE) {
        return content.to_string();
    }

    content
        .lines()
        .skip(1)
        .skip_while(|line| line.is_empty() || line.starts_with('|'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_types::{RuleFrontmatter, TargetSpec};
    use std::path::PathBuf;

    fn rule(filename: &str, root: bool, description: &str, content: &str) -> Rule {
        Rule {
            frontmatter: RuleFrontmatter {
                root,
                targets: vec![TargetSpec::Wildcard],
                description: description.to_string(),
                globs: Vec::new(),
                cursor_rule_type: None,
            },
            content: content.to_string(),
            filename: filename.to_string(),
            filepath: PathBuf::from(format!(".rulesync/{}.md", filename)),
        }
    }

    #[test]
    fn umbrella_lists_details_then_root_body() {
        let root = rule("overview", true, "", "# Project\n\nUse Rust.");
        let detail = rule("style", false, "Code style", "Prefer iterators.");

        let umbrella = render_umbrella(".claude/memories", &[&root], &[&detail]);
        assert!(umbrella.starts_with(REFERENCE_PREAMBLE));
        assert!(umbrella.contains("| @.claude/memories/style.md | Code style | - |"));
        assert!(umbrella.contains("# Project"));
    }

    #[test]
    fn strip_reference_table_recovers_root_body() {
        let root = rule("overview", true, "", "# Project\n\nUse Rust.");
        let detail = rule("style", false, "Code style", "Prefer iterators.");
        let umbrella = render_umbrella(".claude/memories", &[&root], &[&detail]);

        let stripped = strip_reference_table(&umbrella);
        assert!(!stripped.contains('|'));
        assert!(stripped.contains("# Project"));
    }

    #[test]
    fn content_without_table_is_untouched() {
        let body = "# Hand-written\n\n| a | table |\n";
        assert_eq!(strip_reference_table(body), body);
    }
}
