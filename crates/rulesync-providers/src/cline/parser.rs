use rulesync_core::{find_files, read_file_content};
use rulesync_types::{ParseResult, Rule, RuleFrontmatter, TargetSpec, ToolTarget};
use std::path::Path;

pub(crate) fn parse_cline_configuration(base_dir: &Path) -> ParseResult {
    let mut result = ParseResult::default();

    let rules_dir = base_dir.join(".clinerules");
    if rules_dir.is_dir() {
        for path in find_files(&rules_dir, "md") {
            match read_file_content(&path) {
                Ok(content) => result.rules.push(Rule {
                    frontmatter: RuleFrontmatter {
                        targets: vec![TargetSpec::Tool(ToolTarget::Cline)],
                        ..Default::default()
                    },
                    content,
                    filename: path
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    filepath: path,
                }),
                Err(e) => result
                    .errors
                    .push(format!("Failed to read {}: {}", path.display(), e)),
            }
        }
    } else if rules_dir.is_file() {
        // Legacy layout: .clinerules is a single file, the always-on rule
        match read_file_content(&rules_dir) {
            Ok(content) => result.rules.push(Rule {
                frontmatter: RuleFrontmatter {
                    root: true,
                    targets: vec![TargetSpec::Tool(ToolTarget::Cline)],
                    ..Default::default()
                },
                content,
                filename: "clinerules".to_string(),
                filepath: rules_dir,
            }),
            Err(e) => result.errors.push(format!("Failed to read .clinerules: {}", e)),
        }
    }

    let ignore_path = base_dir.join(".clineignore");
    if let Ok(content) = std::fs::read_to_string(&ignore_path) {
        result.ignore_patterns = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
    }

    result
}
