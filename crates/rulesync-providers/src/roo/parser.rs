use rulesync_core::{find_files, read_file_content};
use rulesync_types::{ParseResult, Rule, RuleFrontmatter, TargetSpec, ToolTarget};
use std::path::Path;

pub(crate) fn parse_roo_configuration(base_dir: &Path) -> ParseResult {
    let mut result = ParseResult::default();

    for path in find_files(&base_dir.join(".roo/rules"), "md") {
        match read_file_content(&path) {
            Ok(content) => result.rules.push(Rule {
                frontmatter: RuleFrontmatter {
                    targets: vec![TargetSpec::Tool(ToolTarget::Roo)],
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

    let ignore_path = base_dir.join(".rooignore");
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
