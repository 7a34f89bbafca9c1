use crate::markdown::strip_reference_table;
use rulesync_core::{file_exists, find_files, read_file_content};
use rulesync_types::{
    McpConfig, ParseResult, Rule, RuleFrontmatter, TargetSpec, ToolTarget,
};
use serde_json::Value;
use std::path::Path;

pub(crate) fn parse_claudecode_configuration(base_dir: &Path) -> ParseResult {
    let mut result = ParseResult::default();

    let claude_md = base_dir.join("CLAUDE.md");
    if file_exists(&claude_md) {
        match read_file_content(&claude_md) {
            Ok(content) => {
                let body = strip_reference_table(&content);
                if !body.trim().is_empty() {
                    result.rules.push(Rule {
                        frontmatter: RuleFrontmatter {
                            root: true,
                            targets: vec![TargetSpec::Tool(ToolTarget::Claudecode)],
                            ..Default::default()
                        },
                        content: body,
                        filename: "main".to_string(),
                        filepath: claude_md.clone(),
                    });
                }
            }
            Err(e) => result
                .errors
                .push(format!("Failed to read {}: {}", claude_md.display(), e)),
        }
    }

    for path in find_files(&base_dir.join(".claude/memories"), "md") {
        match read_file_content(&path) {
            Ok(content) => {
                let filename = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                result.rules.push(Rule {
                    frontmatter: RuleFrontmatter {
                        targets: vec![TargetSpec::Tool(ToolTarget::Claudecode)],
                        ..Default::default()
                    },
                    content,
                    filename,
                    filepath: path,
                });
            }
            Err(e) => result
                .errors
                .push(format!("Failed to read {}: {}", path.display(), e)),
        }
    }

    let mcp_path = base_dir.join(".mcp.json");
    if file_exists(&mcp_path) {
        match read_file_content(&mcp_path)
            .map_err(|e| e.to_string())
            .and_then(|c| serde_json::from_str::<McpConfig>(&c).map_err(|e| e.to_string()))
        {
            Ok(config) => result.mcp_servers = Some(config),
            Err(e) => result
                .errors
                .push(format!("Malformed {}: {}", mcp_path.display(), e)),
        }
    }

    result.ignore_patterns = deny_rules_as_ignore_patterns(base_dir);

    result
}

/// Recover `.rulesyncignore`-style patterns from `Read(<pattern>)` entries
/// in the permissions deny list, the inverse of the generator's merge.
fn deny_rules_as_ignore_patterns(base_dir: &Path) -> Vec<String> {
    let settings_path = base_dir.join(".claude/settings.json");
    let Ok(content) = std::fs::read_to_string(&settings_path) else {
        return Vec::new();
    };
    let Ok(settings) = serde_json::from_str::<Value>(&content) else {
        return Vec::new();
    };

    settings["permissions"]["deny"]
        .as_array()
        .map(|deny| {
            deny.iter()
                .filter_map(|v| v.as_str())
                .filter_map(|rule| {
                    rule.strip_prefix("Read(")
                        .and_then(|r| r.strip_suffix(')'))
                        .map(str::to_string)
                })
                .collect()
        })
        .unwrap_or_default()
}
