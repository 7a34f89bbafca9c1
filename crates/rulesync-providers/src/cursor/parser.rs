use rulesync_core::{file_exists, find_files, frontmatter, read_file_content};
use rulesync_types::{
    CursorRuleType, McpConfig, ParseResult, Rule, RuleFrontmatter, TargetSpec, ToolTarget,
};
use serde::Deserialize;
use std::path::Path;

/// Frontmatter of a `.mdc` file. Cursor writes `globs` either as a
/// comma-separated string or a YAML list depending on editor version.
#[derive(Debug, Default, Deserialize)]
struct MdcFrontmatter {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    globs: Option<MdcGlobs>,
    #[serde(rename = "alwaysApply", default)]
    always_apply: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MdcGlobs {
    One(String),
    Many(Vec<String>),
}

impl MdcGlobs {
    fn into_vec(self) -> Vec<String> {
        match self {
            MdcGlobs::One(s) => s
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
            MdcGlobs::Many(list) => list,
        }
    }
}

pub(crate) fn parse_cursor_configuration(base_dir: &Path) -> ParseResult {
    let mut result = ParseResult::default();

    for path in find_files(&base_dir.join(".cursor/rules"), "mdc") {
        let content = match read_file_content(&path) {
            Ok(c) => c,
            Err(e) => {
                result
                    .errors
                    .push(format!("Failed to read {}: {}", path.display(), e));
                continue;
            }
        };

        match frontmatter::parse::<MdcFrontmatter>(&content) {
            Ok((fm, body)) => {
                let fm = fm.unwrap_or_default();
                let description = fm.description.unwrap_or_default();
                let globs = fm.globs.map(MdcGlobs::into_vec).unwrap_or_default();
                let rule_type = derive_rule_type(fm.always_apply, &globs, &description);

                result.rules.push(Rule {
                    frontmatter: RuleFrontmatter {
                        root: fm.always_apply,
                        targets: vec![TargetSpec::Tool(ToolTarget::Cursor)],
                        description,
                        globs,
                        cursor_rule_type: Some(rule_type),
                    },
                    content: body.to_string(),
                    filename: path
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    filepath: path,
                });
            }
            Err(e) => result
                .errors
                .push(format!("Malformed frontmatter in {}: {}", path.display(), e)),
        }
    }

    // Legacy single-file configuration predating .cursor/rules
    let legacy = base_dir.join(".cursorrules");
    if file_exists(&legacy) {
        match read_file_content(&legacy) {
            Ok(content) => result.rules.push(Rule {
                frontmatter: RuleFrontmatter {
                    root: true,
                    targets: vec![TargetSpec::Tool(ToolTarget::Cursor)],
                    cursor_rule_type: Some(CursorRuleType::Always),
                    ..Default::default()
                },
                content,
                filename: "cursorrules".to_string(),
                filepath: legacy,
            }),
            Err(e) => result
                .errors
                .push(format!("Failed to read {}: {}", legacy.display(), e)),
        }
    }

    let ignore_path = base_dir.join(".cursorignore");
    if let Ok(content) = std::fs::read_to_string(&ignore_path) {
        result.ignore_patterns = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
    }

    let mcp_path = base_dir.join(".cursor/mcp.json");
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

    result
}

fn derive_rule_type(always_apply: bool, globs: &[String], description: &str) -> CursorRuleType {
    if always_apply {
        CursorRuleType::Always
    } else if !globs.is_empty() {
        CursorRuleType::SpecificFiles
    } else if !description.is_empty() {
        CursorRuleType::Intelligently
    } else {
        CursorRuleType::Manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_mdc(dir: &Path, name: &str, content: &str) {
        let rules_dir = dir.join(".cursor/rules");
        std::fs::create_dir_all(&rules_dir).unwrap();
        std::fs::write(rules_dir.join(name), content).unwrap();
    }

    #[test]
    fn always_apply_maps_to_root_always_rule() {
        let dir = tempfile::tempdir().unwrap();
        write_mdc(
            dir.path(),
            "base.mdc",
            "---\ndescription: Base rules\nalwaysApply: true\n---\nAlways on.\n",
        );

        let result = parse_cursor_configuration(dir.path());
        let rule = &result.rules[0];
        assert!(rule.frontmatter.root);
        assert_eq!(rule.frontmatter.cursor_rule_type, Some(CursorRuleType::Always));
        assert_eq!(rule.frontmatter.targets, vec![TargetSpec::Tool(ToolTarget::Cursor)]);
    }

    #[test]
    fn comma_separated_globs_map_to_specific_files() {
        let dir = tempfile::tempdir().unwrap();
        write_mdc(
            dir.path(),
            "ts.mdc",
            "---\nglobs: \"src/**/*.ts, src/**/*.tsx\"\n---\nTypeScript rules.\n",
        );

        let result = parse_cursor_configuration(dir.path());
        let rule = &result.rules[0];
        assert_eq!(rule.frontmatter.globs, vec!["src/**/*.ts", "src/**/*.tsx"]);
        assert_eq!(
            rule.frontmatter.cursor_rule_type,
            Some(CursorRuleType::SpecificFiles)
        );
        assert!(!rule.frontmatter.root);
    }

    #[test]
    fn description_only_maps_to_intelligently() {
        let dir = tempfile::tempdir().unwrap();
        write_mdc(
            dir.path(),
            "api.mdc",
            "---\ndescription: API conventions\n---\nUse REST.\n",
        );

        let result = parse_cursor_configuration(dir.path());
        assert_eq!(
            result.rules[0].frontmatter.cursor_rule_type,
            Some(CursorRuleType::Intelligently)
        );
    }

    #[test]
    fn bare_rule_maps_to_manual() {
        let dir = tempfile::tempdir().unwrap();
        write_mdc(dir.path(), "scratch.mdc", "---\n---\nOn demand only.\n");

        let result = parse_cursor_configuration(dir.path());
        assert_eq!(
            result.rules[0].frontmatter.cursor_rule_type,
            Some(CursorRuleType::Manual)
        );
    }

    #[test]
    fn malformed_mdc_is_an_error_string_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_mdc(dir.path(), "bad.mdc", "---\nglobs: [unterminated\n---\nbody\n");
        write_mdc(dir.path(), "good.mdc", "---\ndescription: ok\n---\nbody\n");

        let result = parse_cursor_configuration(dir.path());
        assert_eq!(result.rules.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("bad.mdc"));
    }

    #[test]
    fn legacy_cursorrules_and_ignore_file_are_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".cursorrules"), "Legacy rules.").unwrap();
        std::fs::write(dir.path().join(".cursorignore"), "dist/**\n# x\n").unwrap();

        let result = parse_cursor_configuration(dir.path());
        assert_eq!(result.rules[0].filename, "cursorrules");
        assert_eq!(result.ignore_patterns, vec!["dist/**"]);
    }
}
